//! HTTP client for the results API.
//!
//! [`ApiClient`] wraps `reqwest` for the three result endpoints;
//! [`HttpResultSink`] plugs it into a quiz session as its result sink.

use futures::future::BoxFuture;
use protolab_quiz::{ResultSink, ResultSubmission, SinkError, SubmitOutcome};
use protolab_types::LeaderboardEntry;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::CliConfig;
use crate::error::CliError;

/// Response of `POST /api/personality-results`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    /// Server message.
    pub message: String,
    /// Whether this client had no earlier result.
    pub is_new_result: bool,
}

/// Response of `GET /api/personality-results`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    /// Agents by descending count.
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Number of stored results.
    pub total_results: u32,
}

/// Response of `POST /api/personality-results/clear`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearResponse {
    /// Server message.
    pub message: String,
    /// Results removed.
    pub removed_count: usize,
    /// Results left.
    pub total_results: usize,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Thin client over the results API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for `config.api_url`.
    pub fn new(config: &CliConfig) -> Result<Self, CliError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| CliError::Http(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, base_url: config.api_url.clone() })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Record a result for this client.
    pub async fn submit_result(&self, submission: &ResultSubmission) -> Result<SubmitResponse, CliError> {
        let response = self
            .http
            .post(self.url("/api/personality-results"))
            .json(submission)
            .send()
            .await
            .map_err(|e| CliError::Http(format!("result submission failed: {e}")))?;
        read_json(response).await
    }

    /// Fetch the leaderboard.
    pub async fn leaderboard(&self) -> Result<LeaderboardResponse, CliError> {
        let response = self
            .http
            .get(self.url("/api/personality-results"))
            .send()
            .await
            .map_err(|e| CliError::Http(format!("leaderboard request failed: {e}")))?;
        read_json(response).await
    }

    /// Remove every result for `agent`.
    pub async fn clear_agent(&self, agent: &str) -> Result<ClearResponse, CliError> {
        let response = self
            .http
            .post(self.url("/api/personality-results/clear"))
            .json(&serde_json::json!({ "agent": agent }))
            .send()
            .await
            .map_err(|e| CliError::Http(format!("clear request failed: {e}")))?;
        read_json(response).await
    }
}

/// Decode a success body, or turn an error status into [`CliError::Api`].
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, CliError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_else(|_| "unable to read error body".to_owned());
        let message = serde_json::from_str::<ErrorBody>(&body).map_or(body, |parsed| parsed.error);
        return Err(CliError::Api { status: status.as_u16(), message });
    }
    response
        .json()
        .await
        .map_err(|e| CliError::Http(format!("response parse failed: {e}")))
}

/// Posts completed quiz results to the API.
#[derive(Debug, Clone)]
pub struct HttpResultSink {
    client: ApiClient,
}

impl HttpResultSink {
    /// A sink posting through `client`.
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl ResultSink for HttpResultSink {
    fn submit(&self, submission: ResultSubmission) -> BoxFuture<'static, Result<SubmitOutcome, SinkError>> {
        let client = self.client.clone();
        Box::pin(async move {
            let response = client.submit_result(&submission).await.map_err(sink_error)?;
            tracing::debug!(message = %response.message, "result endpoint answered");
            Ok(SubmitOutcome { accepted: response.is_new_result })
        })
    }
}

fn sink_error(error: CliError) -> SinkError {
    match error {
        CliError::Http(message) => SinkError::Unreachable(message),
        other => SinkError::Write(other.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn config(api_url: &str) -> CliConfig {
        CliConfig { api_url: api_url.to_owned(), request_timeout: Duration::from_millis(200), questions_file: None }
    }

    #[test]
    fn urls_join_base_and_path() {
        let client = ApiClient::new(&config("http://127.0.0.1:9999")).unwrap();
        assert_eq!(client.url("/api/profiles"), "http://127.0.0.1:9999/api/profiles");
    }

    #[test]
    fn responses_use_camel_case() {
        let submit: SubmitResponse =
            serde_json::from_str(r#"{"success":true,"message":"Result recorded","isNewResult":true}"#).unwrap();
        assert!(submit.is_new_result);

        let board: LeaderboardResponse = serde_json::from_str(
            r#"{"success":true,"leaderboard":[{"agent":"Clippy","count":3}],"totalResults":3}"#,
        )
        .unwrap();
        assert_eq!(board.total_results, 3);
        assert_eq!(board.leaderboard[0].agent, "Clippy");

        let cleared: ClearResponse = serde_json::from_str(
            r#"{"success":true,"message":"Successfully cleared 2 Clippy results","removedCount":2,"totalResults":1}"#,
        )
        .unwrap();
        assert_eq!(cleared.removed_count, 2);
    }

    #[test]
    fn transport_failures_are_unreachable() {
        assert!(matches!(sink_error(CliError::Http("refused".to_owned())), SinkError::Unreachable(_)));
        let api = CliError::Api { status: 500, message: "Failed to access results".to_owned() };
        assert!(matches!(sink_error(api), SinkError::Write(_)));
    }

    #[tokio::test]
    async fn sink_reports_unreachable_api() {
        // Port 9 (discard) is closed on test hosts; the connect fails fast.
        let sink = HttpResultSink::new(ApiClient::new(&config("http://127.0.0.1:9")).unwrap());
        let submission = ResultSubmission { agent: "Clippy".to_owned(), sequence: "WTSAD".parse().unwrap() };
        let result = sink.submit(submission).await;
        assert!(matches!(result, Err(SinkError::Unreachable(_))));
    }
}
