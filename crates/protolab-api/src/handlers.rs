//! REST API endpoint handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/api/personality-results` | Record a result, once per client |
//! | `GET` | `/api/personality-results` | Leaderboard |
//! | `POST` | `/api/personality-results/clear` | Remove every result for one agent |
//! | `GET` | `/api/profiles` | All profiles by code |
//! | `GET` | `/api/profiles/{code}` | One profile with its choices |
//! | `GET` | `/api/sim/frame` | Latest simulation frame |
//! | `POST` | `/api/sim/pointer` | Queue a pointer command |

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use protolab_db::build_leaderboard;
use protolab_quiz::AgentProfile;
use protolab_sim::PointerCommand;
use protolab_types::{Choice, LeaderboardEntry, ResultCode, ResultRecord};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::error::TrySendError;

use crate::error::ApiError;
use crate::state::AppState;

/// Identity used when no client address header is present.
pub const UNKNOWN_IDENTITY: &str = "unknown";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/personality-results`.
#[derive(Debug, Deserialize)]
pub struct SubmitResultRequest {
    /// Display name of the resolved profile.
    pub agent: String,
    /// Five-letter result code.
    pub sequence: String,
}

/// Response for `POST /api/personality-results`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitResultResponse {
    success: bool,
    message: &'static str,
    is_new_result: bool,
}

/// Response for `GET /api/personality-results`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LeaderboardResponse {
    success: bool,
    leaderboard: Vec<LeaderboardEntry>,
    total_results: u32,
}

/// Request body for `POST /api/personality-results/clear`.
#[derive(Debug, Deserialize)]
pub struct ClearAgentRequest {
    /// Agent display name whose results are removed.
    pub agent: String,
}

/// Response for `POST /api/personality-results/clear`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClearAgentResponse {
    success: bool,
    message: String,
    removed_count: usize,
    total_results: usize,
}

/// One profile with everything the result card shows.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileResponse {
    success: bool,
    code: String,
    profile: AgentProfile,
    icon_path: String,
    choices: Vec<Choice>,
}

/// Short listing entry for `GET /api/profiles`.
#[derive(Debug, Serialize)]
struct ProfileSummary<'a> {
    code: String,
    name: &'a str,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Caller identity: first `x-forwarded-for` entry, else `x-real-ip`,
/// else [`UNKNOWN_IDENTITY`].
pub fn client_identity(headers: &HeaderMap) -> String {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());

    header("x-forwarded-for")
        .and_then(|forwarded| forwarded.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .or_else(|| header("x-real-ip").map(str::trim).filter(|ip| !ip.is_empty()))
        .unwrap_or(UNKNOWN_IDENTITY)
        .to_owned()
}

fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value).map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

fn parse_code(raw: &str) -> Result<ResultCode, ApiError> {
    raw.parse().map_err(|e| ApiError::BadRequest(format!("invalid result code {raw:?}: {e}")))
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Record a quiz result unless this client already has one.
///
/// # Route
///
/// `POST /api/personality-results`
pub async fn submit_result(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<SubmitResultRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = parse_body(body)?;
    let sequence = parse_code(&request.sequence)?;
    if request.agent.trim().is_empty() {
        return Err(ApiError::BadRequest("agent must not be empty".to_owned()));
    }
    let identity = client_identity(&headers);

    let record = ResultRecord::new(identity.as_str(), request.agent, sequence);
    let outcome = state.store.append_if_new(record).await?;
    tracing::info!(identity = %identity, %sequence, accepted = outcome.accepted, "result submitted");

    let message = if outcome.accepted { "Result recorded" } else { "Result already recorded for this IP" };
    Ok(Json(SubmitResultResponse { success: true, message, is_new_result: outcome.accepted }))
}

/// Agents ranked by number of results.
///
/// # Route
///
/// `GET /api/personality-results`
pub async fn leaderboard(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let records = state.store.list_all().await?;
    let board = build_leaderboard(&records);
    Ok(Json(LeaderboardResponse { success: true, leaderboard: board.entries, total_results: board.total_results }))
}

/// Remove every result for one agent.
///
/// # Route
///
/// `POST /api/personality-results/clear`
pub async fn clear_agent(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ClearAgentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = parse_body(body)?;
    let removed = state.store.remove_agent(&request.agent).await?;
    let total = state.store.list_all().await?.len();
    tracing::info!(agent = %request.agent, removed, total, "agent results cleared");

    let message = if removed == 0 {
        format!("No {} data found to clear", request.agent)
    } else {
        format!("Successfully cleared {removed} {} results", request.agent)
    };
    Ok(Json(ClearAgentResponse { success: true, message, removed_count: removed, total_results: total }))
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

/// Every profile, in code order.
///
/// # Route
///
/// `GET /api/profiles`
pub async fn list_profiles(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let profiles: Vec<ProfileSummary<'_>> = state
        .quiz
        .profiles()
        .iter()
        .map(|(code, profile)| ProfileSummary { code: code.to_string(), name: &profile.name })
        .collect();
    Json(serde_json::json!({ "success": true, "count": profiles.len(), "profiles": profiles }))
}

/// One profile with its five binary choices.
///
/// # Route
///
/// `GET /api/profiles/{code}`
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let code = parse_code(&code)?;
    let profile = state
        .quiz
        .profile_for(code)
        .ok_or_else(|| ApiError::NotFound(format!("no profile for {code}")))?;

    Ok(Json(ProfileResponse {
        success: true,
        code: code.to_string(),
        icon_path: profile.icon_path(),
        profile: profile.clone(),
        choices: code.choices(),
    }))
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

/// The most recent frame, or an empty one before the first frame.
///
/// # Route
///
/// `GET /api/sim/frame`
pub async fn latest_frame(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let frame = state.latest_frame.read().await.clone().unwrap_or_default();
    Json(frame)
}

/// Queue a pointer command for the next frame.
///
/// # Route
///
/// `POST /api/sim/pointer`
pub async fn pointer(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PointerCommand>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let command = parse_body(body)?;
    let sim = state.sim.as_ref().ok_or_else(|| ApiError::Unavailable("simulator is not running".to_owned()))?;

    match sim.inputs.try_send(command) {
        Ok(()) => Ok((StatusCode::ACCEPTED, Json(serde_json::json!({ "success": true })))),
        Err(TrySendError::Full(_)) => Err(ApiError::Unavailable("pointer queue is full".to_owned())),
        Err(TrySendError::Closed(_)) => Err(ApiError::Unavailable("simulator has stopped".to_owned())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn identity_prefers_first_forwarded_entry() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static(" 203.0.113.7 , 10.0.0.1"));
        headers.insert("x-real-ip", HeaderValue::from_static("10.9.9.9"));
        assert_eq!(client_identity(&headers), "203.0.113.7");
    }

    #[test]
    fn identity_falls_back_to_real_ip_then_unknown() {
        let mut headers = HeaderMap::new();
        assert_eq!(client_identity(&headers), UNKNOWN_IDENTITY);
        headers.insert("x-real-ip", HeaderValue::from_static("10.9.9.9"));
        assert_eq!(client_identity(&headers), "10.9.9.9");
        headers.insert("x-forwarded-for", HeaderValue::from_static(""));
        assert_eq!(client_identity(&headers), "10.9.9.9");
    }
}
