//! Configuration for the terminal client.
//!
//! Everything comes from environment variables; nothing is required.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::CliError;

/// API base URL used when `PROTOLAB_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Base URL of the API, without a trailing slash.
    pub api_url: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Custom question bank; the stock quiz when absent.
    pub questions_file: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// - `PROTOLAB_API_URL` -- API base URL (default [`DEFAULT_API_URL`])
    /// - `PROTOLAB_TIMEOUT_MS` -- request timeout in milliseconds (default 5000)
    /// - `PROTOLAB_QUESTIONS_FILE` -- YAML question bank
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup` instead of the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let api_url = lookup("PROTOLAB_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        let api_url = api_url.trim().trim_end_matches('/').to_owned();
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(CliError::Config(format!("PROTOLAB_API_URL must be an http(s) URL, got {api_url:?}")));
        }

        let timeout_ms: u64 = lookup("PROTOLAB_TIMEOUT_MS")
            .unwrap_or_else(|| "5000".to_owned())
            .parse()
            .map_err(|e| CliError::Config(format!("invalid PROTOLAB_TIMEOUT_MS: {e}")))?;

        let questions_file = lookup("PROTOLAB_QUESTIONS_FILE").filter(|p| !p.is_empty()).map(PathBuf::from);

        Ok(Self { api_url, request_timeout: Duration::from_millis(timeout_ms), questions_file })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults() {
        let config = CliConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.questions_file, None);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = CliConfig::from_lookup(lookup(&[("PROTOLAB_API_URL", "https://protolab.example/ ")])).unwrap();
        assert_eq!(config.api_url, "https://protolab.example");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            CliConfig::from_lookup(lookup(&[("PROTOLAB_API_URL", "localhost:8080")])),
            Err(CliError::Config(_))
        ));
        assert!(matches!(
            CliConfig::from_lookup(lookup(&[("PROTOLAB_TIMEOUT_MS", "soon")])),
            Err(CliError::Config(_))
        ));
    }
}
