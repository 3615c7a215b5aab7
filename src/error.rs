//! Error types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The only error text the dashboard ever shows for a failed fetch cycle.
pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to fetch weather data. Please try again in a moment.";

/// Failure of one weather API read.
///
/// Carried inside actions, so it stores rendered messages rather than the
/// underlying `reqwest`/`serde_json` errors.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("response parse error: {0}")]
    Parse(String),
}

impl FetchError {
    /// User-facing text; network and parse failures look the same on screen.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Parse(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

/// Startup configuration problems
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("missing API key: pass {flag} or set {env}")]
    MissingApiKey {
        flag: &'static str,
        env: &'static str,
    },
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("failed to set up logging: {0}")]
    Logging(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_share_user_message() {
        let network = FetchError::Network("connection refused".into());
        let parse = FetchError::Parse("missing field `main`".into());
        assert_eq!(network.user_message(), parse.user_message());
        assert_eq!(network.user_message(), FETCH_FAILED_MESSAGE);
    }

    #[test]
    fn test_display_keeps_detail() {
        let err = FetchError::Parse("missing field `main`".into());
        assert_eq!(err.to_string(), "response parse error: missing field `main`");
    }
}
