//! Error types for the tracker reporting core
//!
//! This module defines error types for each layer:
//! - `TrackerError`: transport and wire-format failures of the tracker API client
//! - `ConfigError`: configuration loading failures
//!
//! Field-level defects in API responses are not errors. They are absorbed by
//! `domain::coercion` into default values.

use thiserror::Error;

/// Tracker API client errors
///
/// Any of these aborts the fetch that produced it; the core never retries.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized - invalid token")]
    Unauthorized,

    #[error("Invalid API token: not a legal header value")]
    InvalidToken,

    #[error("Malformed document: {0}")]
    Parse(String),
}

impl From<roxmltree::Error> for TrackerError {
    fn from(e: roxmltree::Error) -> Self {
        TrackerError::Parse(e.to_string())
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        let err = TrackerError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 500 - boom");
    }

    #[test]
    fn parse_error_from_roxmltree() {
        let err: TrackerError = roxmltree::Document::parse("<project>")
            .map(|_| ())
            .unwrap_err()
            .into();
        assert!(matches!(err, TrackerError::Parse(_)));
    }

    #[test]
    fn config_error_display() {
        assert_eq!(
            ConfigError::Missing("TRACKER_API_TOKEN").to_string(),
            "TRACKER_API_TOKEN must be set"
        );
        let err = ConfigError::Invalid {
            var: "TRACKER_TIMEOUT_SECS",
            value: "soon".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for TRACKER_TIMEOUT_SECS: soon");
    }
}
