//! Error model used by YouTrack API client operations.

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, YouTrackError>;

/// Error conditions raised by YouTrack API interactions: HTTP failures with
/// status and message, authentication rejections, timeouts, network issues
/// and payload decode problems.
#[derive(Debug, Error)]
pub enum YouTrackError {
    #[error("http {status}: {message}")]
    Http {
        status: StatusCode,
        code: Option<String>,
        message: String,
    },
    #[error("authentication error: {0}")]
    Authentication(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("unexpected error: {0}")]
    Other(String),
}

impl YouTrackError {
    /// Constructs an HTTP error variant with an optional server error code.
    pub fn http(status: StatusCode, code: Option<String>, message: impl Into<String>) -> Self {
        YouTrackError::Http {
            status,
            code,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for YouTrackError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            YouTrackError::Timeout(err.to_string())
        } else if err.is_status() {
            let status = err.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            YouTrackError::Http {
                status,
                code: None,
                message: err.to_string(),
            }
        } else if err.is_connect() {
            YouTrackError::Network(err.to_string())
        } else {
            YouTrackError::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for YouTrackError {
    fn from(err: serde_json::Error) -> Self {
        YouTrackError::Serialization(err.to_string())
    }
}
