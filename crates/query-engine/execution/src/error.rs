//! Errors that can be thrown when executing a request.

use serde::Deserialize;
use thiserror::Error;

/// Request execution errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The service answered, but reported an error.
    #[error("{0}")]
    Service(ServiceError),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unable to decode the response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("invalid table name '{0}'")]
    InvalidTableName(String),
    #[error("invalid header value: {0}")]
    InvalidHeader(String),
}

/// An error reported by the service.
///
/// Its display form is the service's message, unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceError {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(skip)]
    pub status: u16,
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ServiceError {}

impl ServiceError {
    /// Decode an error body. Bodies that are not a JSON error object become the
    /// message verbatim; an empty body falls back to the status line.
    pub fn from_body(status: reqwest::StatusCode, body: &str) -> Self {
        match serde_json::from_str::<ServiceError>(body) {
            Ok(error) if !error.message.is_empty() => ServiceError {
                status: status.as_u16(),
                ..error
            },
            _ => {
                let message = if body.trim().is_empty() {
                    status.to_string()
                } else {
                    body.to_string()
                };
                ServiceError {
                    message,
                    code: None,
                    details: None,
                    hint: None,
                    status: status.as_u16(),
                }
            }
        }
    }
}
