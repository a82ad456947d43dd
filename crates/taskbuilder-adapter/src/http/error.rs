/*
[INPUT]:  Error sources (HTTP, API, serialization, configuration)
[OUTPUT]: Structured error types with user-facing rendering
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the query adapter
#[derive(Error, Debug)]
pub enum AdapterError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// API replied with something other than JSON
    #[error("non-JSON response (status {status})")]
    NonJsonResponse { status: u16, body: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AdapterError {
    /// Create an API error from status code and response body
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        AdapterError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// Text shown to the user in place of the component table.
    ///
    /// Non-JSON reply bodies are surfaced verbatim; everything else renders
    /// through the error's `Display`.
    pub fn user_message(&self) -> String {
        match self {
            AdapterError::NonJsonResponse { body, .. } => body.clone(),
            other => format!("Error: {other}"),
        }
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, AdapterError>;
