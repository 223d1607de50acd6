//! Error types for REST API calls.

use thiserror::Error;

/// Errors that can occur while talking to the reviews endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, connect, timeout, broken body)
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Server error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Response body was not a list of reviews
    #[error("Malformed response: {0}")]
    Decode(String),

    /// Single-review lookup returned no results
    #[error("Review '{slug}' not found")]
    NotFound { slug: String },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Configured endpoint could not be turned into a URL
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ApiError {
    /// Short machine-readable error kind, used in logs and CLI output.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Connection { .. } => "connection_error",
            ApiError::Status { .. } => "status_error",
            ApiError::Decode(_) => "decode_error",
            ApiError::NotFound { .. } => "not_found",
            ApiError::Client(_) => "client_error",
            ApiError::InvalidUrl { .. } => "invalid_url",
        }
    }
}
