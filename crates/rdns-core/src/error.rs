//! Error types for the rdns challenge provider
//!
//! Record clients report failures through [`Error`]; the challenge provider
//! hands them back to the orchestrator untouched.

use thiserror::Error;

/// Result type alias for rdns operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the rdns challenge provider
#[derive(Error, Debug)]
pub enum Error {
    /// The outgoing request could not be built (bad URL, bad header value)
    #[error("Request construction failed: {0}")]
    RequestBuild(String),

    /// The remote API could not be reached or the response could not be read
    #[error("Transport error: {0}")]
    Transport(String),

    /// The remote API answered with a status the operation does not accept
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code returned by the API
        status: u16,
        /// Full response body, kept for diagnostics
        body: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a request construction error
    pub fn request_build(msg: impl Into<String>) -> Self {
        Self::RequestBuild(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create an unexpected status error
    pub fn unexpected_status(status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// HTTP status carried by the error, if the API answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
