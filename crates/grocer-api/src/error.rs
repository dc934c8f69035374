//! Error types for the grocery list API client.

use thiserror::Error;

/// Error type for API client operations.
///
/// Call sites treat every variant the same way: abandon the operation, show
/// the user one short line, log the detail. There is no retry.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for API client operations.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
