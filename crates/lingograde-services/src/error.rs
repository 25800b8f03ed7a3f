//! Service error types.

use thiserror::Error;

/// Errors that can occur when talking to the grading or persistence backends.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Authentication failed (invalid API key or service account).
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The API returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),
}
