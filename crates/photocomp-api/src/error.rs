//! Error types for platform API calls.

use thiserror::Error;

/// Error type for all API client operations.
///
/// Failures are surfaced per call; a failed request never poisons the
/// client, which can be reused for the next call as-is.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or transport-level HTTP error from reqwest.
    ///
    /// Includes connection failures, timeouts, and TLS errors.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    ///
    /// `message` carries the server's `message` field when the body is
    /// the platform's JSON error shape, the raw body when it is not, and
    /// a generic fallback when the body is empty.
    #[error("server error ({status}): {message}")]
    Server {
        /// The HTTP status code the server returned.
        status: u16,
        /// Human-readable description of what went wrong.
        message: String,
    },
}

/// Convenience Result alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
