//! Transport error taxonomy shared by every HTTP-backed port.

use std::sync::Arc;
use thiserror::Error;

/// Result type for API port operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by API port implementations.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never produced a response (connection, timeout, TLS).
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The server rejected the credentials (HTTP 401).
    #[error("unauthorized")]
    Unauthorized,

    /// The server answered with a non-success status.
    #[error("server returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
    /// Wraps a transport-level failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a response decoding failure.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }

    /// Builds a status error for a non-success response.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for HTTP 401 responses.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Classifies a response status, returning the error for non-success codes.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] for 401 and [`ApiError::Status`] for
/// every other status outside `200..300`.
pub fn check_status(status: u16, body: impl FnOnce() -> String) -> ApiResult<()> {
    match status {
        200..=299 => Ok(()),
        401 => Err(ApiError::Unauthorized),
        _ => Err(ApiError::status(status, body())),
    }
}
