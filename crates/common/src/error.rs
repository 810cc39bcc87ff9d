//! Common error types shared across crates.

use thiserror::Error;

/// Top-level service error type.
///
/// Variants map to HTTP status codes returned to callers:
/// - [`ServiceError::CookieNotFound`] → 400
/// - [`ServiceError::InvalidCookie`] → 400
/// - [`ServiceError::NotFound`] → 404
/// - [`ServiceError::Internal`] → 500
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request did not carry the expected cookie.
    #[error("cookie not found")]
    CookieNotFound,

    /// The cookie was malformed, tampered with, or sealed for another name.
    #[error("invalid cookie")]
    InvalidCookie,

    /// The requested route or resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// An unexpected internal error occurred. The detail is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::CookieNotFound | ServiceError::InvalidCookie => 400,
            ServiceError::NotFound(_) => 404,
            ServiceError::Internal(_) => 500,
        }
    }

    /// Short machine-readable code for the error body.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::CookieNotFound => "cookie_not_found",
            ServiceError::InvalidCookie => "invalid_cookie",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Internal(_) => "internal_error",
        }
    }

    /// Message safe to show to the client.
    pub fn public_message(&self) -> String {
        match self {
            ServiceError::Internal(_) => "server error".into(),
            other => other.to_string(),
        }
    }
}
