//! Error types for token authentication
//!
//! This module defines the errors raised while verifying personal access
//! tokens presented by tool integrations.

use thiserror::Error;

/// Authentication error types.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token has expired
    #[error("Token has expired")]
    TokenExpired,

    /// Token has been revoked by its owner
    #[error("Token has been revoked")]
    TokenRevoked,

    /// Token is malformed or does not match the stored hash
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token is valid but its scopes do not cover the request
    #[error("Forbidden: token scope does not include {0}")]
    InsufficientScope(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;

impl AuthError {
    /// Check if this error should be logged at error level.
    ///
    /// Expired or mistyped tokens are expected and are not server errors.
    pub fn is_server_error(&self) -> bool {
        matches!(self, AuthError::Internal(_))
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::TokenExpired | AuthError::TokenRevoked | AuthError::InvalidToken(_) => 401,
            AuthError::InsufficientScope(_) => 403,
            AuthError::Internal(_) => 500,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::TokenExpired => "TOKEN_EXPIRED",
            AuthError::TokenRevoked => "TOKEN_REVOKED",
            AuthError::InvalidToken(_) => "INVALID_TOKEN",
            AuthError::InsufficientScope(_) => "INSUFFICIENT_SCOPE",
            AuthError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
