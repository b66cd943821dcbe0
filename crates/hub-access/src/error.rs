//! Error types for access checks
//!
//! A failed check is a `false`, not an error. Errors are reserved for data
//! lookups that fail and for the guard helpers, which turn a `false` into
//! the response a route handler should send.

use hub_rbac::{Action, ResourceType};
use thiserror::Error;
use uuid::Uuid;

use crate::config::ConfigError;
use crate::repository::RepositoryError;

/// Access error types.
#[derive(Debug, Error)]
pub enum AccessError {
    /// Data lookup failed; passed through unchanged
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Resource is missing or hidden from the user
    #[error("{0} not found")]
    NotFound(ResourceType),

    /// Resource is visible but the action is not allowed
    #[error("Forbidden: cannot {action} {resource}")]
    Forbidden {
        /// Resource acted on
        resource: ResourceType,
        /// Attempted action
        action: Action,
    },

    /// Proposed assignee may not hold todos in this scope
    #[error("User {0} cannot be assigned this todo")]
    InvalidAssignee(Uuid),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for access operations.
pub type AccessResult<T> = Result<T, AccessError>;

impl AccessError {
    /// Check if this error should be logged at error level.
    pub fn is_server_error(&self) -> bool {
        matches!(self, AccessError::Repository(_) | AccessError::Config(_))
    }

    /// Get HTTP status code for this error.
    ///
    /// Hidden resources report 404 so private entities cannot be probed.
    pub fn status_code(&self) -> u16 {
        match self {
            AccessError::NotFound(_) => 404,
            AccessError::Forbidden { .. } => 403,
            AccessError::InvalidAssignee(_) => 422,
            AccessError::Repository(_) | AccessError::Config(_) => 500,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            AccessError::Repository(_) => "INTERNAL_ERROR",
            AccessError::NotFound(_) => "NOT_FOUND",
            AccessError::Forbidden { .. } => "FORBIDDEN",
            AccessError::InvalidAssignee(_) => "INVALID_ASSIGNEE",
            AccessError::Config(_) => "CONFIG_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AccessError::NotFound(ResourceType::Project).status_code(), 404);
        assert_eq!(
            AccessError::Forbidden {
                resource: ResourceType::Todo,
                action: Action::Delete
            }
            .status_code(),
            403
        );
        assert_eq!(AccessError::InvalidAssignee(Uuid::nil()).status_code(), 422);
        assert_eq!(
            AccessError::from(RepositoryError::Unavailable("db down".into())).status_code(),
            500
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            AccessError::NotFound(ResourceType::Product).to_string(),
            "product not found"
        );
        assert_eq!(
            AccessError::Forbidden {
                resource: ResourceType::Member,
                action: Action::Manage
            }
            .to_string(),
            "Forbidden: cannot manage member"
        );
    }

    #[test]
    fn test_repository_errors_pass_through() {
        let err = AccessError::from(RepositoryError::Query("syntax".into()));
        assert!(err.is_server_error());
        assert_eq!(err.to_string(), RepositoryError::Query("syntax".into()).to_string());
    }
}
