//! Data access for the checkers
//!
//! The checkers never talk to a database directly. They read through an
//! injected [`AccessRepository`], so embedders plug in their own store and
//! tests use [`crate::MemoryRepository`].

use async_trait::async_trait;
use hub_org::{Application, EntityKind, EntityRecord, Membership, Todo};
use thiserror::Error;
use uuid::Uuid;

/// Repository error types.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Store could not be reached
    #[error("Repository unavailable: {0}")]
    Unavailable(String),

    /// Query failed
    #[error("Query failed: {0}")]
    Query(String),
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Read-only lookups the access checks need.
///
/// Implementations return `Ok(None)` for missing rows and reserve errors
/// for failures of the store itself.
#[async_trait]
pub trait AccessRepository: Send + Sync {
    /// Load a project, product or organization together with its members.
    async fn find_entity(
        &self,
        kind: EntityKind,
        entity_id: Uuid,
    ) -> RepositoryResult<Option<EntityRecord>>;

    /// Load one user's membership row on an entity.
    async fn find_membership(
        &self,
        kind: EntityKind,
        entity_id: Uuid,
        user_id: Uuid,
    ) -> RepositoryResult<Option<Membership>>;

    /// Load a todo.
    async fn find_todo(&self, todo_id: Uuid) -> RepositoryResult<Option<Todo>>;

    /// Load a user's application to a project.
    async fn find_application(
        &self,
        user_id: Uuid,
        project_id: Uuid,
    ) -> RepositoryResult<Option<Application>>;
}
