//! In-memory repository
//!
//! Suitable for tests and single-process embedders.

use async_trait::async_trait;
use hub_org::{Application, EntityKind, EntityRecord, MemberRole, Membership, Todo};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::repository::{AccessRepository, RepositoryError, RepositoryResult};

/// In-memory [`AccessRepository`].
///
/// Memberships are stored on their entity's record and are unique per
/// (entity, user): adding a member twice replaces the earlier role.
#[derive(Default)]
pub struct MemoryRepository {
    entities: Arc<RwLock<HashMap<(EntityKind, Uuid), EntityRecord>>>,
    todos: Arc<RwLock<HashMap<Uuid, Todo>>>,
    applications: Arc<RwLock<HashMap<(Uuid, Uuid), Application>>>,
    unavailable: AtomicBool,
}

impl std::fmt::Debug for MemoryRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryRepository")
            .field("unavailable", &self.unavailable.load(Ordering::Relaxed))
            .finish()
    }
}

impl MemoryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entity record.
    pub async fn insert_entity(&self, record: EntityRecord) {
        self.entities
            .write()
            .await
            .insert((record.kind, record.id), record);
    }

    /// Add a member, or change the role of an existing one.
    pub async fn upsert_member(
        &self,
        kind: EntityKind,
        entity_id: Uuid,
        user_id: Uuid,
        role: MemberRole,
    ) -> RepositoryResult<()> {
        let mut entities = self.entities.write().await;
        let record = entities
            .get_mut(&(kind, entity_id))
            .ok_or_else(|| RepositoryError::Query(format!("{kind} {entity_id} does not exist")))?;

        match record.members.iter_mut().find(|m| m.user_id == user_id) {
            Some(existing) => existing.role = role,
            None => record.members.push(Membership::new(entity_id, user_id, role)),
        }
        Ok(())
    }

    /// Remove a member. Returns whether a row was removed.
    pub async fn remove_member(&self, kind: EntityKind, entity_id: Uuid, user_id: Uuid) -> bool {
        let mut entities = self.entities.write().await;
        let Some(record) = entities.get_mut(&(kind, entity_id)) else {
            return false;
        };
        let before = record.members.len();
        record.members.retain(|m| m.user_id != user_id);
        record.members.len() != before
    }

    /// Insert or replace a todo.
    pub async fn insert_todo(&self, todo: Todo) {
        self.todos.write().await.insert(todo.id, todo);
    }

    /// Insert or replace a user's application to a project.
    pub async fn insert_application(&self, application: Application) {
        self.applications
            .write()
            .await
            .insert((application.user_id, application.project_id), application);
    }

    /// Make every lookup fail, simulating a store outage.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Relaxed);
    }

    fn check_available(&self) -> RepositoryResult<()> {
        if self.unavailable.load(Ordering::Relaxed) {
            return Err(RepositoryError::Unavailable("memory repository offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl AccessRepository for MemoryRepository {
    async fn find_entity(
        &self,
        kind: EntityKind,
        entity_id: Uuid,
    ) -> RepositoryResult<Option<EntityRecord>> {
        self.check_available()?;
        Ok(self.entities.read().await.get(&(kind, entity_id)).cloned())
    }

    async fn find_membership(
        &self,
        kind: EntityKind,
        entity_id: Uuid,
        user_id: Uuid,
    ) -> RepositoryResult<Option<Membership>> {
        self.check_available()?;
        Ok(self
            .entities
            .read()
            .await
            .get(&(kind, entity_id))
            .and_then(|record| record.members.iter().find(|m| m.user_id == user_id))
            .cloned())
    }

    async fn find_todo(&self, todo_id: Uuid) -> RepositoryResult<Option<Todo>> {
        self.check_available()?;
        Ok(self.todos.read().await.get(&todo_id).cloned())
    }

    async fn find_application(
        &self,
        user_id: Uuid,
        project_id: Uuid,
    ) -> RepositoryResult<Option<Application>> {
        self.check_available()?;
        Ok(self
            .applications
            .read()
            .await
            .get(&(user_id, project_id))
            .cloned())
    }
}
