//! Guard helpers for route handlers
//!
//! Each `require_*` runs a check and turns a `false` into the error a
//! handler should return. Entities the user cannot see are reported as
//! missing so their existence is not leaked.

use hub_org::{EntityKind, EntityRecord, Todo};
use hub_rbac::{Action, ResourceType};
use uuid::Uuid;

use crate::control::AccessControl;
use crate::error::{AccessError, AccessResult};
use crate::permissions;
use crate::policy::resource_for;
use crate::repository::AccessRepository;

impl<R: AccessRepository + ?Sized> AccessControl<R> {
    /// Load an entity the user may view.
    ///
    /// # Errors
    ///
    /// `NotFound` when the entity is missing or hidden.
    pub async fn require_view(
        &self,
        user_id: Option<Uuid>,
        entity_id: Uuid,
        kind: EntityKind,
    ) -> AccessResult<EntityRecord> {
        let entity = self
            .repo
            .find_entity(kind, entity_id)
            .await?
            .ok_or(AccessError::NotFound(resource_for(kind)))?;

        if self.can_view_loaded(user_id, &entity).await? {
            Ok(entity)
        } else {
            Err(AccessError::NotFound(resource_for(kind)))
        }
    }

    /// Load an entity the user may edit.
    ///
    /// # Errors
    ///
    /// `NotFound` when hidden, `Forbidden` when visible but not editable.
    pub async fn require_edit(
        &self,
        user_id: Uuid,
        entity_id: Uuid,
        kind: EntityKind,
    ) -> AccessResult<EntityRecord> {
        let entity = self.require_view(Some(user_id), entity_id, kind).await?;
        ensure(
            permissions::can_edit(&entity, user_id),
            resource_for(kind),
            Action::Update,
        )?;
        Ok(entity)
    }

    /// Load an entity the user may delete.
    pub async fn require_delete(
        &self,
        user_id: Uuid,
        entity_id: Uuid,
        kind: EntityKind,
    ) -> AccessResult<EntityRecord> {
        let entity = self.require_view(Some(user_id), entity_id, kind).await?;
        ensure(
            permissions::can_delete(&entity, user_id),
            resource_for(kind),
            Action::Delete,
        )?;
        Ok(entity)
    }

    /// Load an entity whose members the user may manage.
    pub async fn require_manage_members(
        &self,
        user_id: Uuid,
        entity_id: Uuid,
        kind: EntityKind,
    ) -> AccessResult<EntityRecord> {
        let entity = self.require_view(Some(user_id), entity_id, kind).await?;
        ensure(
            permissions::can_manage_members(&entity, user_id),
            ResourceType::Member,
            Action::Manage,
        )?;
        Ok(entity)
    }

    /// Load a todo the user may update or move.
    ///
    /// # Errors
    ///
    /// `NotFound` when the todo is missing, `Forbidden` otherwise.
    pub async fn require_todo_update(&self, user_id: Uuid, todo_id: Uuid) -> AccessResult<Todo> {
        let todo = self.load_todo(todo_id).await?;
        let allowed = self.can_update_loaded_todo(user_id, &todo).await?;
        ensure(allowed, ResourceType::Todo, Action::Update)?;
        Ok(todo)
    }

    /// Load a todo the user may delete.
    pub async fn require_todo_delete(&self, user_id: Uuid, todo_id: Uuid) -> AccessResult<Todo> {
        let todo = self.load_todo(todo_id).await?;
        let allowed = self.can_delete_loaded_todo(user_id, &todo).await?;
        ensure(allowed, ResourceType::Todo, Action::Delete)?;
        Ok(todo)
    }

    async fn load_todo(&self, todo_id: Uuid) -> AccessResult<Todo> {
        self.repo
            .find_todo(todo_id)
            .await?
            .ok_or(AccessError::NotFound(ResourceType::Todo))
    }
}

fn ensure(allowed: bool, resource: ResourceType, action: Action) -> AccessResult<()> {
    if allowed {
        Ok(())
    } else {
        Err(AccessError::Forbidden { resource, action })
    }
}
