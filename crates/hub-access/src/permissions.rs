//! Role-based permission checker
//!
//! Decides whether a user may *act* on a project, product or organization
//! they can see. The functions take an already-loaded [`EntityRecord`] and
//! do not query anything.
//!
//! - The recorded owner may edit, delete and manage members
//! - ADMIN and OWNER members may edit and manage members
//! - Only the recorded owner may delete
//! - Personal entities ignore the member list entirely

use hub_org::{EntityKind, EntityRecord, MemberRole};
use hub_rbac::{Action, ResourceType};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::control::AccessControl;
use crate::error::AccessResult;
use crate::policy::{resource_for, role_permissions};
use crate::repository::AccessRepository;

/// The user's effective role: OWNER for the recorded owner, otherwise the
/// role on their membership row.
pub fn user_role(entity: &EntityRecord, user_id: Uuid) -> Option<MemberRole> {
    if entity.is_owner(user_id) {
        return Some(MemberRole::Owner);
    }
    if entity.is_personal() {
        return None;
    }
    entity.member_role(user_id)
}

/// May `user_id` edit the entity?
pub fn can_edit(entity: &EntityRecord, user_id: Uuid) -> bool {
    role_allows(entity, user_id, resource_for(entity.kind), Action::Update)
}

/// May `user_id` delete the entity? Only the recorded owner may.
pub fn can_delete(entity: &EntityRecord, user_id: Uuid) -> bool {
    entity.is_owner(user_id)
}

/// May `user_id` add, remove or re-role members?
pub fn can_manage_members(entity: &EntityRecord, user_id: Uuid) -> bool {
    role_allows(entity, user_id, ResourceType::Member, Action::Manage)
}

fn role_allows(entity: &EntityRecord, user_id: Uuid, resource: ResourceType, action: Action) -> bool {
    if entity.is_owner(user_id) {
        return true;
    }
    if entity.is_personal() {
        return false;
    }
    entity
        .member_role(user_id)
        .is_some_and(|role| role_permissions(role, entity.kind).allows(resource, action))
}

/// Everything a user may do to one entity, for rendering controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityPermissions {
    /// Effective role, if any
    pub role: Option<MemberRole>,
    /// May edit the entity
    pub can_edit: bool,
    /// May delete the entity
    pub can_delete: bool,
    /// May manage members
    pub can_manage_members: bool,
}

impl EntityPermissions {
    /// Compute the permissions of `user_id` on a loaded entity.
    pub fn for_user(entity: &EntityRecord, user_id: Uuid) -> Self {
        Self {
            role: user_role(entity, user_id),
            can_edit: can_edit(entity, user_id),
            can_delete: can_delete(entity, user_id),
            can_manage_members: can_manage_members(entity, user_id),
        }
    }

    /// No rights at all.
    pub fn none() -> Self {
        Self {
            role: None,
            can_edit: false,
            can_delete: false,
            can_manage_members: false,
        }
    }
}

impl<R: AccessRepository + ?Sized> AccessControl<R> {
    /// Load an entity and compute the user's permissions on it.
    ///
    /// A missing entity yields [`EntityPermissions::none`].
    pub async fn entity_permissions(
        &self,
        user_id: Uuid,
        entity_id: Uuid,
        kind: EntityKind,
    ) -> AccessResult<EntityPermissions> {
        match self.repo.find_entity(kind, entity_id).await? {
            Some(entity) => Ok(EntityPermissions::for_user(&entity, user_id)),
            None => {
                debug!(%entity_id, %kind, "Entity not found");
                Ok(EntityPermissions::none())
            }
        }
    }

    /// May `user_id` edit the entity? `false` if it does not exist.
    pub async fn can_edit_entity(
        &self,
        user_id: Uuid,
        entity_id: Uuid,
        kind: EntityKind,
    ) -> AccessResult<bool> {
        Ok(self.entity_permissions(user_id, entity_id, kind).await?.can_edit)
    }

    /// May `user_id` delete the entity? `false` if it does not exist.
    pub async fn can_delete_entity(
        &self,
        user_id: Uuid,
        entity_id: Uuid,
        kind: EntityKind,
    ) -> AccessResult<bool> {
        Ok(self.entity_permissions(user_id, entity_id, kind).await?.can_delete)
    }

    /// May `user_id` manage the entity's members? `false` if it does not exist.
    pub async fn can_manage_entity_members(
        &self,
        user_id: Uuid,
        entity_id: Uuid,
        kind: EntityKind,
    ) -> AccessResult<bool> {
        Ok(self
            .entity_permissions(user_id, entity_id, kind)
            .await?
            .can_manage_members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_org::{Membership, Visibility};

    fn project_with(owner: Uuid, members: &[(Uuid, MemberRole)]) -> EntityRecord {
        let id = Uuid::now_v7();
        EntityRecord::new(id, EntityKind::Project, Visibility::Private)
            .with_owner(owner)
            .with_organization(Uuid::now_v7())
            .with_members(
                members
                    .iter()
                    .map(|(user, role)| Membership::new(id, *user, *role))
                    .collect(),
            )
    }

    #[test]
    fn test_owner_has_every_right() {
        let owner = Uuid::now_v7();
        let entity = project_with(owner, &[]);

        assert_eq!(
            EntityPermissions::for_user(&entity, owner),
            EntityPermissions {
                role: Some(MemberRole::Owner),
                can_edit: true,
                can_delete: true,
                can_manage_members: true,
            }
        );
    }

    #[test]
    fn test_role_table() {
        let owner_row = Uuid::now_v7();
        let admin = Uuid::now_v7();
        let member = Uuid::now_v7();
        let viewer = Uuid::now_v7();
        let entity = project_with(
            Uuid::now_v7(),
            &[
                (owner_row, MemberRole::Owner),
                (admin, MemberRole::Admin),
                (member, MemberRole::Member),
                (viewer, MemberRole::Viewer),
            ],
        );

        for user in [owner_row, admin] {
            assert!(can_edit(&entity, user));
            assert!(can_manage_members(&entity, user));
            assert!(!can_delete(&entity, user));
        }
        for user in [member, viewer] {
            assert!(!can_edit(&entity, user));
            assert!(!can_manage_members(&entity, user));
            assert!(!can_delete(&entity, user));
        }

        let stranger = Uuid::now_v7();
        assert_eq!(EntityPermissions::for_user(&entity, stranger), EntityPermissions::none());
    }

    #[test]
    fn test_personal_entity_ignores_members() {
        let owner = Uuid::now_v7();
        let admin = Uuid::now_v7();
        let id = Uuid::now_v7();
        let mut entity = EntityRecord::new(id, EntityKind::Product, Visibility::Public)
            .with_owner(owner)
            .with_members(vec![Membership::new(id, admin, MemberRole::Admin)]);
        entity.personal = true;

        assert!(can_edit(&entity, owner));
        assert!(can_manage_members(&entity, owner));
        assert!(!can_edit(&entity, admin));
        assert!(!can_manage_members(&entity, admin));
        assert_eq!(user_role(&entity, admin), None);
    }

    #[test]
    fn test_user_role_lookup() {
        let owner = Uuid::now_v7();
        let member = Uuid::now_v7();
        let entity = project_with(owner, &[(member, MemberRole::Member)]);

        assert_eq!(user_role(&entity, owner), Some(MemberRole::Owner));
        assert_eq!(user_role(&entity, member), Some(MemberRole::Member));
        assert_eq!(user_role(&entity, Uuid::now_v7()), None);
    }
}
