//! Visibility resolver
//!
//! Decides whether a user may *view* a project, product or organization.
//!
//! - **Public**: visible to everyone, including anonymous users
//! - **Draft**: visible to the owner; drafts of organization-owned products
//!   are also visible to the organization's OWNERs
//! - **Private**: visible to the owner, listed members, and any member of
//!   the owning organization
//!
//! A missing entity is simply not visible. Callers answer both cases with
//! 404 so private entities cannot be discovered.

use hub_org::{EntityKind, EntityRecord, MemberRole, Visibility};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::config::AccessConfig;
use crate::control::AccessControl;
use crate::error::AccessResult;
use crate::repository::AccessRepository;

/// Pure visibility rule over a loaded entity.
///
/// `org_role` is the user's role in the entity's owning organization, if
/// the entity has one and the user is a member of it.
pub fn visible_to(
    entity: &EntityRecord,
    user_id: Option<Uuid>,
    org_role: Option<MemberRole>,
    config: &AccessConfig,
) -> bool {
    if entity.visibility == Visibility::Public {
        return true;
    }

    let Some(user_id) = user_id else {
        return false;
    };

    if entity.is_owner(user_id) {
        return true;
    }

    match entity.visibility {
        Visibility::Public => true,
        Visibility::Draft => {
            config.org_owner_sees_product_drafts
                && entity.kind == EntityKind::Product
                && entity.organization_id.is_some()
                && org_role == Some(MemberRole::Owner)
        }
        Visibility::Private => {
            entity.is_member(user_id) || (entity.organization_id.is_some() && org_role.is_some())
        }
    }
}

/// Whether deciding visibility needs the user's organization role.
fn needs_org_role(entity: &EntityRecord, user_id: Uuid, config: &AccessConfig) -> bool {
    if entity.organization_id.is_none() || entity.is_owner(user_id) {
        return false;
    }
    match entity.visibility {
        Visibility::Public => false,
        Visibility::Draft => {
            config.org_owner_sees_product_drafts && entity.kind == EntityKind::Product
        }
        Visibility::Private => !entity.is_member(user_id),
    }
}

impl<R: AccessRepository + ?Sized> AccessControl<R> {
    /// May `user_id` view the entity? `None` is an anonymous visitor.
    ///
    /// Returns `Ok(false)` when the entity does not exist. Repository
    /// failures propagate as errors.
    #[instrument(skip(self))]
    pub async fn can_view_entity(
        &self,
        user_id: Option<Uuid>,
        entity_id: Uuid,
        kind: EntityKind,
    ) -> AccessResult<bool> {
        let Some(entity) = self.repo.find_entity(kind, entity_id).await? else {
            debug!(%entity_id, %kind, "Entity not found");
            return Ok(false);
        };
        self.can_view_loaded(user_id, &entity).await
    }

    /// Visibility check on an entity the caller already loaded.
    ///
    /// Queries the organization membership only when the answer depends on it.
    pub async fn can_view_loaded(
        &self,
        user_id: Option<Uuid>,
        entity: &EntityRecord,
    ) -> AccessResult<bool> {
        let org_role = match (user_id, entity.organization_id) {
            (Some(user_id), Some(org_id)) if needs_org_role(entity, user_id, &self.config) => {
                self.organization_role(org_id, user_id).await?
            }
            _ => None,
        };

        let visible = visible_to(entity, user_id, org_role, &self.config);
        if !visible {
            debug!(
                entity_id = %entity.id,
                kind = %entity.kind,
                visibility = entity.visibility.as_str(),
                "Entity hidden from user"
            );
        }
        Ok(visible)
    }

    /// The user's role in an organization, if they are a member.
    ///
    /// The recorded owner is OWNER whether or not a membership row exists.
    pub async fn organization_role(
        &self,
        organization_id: Uuid,
        user_id: Uuid,
    ) -> AccessResult<Option<MemberRole>> {
        let Some(org) = self
            .repo
            .find_entity(EntityKind::Organization, organization_id)
            .await?
        else {
            return Ok(None);
        };
        if org.is_owner(user_id) {
            return Ok(Some(MemberRole::Owner));
        }

        Ok(self
            .repo
            .find_membership(EntityKind::Organization, organization_id, user_id)
            .await?
            .map(|m| m.role))
    }
}
