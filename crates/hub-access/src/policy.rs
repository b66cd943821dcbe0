//! Role → permission mapping
//!
//! Each membership role grants a fixed [`PermissionSet`] on the entity it is
//! attached to. Deleting an entity is never granted by a role; only the
//! recorded owner may delete.

use hub_org::{EntityKind, MemberRole};
use hub_rbac::{Action, PermissionSet, ResourceType};

/// The RBAC resource type of an entity kind.
pub fn resource_for(kind: EntityKind) -> ResourceType {
    match kind {
        EntityKind::Project => ResourceType::Project,
        EntityKind::Product => ResourceType::Product,
        EntityKind::Organization => ResourceType::Organization,
    }
}

/// Permissions a membership role grants on an entity of `kind`.
///
/// | Role   | Entity   | Members  | Todos                      |
/// |--------|----------|----------|----------------------------|
/// | OWNER  | update   | manage   | manage                     |
/// | ADMIN  | update   | manage   | manage                     |
/// | MEMBER | read     |          | read, create, update, move |
/// | VIEWER | read     |          | read                       |
///
/// # Example
///
/// ```
/// use hub_access::policy::role_permissions;
/// use hub_org::{EntityKind, MemberRole};
/// use hub_rbac::{Action, ResourceType};
///
/// let admin = role_permissions(MemberRole::Admin, EntityKind::Project);
/// assert!(admin.allows(ResourceType::Project, Action::Update));
/// assert!(!admin.allows(ResourceType::Project, Action::Delete));
/// ```
pub fn role_permissions(role: MemberRole, kind: EntityKind) -> PermissionSet {
    let entity = resource_for(kind);
    match role {
        MemberRole::Owner | MemberRole::Admin => PermissionSet::new()
            .with(entity, Action::Update)
            .with(ResourceType::Member, Action::Manage)
            .with(ResourceType::Todo, Action::Manage),
        MemberRole::Member => PermissionSet::new()
            .with(entity, Action::Read)
            .with(ResourceType::Todo, Action::Create)
            .with(ResourceType::Todo, Action::Update),
        MemberRole::Viewer => PermissionSet::new()
            .with(entity, Action::Read)
            .with(ResourceType::Todo, Action::Read),
    }
}
