//! Access-relevant view of an entity
//!
//! Projects, products and organizations share the fields that access checks
//! look at: visibility, owner, owning organization and members. This module
//! provides [`EntityRecord`], the loaded shape the checkers operate on.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::membership::Membership;
use crate::roles::MemberRole;
use crate::visibility::Visibility;

/// The three resource kinds subject to visibility and role rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A volunteer project
    Project,
    /// A product built by an organization or a single user
    Product,
    /// An organization
    Organization,
}

impl EntityKind {
    /// Get the string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Product => "product",
            Self::Organization => "organization",
        }
    }

    /// Parse kind from string (case-insensitive, accepts plurals).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "project" | "projects" => Some(Self::Project),
            "product" | "products" => Some(Self::Product),
            "organization" | "organizations" | "org" | "orgs" => Some(Self::Organization),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entity loaded together with its members.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use hub_org::{EntityKind, EntityRecord, MemberRole, Membership, Visibility};
///
/// let owner = Uuid::now_v7();
/// let member = Uuid::now_v7();
/// let mut record = EntityRecord::new(Uuid::now_v7(), EntityKind::Project, Visibility::Private)
///     .with_owner(owner);
/// record.members.push(Membership::new(record.id, member, MemberRole::Member));
///
/// assert!(record.is_owner(owner));
/// assert_eq!(record.member_role(member), Some(MemberRole::Member));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntityRecord {
    /// Entity ID
    pub id: Uuid,

    /// Which table the entity lives in
    pub kind: EntityKind,

    /// Read access level
    pub visibility: Visibility,

    /// Recorded owner, if any
    pub owner_id: Option<Uuid>,

    /// Owning organization, if any
    pub organization_id: Option<Uuid>,

    /// Single-user scope: only the owner may mutate
    #[serde(default)]
    pub personal: bool,

    /// Membership rows for this entity
    #[serde(default)]
    pub members: Vec<Membership>,
}

impl EntityRecord {
    /// Creates a record with no owner, organization or members.
    pub fn new(id: Uuid, kind: EntityKind, visibility: Visibility) -> Self {
        Self {
            id,
            kind,
            visibility,
            owner_id: None,
            organization_id: None,
            personal: false,
            members: Vec::new(),
        }
    }

    /// Set the owner.
    pub fn with_owner(mut self, owner_id: Uuid) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Set the owning organization.
    pub fn with_organization(mut self, organization_id: Uuid) -> Self {
        self.organization_id = Some(organization_id);
        self
    }

    /// Replace the member list.
    pub fn with_members(mut self, members: Vec<Membership>) -> Self {
        self.members = members;
        self
    }

    /// Whether `user_id` is the recorded owner.
    pub fn is_owner(&self, user_id: Uuid) -> bool {
        self.owner_id == Some(user_id)
    }

    /// The role of `user_id` from the member list, if listed.
    pub fn member_role(&self, user_id: Uuid) -> Option<MemberRole> {
        self.members
            .iter()
            .find(|m| m.user_id == user_id)
            .map(|m| m.role)
    }

    /// Whether `user_id` has any membership row.
    pub fn is_member(&self, user_id: Uuid) -> bool {
        self.members.iter().any(|m| m.user_id == user_id)
    }

    /// Personal entities have no organization and a single-user scope.
    pub fn is_personal(&self) -> bool {
        self.personal && self.organization_id.is_none()
    }
}
