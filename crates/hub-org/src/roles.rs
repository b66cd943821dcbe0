//! Member roles
//!
//! This module defines the role a user holds on a project, product or
//! organization through a membership row.

use serde::{Deserialize, Serialize};

/// Role held by a member of a project, product or organization.
///
/// Roles are ordered: Viewer < Member < Admin < Owner.
///
/// # Permission Model
///
/// - **Viewer**: Read-only access
/// - **Member**: Can work on todos, cannot edit the entity itself
/// - **Admin**: Can edit the entity and manage its members
/// - **Owner**: Same as Admin at the membership level; deleting the entity
///   is reserved for the entity's recorded owner
///
/// # Examples
///
/// ```
/// use hub_org::MemberRole;
///
/// let role = MemberRole::Member;
/// assert!(role.can_manage_todos());
/// assert!(!role.can_edit());
///
/// let admin = MemberRole::Admin;
/// assert!(admin.can_edit());
/// assert!(admin.can_manage_members());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    /// Read-only access
    Viewer = 1,

    /// Regular participant
    Member = 2,

    /// Can edit the entity and manage members
    Admin = 3,

    /// Owner-level membership
    Owner = 4,
}

impl MemberRole {
    /// Check if this role is admin-level (Admin or Owner).
    pub fn is_admin(&self) -> bool {
        *self >= MemberRole::Admin
    }

    /// Check if this role can edit the entity it is attached to.
    ///
    /// # Returns
    ///
    /// `true` for Admin and Owner roles
    pub fn can_edit(&self) -> bool {
        *self >= MemberRole::Admin
    }

    /// Check if this role can add, remove or re-role members.
    ///
    /// # Returns
    ///
    /// `true` for Admin and Owner roles
    pub fn can_manage_members(&self) -> bool {
        *self >= MemberRole::Admin
    }

    /// Check if this role can create and update todos in a project.
    ///
    /// # Returns
    ///
    /// `true` for Member, Admin and Owner roles
    pub fn can_manage_todos(&self) -> bool {
        *self >= MemberRole::Member
    }

    /// Parse role from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(MemberRole)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use hub_org::MemberRole;
    ///
    /// assert_eq!(MemberRole::parse("ADMIN"), Some(MemberRole::Admin));
    /// assert_eq!(MemberRole::parse("viewer"), Some(MemberRole::Viewer));
    /// assert_eq!(MemberRole::parse("editor"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "viewer" => Some(Self::Viewer),
            "member" => Some(Self::Member),
            "admin" => Some(Self::Admin),
            "owner" => Some(Self::Owner),
            _ => None,
        }
    }

    /// Get the stored string representation of the role.
    ///
    /// # Examples
    ///
    /// ```
    /// use hub_org::MemberRole;
    ///
    /// assert_eq!(MemberRole::Admin.as_str(), "ADMIN");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewer => "VIEWER",
            Self::Member => "MEMBER",
            Self::Admin => "ADMIN",
            Self::Owner => "OWNER",
        }
    }

    /// Get a human-readable display name for the role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Viewer => "Viewer",
            Self::Member => "Member",
            Self::Admin => "Admin",
            Self::Owner => "Owner",
        }
    }
}

impl Default for MemberRole {
    fn default() -> Self {
        Self::Member
    }
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
