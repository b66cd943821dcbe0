//! Membership domain models
//!
//! A membership links a user to a project, product or organization with a
//! role. There is at most one membership per (entity, user) pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::roles::MemberRole;

/// Role-bearing join row between a user and an entity.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use hub_org::{Membership, MemberRole};
///
/// let project_id = Uuid::now_v7();
/// let user_id = Uuid::now_v7();
/// let membership = Membership::new(project_id, user_id, MemberRole::Member);
/// assert_eq!(membership.role, MemberRole::Member);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Membership {
    /// Unique membership ID
    pub id: Uuid,

    /// Project, product or organization ID
    pub entity_id: Uuid,

    /// User ID
    pub user_id: Uuid,

    /// Role within the entity
    pub role: MemberRole,

    /// When the user joined
    pub joined_at: DateTime<Utc>,

    /// Who added this user (if applicable)
    pub added_by: Option<Uuid>,
}

impl Membership {
    /// Creates a new membership.
    ///
    /// # Arguments
    ///
    /// * `entity_id` - The project, product or organization ID
    /// * `user_id` - The user ID
    /// * `role` - The user's role on the entity
    pub fn new(entity_id: Uuid, user_id: Uuid, role: MemberRole) -> Self {
        Self {
            id: Uuid::now_v7(),
            entity_id,
            user_id,
            role,
            joined_at: Utc::now(),
            added_by: None,
        }
    }

    /// Set who added this user.
    pub fn with_adder(mut self, adder_id: Uuid) -> Self {
        self.added_by = Some(adder_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_creation() {
        let entity_id = Uuid::now_v7();
        let user_id = Uuid::now_v7();
        let membership = Membership::new(entity_id, user_id, MemberRole::Admin);

        assert_eq!(membership.entity_id, entity_id);
        assert_eq!(membership.user_id, user_id);
        assert_eq!(membership.role, MemberRole::Admin);
        assert!(membership.added_by.is_none());
    }

    #[test]
    fn test_membership_with_adder() {
        let adder_id = Uuid::now_v7();
        let membership =
            Membership::new(Uuid::now_v7(), Uuid::now_v7(), MemberRole::Viewer).with_adder(adder_id);

        assert_eq!(membership.added_by, Some(adder_id));
    }
}
