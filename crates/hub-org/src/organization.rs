//! Organization domain models
//!
//! Organizations group volunteers and own projects and products. Members of
//! an organization can see the organization's private projects and products.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::{EntityKind, EntityRecord};
use crate::membership::Membership;
use crate::visibility::Visibility;

/// An organization on the platform.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use hub_org::{Organization, Visibility};
///
/// let owner_id = Uuid::now_v7();
/// let org = Organization::new("Open Data Collective", "open-data", owner_id);
/// assert_eq!(org.visibility, Visibility::Public);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// Unique identifier for the organization
    pub id: Uuid,

    /// Human-readable name
    pub name: String,

    /// URL-friendly slug (unique across platform)
    pub slug: String,

    /// Optional description
    pub description: Option<String>,

    /// Primary website URL
    pub website_url: Option<String>,

    /// Owner user ID (the user who created the org)
    pub owner_id: Uuid,

    /// Who can see the organization profile
    pub visibility: Visibility,

    /// When the organization was created
    pub created_at: DateTime<Utc>,

    /// When the organization was last updated
    pub updated_at: DateTime<Utc>,
}

impl Organization {
    /// Creates a new public organization.
    ///
    /// # Arguments
    ///
    /// * `name` - The organization name
    /// * `slug` - URL-friendly slug (must be unique)
    /// * `owner_id` - The user ID who owns this organization
    pub fn new(name: impl Into<String>, slug: impl Into<String>, owner_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            website_url: None,
            owner_id,
            visibility: Visibility::Public,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Build the access view of this organization from its member rows.
    pub fn to_record(&self, members: Vec<Membership>) -> EntityRecord {
        EntityRecord::new(self.id, EntityKind::Organization, self.visibility)
            .with_owner(self.owner_id)
            .with_members(members)
    }
}
