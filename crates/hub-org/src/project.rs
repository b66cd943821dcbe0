//! Project domain models
//!
//! Projects are where volunteers work. A project may belong to an
//! organization or stand alone under its owner, and it carries the todo
//! board that the todo permission checks guard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::{EntityKind, EntityRecord};
use crate::membership::Membership;
use crate::visibility::Visibility;

/// A volunteer project.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use hub_org::{Project, Visibility};
///
/// let owner_id = Uuid::now_v7();
/// let project = Project::new("Flood Map", "flood-map", owner_id);
/// assert_eq!(project.visibility, Visibility::Public);
/// assert!(project.organization_id.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for the project
    pub id: Uuid,

    /// Organization this project belongs to, if any
    pub organization_id: Option<Uuid>,

    /// Human-readable name
    pub name: String,

    /// URL-friendly slug
    pub slug: String,

    /// Project description
    pub description: Option<String>,

    /// Visibility level determining who can see the project
    pub visibility: Visibility,

    /// Owner of the project
    pub owner_id: Option<Uuid>,

    /// When the project was created
    pub created_at: DateTime<Utc>,

    /// When the project was last updated
    pub updated_at: DateTime<Utc>,

    /// Tags for categorization and filtering
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Project {
    /// Creates a new public, standalone project.
    ///
    /// # Arguments
    ///
    /// * `name` - Project name
    /// * `slug` - URL-friendly slug
    /// * `owner_id` - User who owns the project
    pub fn new(name: impl Into<String>, slug: impl Into<String>, owner_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            organization_id: None,
            name: name.into(),
            slug: slug.into(),
            description: None,
            visibility: Visibility::Public,
            owner_id: Some(owner_id),
            created_at: now,
            updated_at: now,
            tags: Vec::new(),
        }
    }

    /// Attach the project to an organization.
    pub fn in_organization(mut self, organization_id: Uuid) -> Self {
        self.organization_id = Some(organization_id);
        self
    }

    /// Set the visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Build the access view of this project from its member rows.
    pub fn to_record(&self, members: Vec<Membership>) -> EntityRecord {
        EntityRecord {
            id: self.id,
            kind: EntityKind::Project,
            visibility: self.visibility,
            owner_id: self.owner_id,
            organization_id: self.organization_id,
            personal: false,
            members,
        }
    }
}
