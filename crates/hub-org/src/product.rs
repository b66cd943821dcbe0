//! Product domain models
//!
//! Products are things an organization or an individual ships. A product
//! without an organization is personal: only its owner may change it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::{EntityKind, EntityRecord};
use crate::membership::Membership;
use crate::visibility::Visibility;

/// A product listed on the platform.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use hub_org::{Product, Visibility};
///
/// let owner = Uuid::now_v7();
/// let product = Product::personal("Grant Finder", owner);
/// assert!(product.is_personal());
/// assert_eq!(product.visibility, Visibility::Draft);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for the product
    pub id: Uuid,

    /// Product name
    pub name: String,

    /// Short pitch
    pub tagline: Option<String>,

    /// Owning organization; `None` for personal products
    pub organization_id: Option<Uuid>,

    /// Owner of the product
    pub owner_id: Option<Uuid>,

    /// Visibility level
    pub visibility: Visibility,

    /// When the product was created
    pub created_at: DateTime<Utc>,

    /// When the product was last updated
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a draft product owned by an organization.
    pub fn for_organization(name: impl Into<String>, organization_id: Uuid, owner_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            tagline: None,
            organization_id: Some(organization_id),
            owner_id: Some(owner_id),
            visibility: Visibility::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a draft personal product.
    pub fn personal(name: impl Into<String>, owner_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            tagline: None,
            organization_id: None,
            owner_id: Some(owner_id),
            visibility: Visibility::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Whether this product has no organization.
    pub fn is_personal(&self) -> bool {
        self.organization_id.is_none()
    }

    /// Build the access view of this product from its member rows.
    pub fn to_record(&self, members: Vec<Membership>) -> EntityRecord {
        EntityRecord {
            id: self.id,
            kind: EntityKind::Product,
            visibility: self.visibility,
            owner_id: self.owner_id,
            organization_id: self.organization_id,
            personal: self.is_personal(),
            members,
        }
    }
}
