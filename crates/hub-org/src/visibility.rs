//! Visibility levels shared by projects, products and organizations.

use serde::{Deserialize, Serialize};

/// Who can see an entity.
///
/// Visibility only governs read access. Write access is decided by
/// ownership and member roles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    /// Visible to everyone
    Public,

    /// Work in progress, visible only to the owner
    Draft,

    /// Visible to the owner, members, and members of the owning organization
    Private,
}

impl Visibility {
    /// Get the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::Draft => "DRAFT",
            Self::Private => "PRIVATE",
        }
    }

    /// Parse visibility from string (case-insensitive).
    ///
    /// ```
    /// use hub_org::Visibility;
    ///
    /// assert_eq!(Visibility::parse("public"), Some(Visibility::Public));
    /// assert_eq!(Visibility::parse("DRAFT"), Some(Visibility::Draft));
    /// assert_eq!(Visibility::parse("hidden"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "public" => Some(Self::Public),
            "draft" => Some(Self::Draft),
            "private" => Some(Self::Private),
            _ => None,
        }
    }

    /// Whether anyone may see the entity without further checks.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Public
    }
}
