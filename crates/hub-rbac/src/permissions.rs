//! # Permissions
//!
//! A permission combines a resource type with an action, optionally scoped
//! to one resource instance.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::actions::Action;
use crate::resources::ResourceType;

/// A permission is a combination of resource type and action.
///
/// Permissions can be:
/// - **Global**: Apply to all instances of a resource type (no resource_id)
/// - **Resource-specific**: Apply only to one instance (with resource_id)
///
/// # Example
///
/// ```
/// use hub_rbac::{Action, Permission, ResourceType};
///
/// let perm = Permission::new(ResourceType::Todo, Action::Update);
/// assert_eq!(perm.to_string(), "todo:update");
///
/// let perm = Permission::for_resource(ResourceType::Project, Action::Read, "p-1");
/// assert_eq!(perm.to_string(), "project:read:p-1");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Permission {
    /// The resource type this permission applies to.
    pub resource: ResourceType,
    /// The action allowed on the resource.
    pub action: Action,
    /// Specific resource ID, or `None` for every resource of this type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

impl Permission {
    /// Create a new global permission.
    pub fn new(resource: ResourceType, action: Action) -> Self {
        Self {
            resource,
            action,
            resource_id: None,
        }
    }

    /// Create a permission for a specific resource instance.
    pub fn for_resource(
        resource: ResourceType,
        action: Action,
        resource_id: impl Into<String>,
    ) -> Self {
        Self {
            resource,
            action,
            resource_id: Some(resource_id.into()),
        }
    }

    /// Parse from string (e.g., "todo:update" or "project:read:uuid").
    ///
    /// Everything after the second colon is the resource ID.
    ///
    /// # Example
    ///
    /// ```
    /// use hub_rbac::{Action, Permission, ResourceType};
    ///
    /// let perm = Permission::parse("todo:move").unwrap();
    /// assert_eq!(perm.resource, ResourceType::Todo);
    /// assert_eq!(perm.action, Action::Move);
    ///
    /// assert!(Permission::parse("todo").is_none());
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.splitn(3, ':');
        let resource = ResourceType::parse(parts.next()?)?;
        let action = Action::parse(parts.next()?)?;

        Some(Self {
            resource,
            action,
            resource_id: parts.next().map(str::to_string),
        })
    }

    /// Whether holding `self` grants `wanted`.
    ///
    /// An unscoped grant covers every instance; a scoped grant covers only
    /// its own instance.
    fn covers(&self, wanted: &Permission) -> bool {
        let scope_ok = match (&self.resource_id, &wanted.resource_id) {
            (None, _) => true,
            (Some(granted), Some(id)) => granted == id,
            (Some(_), None) => false,
        };
        scope_ok
            && self.resource == wanted.resource
            && (self.action == wanted.action || self.action.implies(wanted.action))
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource, self.action)?;
        if let Some(id) = &self.resource_id {
            write!(f, ":{id}")?;
        }
        Ok(())
    }
}

/// The permissions held by a role or a token.
///
/// # Example
///
/// ```
/// use hub_rbac::{Action, Permission, PermissionSet, ResourceType};
///
/// let mut set = PermissionSet::new();
/// set.add(Permission::new(ResourceType::Todo, Action::Update));
///
/// assert!(set.has(&Permission::new(ResourceType::Todo, Action::Move)));
/// assert!(!set.has(&Permission::new(ResourceType::Todo, Action::Delete)));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PermissionSet {
    granted: HashSet<Permission>,
}

impl PermissionSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant a permission.
    pub fn add(&mut self, permission: Permission) {
        self.granted.insert(permission);
    }

    /// Builder form of [`PermissionSet::add`] for unscoped grants.
    pub fn with(mut self, resource: ResourceType, action: Action) -> Self {
        self.add(Permission::new(resource, action));
        self
    }

    /// Whether any grant in the set covers `permission`, directly or
    /// through an implied action.
    pub fn has(&self, permission: &Permission) -> bool {
        self.granted.iter().any(|granted| granted.covers(permission))
    }

    /// Shorthand for checking an unscoped permission.
    pub fn allows(&self, resource: ResourceType, action: Action) -> bool {
        self.has(&Permission::new(resource, action))
    }

    /// Build from permission strings, skipping entries that do not parse.
    ///
    /// # Example
    ///
    /// ```
    /// use hub_rbac::PermissionSet;
    ///
    /// let set = PermissionSet::from_strings(&["todo:read", "project:manage", "bogus"]);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn from_strings<S: AsRef<str>>(perms: &[S]) -> Self {
        perms
            .iter()
            .filter_map(|p| Permission::parse(p.as_ref()))
            .collect()
    }

    /// Number of grants.
    pub fn len(&self) -> usize {
        self.granted.len()
    }

    /// Whether nothing is granted.
    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        Self {
            granted: iter.into_iter().collect(),
        }
    }
}
