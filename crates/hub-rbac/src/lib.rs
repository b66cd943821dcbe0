//! # Volunteer Hub RBAC
//!
//! Resource, action and permission vocabulary shared by the access core and
//! personal access tokens.
//!
//! ## Architecture
//!
//! ```text
//! Permission = Resource + Action [+ Resource ID]
//!
//! Examples:
//!   "todo:update"              - Update any todo
//!   "project:read:<uuid>"      - Read one project
//!   "member:manage"            - Add, remove and re-role members
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hub_rbac::{Action, Permission, PermissionSet, ResourceType};
//!
//! let mut set = PermissionSet::new();
//! set.add(Permission::new(ResourceType::Todo, Action::Update));
//!
//! // Update implies Move and Read
//! assert!(set.allows(ResourceType::Todo, Action::Move));
//!
//! // Global permission matches a specific resource
//! let specific = Permission::for_resource(ResourceType::Todo, Action::Read, "todo-123");
//! assert!(set.has(&specific));
//! ```
//!
//! ## Action Implications
//!
//! - `Manage` implies all actions
//! - `Update` implies `Move`
//! - Every write action implies `Read`, and `Read` implies `List`

pub mod actions;
pub mod permissions;
pub mod resources;

// Re-export main types for convenience
pub use actions::Action;
pub use permissions::{Permission, PermissionSet};
pub use resources::ResourceType;
