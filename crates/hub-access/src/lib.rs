//! # Volunteer Hub Access
//!
//! Authorization core for Volunteer Hub: who may see and act on projects,
//! products, organizations and todos.
//!
//! ## Overview
//!
//! The hub-access crate handles:
//! - **Visibility**: PUBLIC / DRAFT / PRIVATE view rules
//! - **Role permissions**: edit, delete and member management by role
//! - **Todo permissions**: view, create, update, move, delete and assignment
//! - **Guards**: `require_*` helpers that map denials to 404 / 403
//!
//! ## Architecture
//!
//! ```text
//! AccessControl<R: AccessRepository>
//!   ├─ visibility   can_view_entity
//!   ├─ permissions  entity_permissions, can_edit_entity, ...
//!   ├─ todo         can_update_todo, can_delete_todo, ...
//!   └─ guard        require_view, require_edit, ...
//!         │
//!         └─ AccessRepository (injected; MemoryRepository for tests)
//! ```
//!
//! Checks return `Ok(false)` for a denial, including when the thing asked
//! about does not exist. `Err` is reserved for repository failures and for
//! the guard helpers.
//!
//! ## Configuration
//!
//! | Variable                                   | Default |
//! |--------------------------------------------|---------|
//! | `HUB_ACCESS_LEGACY_VOLUNTEERS`             | `true`  |
//! | `HUB_ACCESS_ORG_OWNER_SEES_PRODUCT_DRAFTS` | `true`  |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use hub_access::{AccessConfig, AccessControl, MemoryRepository};
//! use hub_org::EntityKind;
//! use uuid::Uuid;
//!
//! async fn example(project_id: Uuid, user_id: Uuid) -> hub_access::AccessResult<()> {
//!     let repo = Arc::new(MemoryRepository::new());
//!     let access = AccessControl::with_config(repo, AccessConfig::from_env()?);
//!
//!     if access.can_view_entity(Some(user_id), project_id, EntityKind::Project).await? {
//!         let perms = access.entity_permissions(user_id, project_id, EntityKind::Project).await?;
//!         println!("can edit: {}", perms.can_edit);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod control;
pub mod error;
pub mod guard;
pub mod memory;
pub mod permissions;
pub mod policy;
pub mod repository;
pub mod todo;
pub mod visibility;

// Re-export main types for convenience
pub use config::{AccessConfig, ConfigError};
pub use control::AccessControl;
pub use error::{AccessError, AccessResult};
pub use memory::MemoryRepository;
pub use permissions::{can_delete, can_edit, can_manage_members, user_role, EntityPermissions};
pub use repository::{AccessRepository, RepositoryError, RepositoryResult};
pub use todo::ProjectStanding;
pub use visibility::visible_to;
