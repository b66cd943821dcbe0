//! # Volunteer Hub Organization Models
//!
//! Domain models for the entities that access checks reason about.
//!
//! ## Overview
//!
//! The hub-org crate handles:
//! - **Organizations**: Groups that own projects and products
//! - **Projects**: Where volunteers work, with a todo board
//! - **Products**: Organization-owned or personal products
//! - **Memberships**: Role-bearing user/entity join rows
//! - **Todos**: Project or personal work items
//! - **Applications**: Legacy volunteer records
//!
//! ## Architecture
//!
//! ```text
//! User
//!   ├─ Membership ─→ Organization ─┬─ Projects ─→ Todos
//!   │                              └─ Products
//!   ├─ Membership ─→ Project / Product
//!   └─ Application ─→ Project (legacy)
//! ```
//!
//! Access checks consume an [`EntityRecord`]: the visibility, owner,
//! organization and members of a project, product or organization.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hub_org::{MemberRole, Membership, Project, Visibility};
//! use uuid::Uuid;
//!
//! let owner_id = Uuid::now_v7();
//! let project = Project::new("Flood Map", "flood-map", owner_id)
//!     .with_visibility(Visibility::Private);
//!
//! let volunteer = Uuid::now_v7();
//! let membership = Membership::new(project.id, volunteer, MemberRole::Member);
//! let record = project.to_record(vec![membership]);
//! ```

pub mod application;
pub mod entity;
pub mod membership;
pub mod organization;
pub mod product;
pub mod project;
pub mod roles;
pub mod todo;
pub mod visibility;

// Re-export main types for convenience
pub use application::{Application, ApplicationStatus};
pub use entity::{EntityKind, EntityRecord};
pub use membership::Membership;
pub use organization::Organization;
pub use product::Product;
pub use project::Project;
pub use roles::MemberRole;
pub use todo::{Todo, TodoScope, TodoStatus};
pub use visibility::Visibility;
