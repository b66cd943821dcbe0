//! # Volunteer Hub Token Authentication
//!
//! Personal access tokens let tool integrations (such as the MCP server)
//! act for a user without a browser session.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hub_auth::PersonalAccessToken;
//! use hub_rbac::{Action, Permission, ResourceType};
//! use uuid::Uuid;
//!
//! let user_id = Uuid::now_v7();
//! let (token, secret) = PersonalAccessToken::generate(
//!     user_id,
//!     "mcp laptop",
//!     vec!["todo:update".to_string(), "project:read".to_string()],
//!     Some(chrono::Duration::days(90)),
//! );
//!
//! // Store `token`, show `secret` once. Later:
//! token.verify(&secret).unwrap();
//! token.require(&Permission::new(ResourceType::Todo, Action::Move)).unwrap();
//! ```
//!
//! A token's scopes only narrow what it may do. The user's own project
//! permissions are still checked by `hub-access`.

pub mod error;
pub mod token;

// Re-export main types
pub use error::{AuthError, AuthResult};
pub use token::{hash_secret, looks_like_token, PersonalAccessToken, TOKEN_PREFIX};
