//! # Resource Types
//!
//! Every resource type on the platform that permissions can refer to.

use serde::{Deserialize, Serialize};

/// Resource types that can have permissions assigned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// User profiles.
    User,
    /// Organizations.
    Organization,
    /// Volunteer projects.
    Project,
    /// Products.
    Product,
    /// Membership rows of a project, product or organization.
    Member,
    /// Todo items.
    Todo,
    /// Legacy volunteer applications.
    Application,
    /// Discussion posts.
    Post,
    /// Planned events.
    Event,
    /// Personal access tokens.
    AccessToken,
}

impl ResourceType {
    /// Get the string representation of the resource type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::User => "user",
            ResourceType::Organization => "organization",
            ResourceType::Project => "project",
            ResourceType::Product => "product",
            ResourceType::Member => "member",
            ResourceType::Todo => "todo",
            ResourceType::Application => "application",
            ResourceType::Post => "post",
            ResourceType::Event => "event",
            ResourceType::AccessToken => "access_token",
        }
    }

    /// Parse resource type from string representation.
    ///
    /// # Example
    ///
    /// ```
    /// use hub_rbac::resources::ResourceType;
    ///
    /// assert_eq!(ResourceType::parse("todo"), Some(ResourceType::Todo));
    /// assert_eq!(ResourceType::parse("todos"), Some(ResourceType::Todo));
    /// assert_eq!(ResourceType::parse("org"), Some(ResourceType::Organization));
    /// assert_eq!(ResourceType::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "user" | "users" => Some(ResourceType::User),
            "organization" | "organizations" | "org" | "orgs" => Some(ResourceType::Organization),
            "project" | "projects" => Some(ResourceType::Project),
            "product" | "products" => Some(ResourceType::Product),
            "member" | "members" => Some(ResourceType::Member),
            "todo" | "todos" | "task" | "tasks" => Some(ResourceType::Todo),
            "application" | "applications" => Some(ResourceType::Application),
            "post" | "posts" => Some(ResourceType::Post),
            "event" | "events" => Some(ResourceType::Event),
            "access_token" | "access_tokens" | "token" | "tokens" => {
                Some(ResourceType::AccessToken)
            }
            _ => None,
        }
    }

    /// Get all resource types.
    pub fn all() -> Vec<Self> {
        vec![
            ResourceType::User,
            ResourceType::Organization,
            ResourceType::Project,
            ResourceType::Product,
            ResourceType::Member,
            ResourceType::Todo,
            ResourceType::Application,
            ResourceType::Post,
            ResourceType::Event,
            ResourceType::AccessToken,
        ]
    }

    /// Whether this resource has a visibility level and a member list.
    pub fn is_entity(&self) -> bool {
        matches!(
            self,
            ResourceType::Organization | ResourceType::Project | ResourceType::Product
        )
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
