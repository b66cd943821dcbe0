//! # Actions
//!
//! Operations that can be performed on resources.

use serde::{Deserialize, Serialize};

/// Actions that can be performed on resources.
///
/// - **Read**: View resource data
/// - **List**: Browse multiple resources
/// - **Create**: Create new instances
/// - **Update**: Modify existing data
/// - **Move**: Change a todo's status column or position
/// - **Delete**: Remove instances
/// - **Manage**: Full control, implies every other action
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Read/view resource.
    Read,

    /// List/query resources.
    List,

    /// Create new resource.
    Create,

    /// Update existing resource.
    Update,

    /// Move a resource between columns or positions.
    Move,

    /// Delete resource.
    Delete,

    /// Manage resource.
    ///
    /// Grants every other action.
    Manage,
}

impl Action {
    /// Get the string representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::List => "list",
            Action::Create => "create",
            Action::Update => "update",
            Action::Move => "move",
            Action::Delete => "delete",
            Action::Manage => "manage",
        }
    }

    /// Parse action from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive, supports aliases)
    ///
    /// # Example
    ///
    /// ```
    /// use hub_rbac::actions::Action;
    ///
    /// assert_eq!(Action::parse("read"), Some(Action::Read));
    /// assert_eq!(Action::parse("view"), Some(Action::Read));
    /// assert_eq!(Action::parse("edit"), Some(Action::Update));
    /// assert_eq!(Action::parse("reorder"), Some(Action::Move));
    /// assert_eq!(Action::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "read" | "view" | "get" => Some(Action::Read),
            "list" | "browse" | "search" => Some(Action::List),
            "create" | "add" | "new" => Some(Action::Create),
            "update" | "edit" | "write" | "patch" => Some(Action::Update),
            "move" | "reorder" => Some(Action::Move),
            "delete" | "remove" | "destroy" => Some(Action::Delete),
            "manage" | "admin" => Some(Action::Manage),
            _ => None,
        }
    }

    /// Get all actions.
    pub fn all() -> Vec<Self> {
        vec![
            Action::Read,
            Action::List,
            Action::Create,
            Action::Update,
            Action::Move,
            Action::Delete,
            Action::Manage,
        ]
    }

    /// Check if this action implies another action.
    ///
    /// - `Manage` implies all other actions
    /// - `Update` implies `Move` and `Read`
    /// - `Create` and `Delete` imply `Read`
    /// - `Read` implies `List`
    ///
    /// # Example
    ///
    /// ```
    /// use hub_rbac::actions::Action;
    ///
    /// assert!(Action::Manage.implies(Action::Delete));
    /// assert!(Action::Update.implies(Action::Move));
    /// assert!(!Action::Move.implies(Action::Update));
    /// ```
    pub fn implies(&self, other: Action) -> bool {
        match self {
            Action::Manage => true,
            Action::Update => matches!(other, Action::Move | Action::Read | Action::List),
            Action::Create | Action::Delete | Action::Move => {
                matches!(other, Action::Read | Action::List)
            }
            Action::Read => other == Action::List,
            Action::List => false,
        }
    }

    /// Check if this action modifies data.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Action::Create | Action::Update | Action::Move | Action::Delete | Action::Manage
        )
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
