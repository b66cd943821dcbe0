//! Todo domain models
//!
//! Todos live on a project's board, or directly under a user for personal
//! todo lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Workflow status of a todo.
///
/// Older rows use `OPEN` for work that has not started; it deserializes to
/// [`TodoStatus::NotStarted`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoStatus {
    /// Not picked up yet
    #[default]
    #[serde(alias = "OPEN")]
    NotStarted,

    /// Someone is working on it
    InProgress,

    /// Blocked on someone or something else
    WaitingFor,

    /// Done
    Completed,
}

impl TodoStatus {
    /// Get the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "NOT_STARTED",
            Self::InProgress => "IN_PROGRESS",
            Self::WaitingFor => "WAITING_FOR",
            Self::Completed => "COMPLETED",
        }
    }

    /// Parse a status, accepting the legacy `OPEN` value.
    ///
    /// ```
    /// use hub_org::TodoStatus;
    ///
    /// assert_eq!(TodoStatus::parse("IN_PROGRESS"), Some(TodoStatus::InProgress));
    /// assert_eq!(TodoStatus::parse("open"), Some(TodoStatus::NotStarted));
    /// assert_eq!(TodoStatus::parse("blocked"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "NOT_STARTED" | "OPEN" => Some(Self::NotStarted),
            "IN_PROGRESS" => Some(Self::InProgress),
            "WAITING_FOR" => Some(Self::WaitingFor),
            "COMPLETED" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Whether the todo still needs work.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Completed)
    }
}

/// Where a todo lives.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum TodoScope {
    /// On a project board
    Project(Uuid),

    /// On a user's personal list
    Personal(Uuid),
}

/// A todo item.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use hub_org::{Todo, TodoStatus};
///
/// let project_id = Uuid::now_v7();
/// let creator = Uuid::now_v7();
/// let todo = Todo::in_project(project_id, creator, "Write onboarding guide");
/// assert_eq!(todo.project_id(), Some(project_id));
/// assert_eq!(todo.status, TodoStatus::NotStarted);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Todo {
    /// Unique identifier
    pub id: Uuid,

    /// Project board or personal list
    pub scope: TodoScope,

    /// Short title
    pub title: String,

    /// Longer description
    pub description: Option<String>,

    /// User who created the todo
    pub creator_id: Uuid,

    /// User the todo is assigned to
    pub assignee_id: Option<Uuid>,

    /// Workflow status
    pub status: TodoStatus,

    /// Ordering within its status column
    pub position: i32,

    /// Optional due date
    pub due_at: Option<DateTime<Utc>>,

    /// When the todo was created
    pub created_at: DateTime<Utc>,

    /// When the todo was last updated
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a todo on a project board.
    pub fn in_project(project_id: Uuid, creator_id: Uuid, title: impl Into<String>) -> Self {
        Self::new(TodoScope::Project(project_id), creator_id, title)
    }

    /// Creates a todo on a user's personal list.
    pub fn personal(user_id: Uuid, title: impl Into<String>) -> Self {
        Self::new(TodoScope::Personal(user_id), user_id, title)
    }

    fn new(scope: TodoScope, creator_id: Uuid, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            scope,
            title: title.into(),
            description: None,
            creator_id,
            assignee_id: None,
            status: TodoStatus::NotStarted,
            position: 0,
            due_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Assign the todo.
    pub fn assigned_to(mut self, user_id: Uuid) -> Self {
        self.assignee_id = Some(user_id);
        self
    }

    /// The parent project, if the todo is on a project board.
    pub fn project_id(&self) -> Option<Uuid> {
        match self.scope {
            TodoScope::Project(id) => Some(id),
            TodoScope::Personal(_) => None,
        }
    }

    /// The owning user, if the todo is on a personal list.
    pub fn personal_owner(&self) -> Option<Uuid> {
        match self.scope {
            TodoScope::Personal(id) => Some(id),
            TodoScope::Project(_) => None,
        }
    }

    /// Whether `user_id` created the todo.
    pub fn is_creator(&self, user_id: Uuid) -> bool {
        self.creator_id == user_id
    }

    /// Whether the todo is assigned to `user_id`.
    pub fn is_assignee(&self, user_id: Uuid) -> bool {
        self.assignee_id == Some(user_id)
    }
}
