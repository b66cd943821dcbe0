//! Volunteer applications
//!
//! Before project memberships existed, volunteers joined a project by
//! applying. An accepted application still grants todo participation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Review state of an application.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    /// Waiting for review
    Pending,
    /// Volunteer accepted onto the project
    Accepted,
    /// Volunteer turned down
    Rejected,
}

impl ApplicationStatus {
    /// Get the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
        }
    }
}

/// A volunteer's application to a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Application {
    /// Unique identifier
    pub id: Uuid,

    /// Applicant
    pub user_id: Uuid,

    /// Project applied to
    pub project_id: Uuid,

    /// Review state
    pub status: ApplicationStatus,

    /// Applicant's message
    pub message: Option<String>,

    /// When the application was submitted
    pub created_at: DateTime<Utc>,

    /// When the status last changed
    pub updated_at: DateTime<Utc>,
}

impl Application {
    /// Creates a pending application.
    pub fn new(user_id: Uuid, project_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            user_id,
            project_id,
            status: ApplicationStatus::Pending,
            message: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the status.
    pub fn with_status(mut self, status: ApplicationStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether the volunteer was accepted.
    pub fn is_accepted(&self) -> bool {
        self.status == ApplicationStatus::Accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_defaults_to_pending() {
        let app = Application::new(Uuid::now_v7(), Uuid::now_v7());
        assert_eq!(app.status, ApplicationStatus::Pending);
        assert!(!app.is_accepted());
    }

    #[test]
    fn test_accepted_application() {
        let app = Application::new(Uuid::now_v7(), Uuid::now_v7())
            .with_status(ApplicationStatus::Accepted);
        assert!(app.is_accepted());

        let rejected = app.with_status(ApplicationStatus::Rejected);
        assert!(!rejected.is_accepted());
    }
}
