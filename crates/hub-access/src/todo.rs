//! Todo permission checker
//!
//! Governs who may view, create, update, move and delete todos. This is a
//! state machine over *who may act*, not over a todo's status.
//!
//! On a project board a user's standing comes from three sources:
//! ownership of the project, their membership role, and (legacy) an
//! accepted volunteer application.
//!
//! | Check        | Allowed                                                |
//! |--------------|--------------------------------------------------------|
//! | view todos   | owner, any member, accepted volunteer                  |
//! | manage todos | owner, OWNER/ADMIN/MEMBER, accepted volunteer          |
//! | update, move | creator, assignee, or manage todos                     |
//! | delete       | creator, owner, OWNER/ADMIN                            |
//! | assignee     | owner, any member, accepted volunteer                  |
//!
//! Personal todos belong to one user; only that user and the creator may
//! act on them.

use hub_org::{EntityKind, MemberRole, Todo, TodoScope};
use hub_rbac::{Action, ResourceType};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::control::AccessControl;
use crate::error::{AccessError, AccessResult};
use crate::policy::role_permissions;
use crate::repository::AccessRepository;

/// A user's standing on one project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectStanding {
    /// Recorded owner of the project
    pub is_owner: bool,
    /// Membership role, if any
    pub role: Option<MemberRole>,
    /// Holds an accepted volunteer application
    pub accepted_volunteer: bool,
}

impl ProjectStanding {
    fn role_allows(&self, action: Action) -> bool {
        self.role.is_some_and(|role| {
            role_permissions(role, EntityKind::Project).allows(ResourceType::Todo, action)
        })
    }

    /// May see the project's todos.
    pub fn can_view_todos(&self) -> bool {
        self.is_owner || self.role.is_some() || self.accepted_volunteer
    }

    /// May create and update the project's todos.
    pub fn can_manage_todos(&self) -> bool {
        self.is_owner || self.role_allows(Action::Update) || self.accepted_volunteer
    }

    /// May delete any of the project's todos.
    pub fn can_delete_todos(&self) -> bool {
        self.is_owner || self.role_allows(Action::Delete)
    }

    /// May be assigned the project's todos.
    pub fn is_valid_assignee(&self) -> bool {
        self.can_view_todos()
    }
}

impl<R: AccessRepository + ?Sized> AccessControl<R> {
    /// Work out a user's standing on a project.
    ///
    /// Returns `None` if the project does not exist. The application table
    /// is only consulted when ownership and role leave the answer open.
    pub async fn project_standing(
        &self,
        user_id: Uuid,
        project_id: Uuid,
    ) -> AccessResult<Option<ProjectStanding>> {
        let Some(project) = self.repo.find_entity(EntityKind::Project, project_id).await? else {
            debug!(%project_id, "Project not found");
            return Ok(None);
        };

        let mut standing = ProjectStanding {
            is_owner: project.is_owner(user_id),
            role: project.member_role(user_id),
            accepted_volunteer: false,
        };

        let settled = standing.is_owner || standing.role_allows(Action::Update);
        if self.config.legacy_volunteers && !settled {
            standing.accepted_volunteer = self
                .repo
                .find_application(user_id, project_id)
                .await?
                .is_some_and(|app| app.is_accepted());
        }

        Ok(Some(standing))
    }

    /// May `user_id` see the project's todo board?
    #[instrument(skip(self))]
    pub async fn can_view_todos(&self, user_id: Uuid, project_id: Uuid) -> AccessResult<bool> {
        Ok(self
            .project_standing(user_id, project_id)
            .await?
            .is_some_and(|s| s.can_view_todos()))
    }

    /// May `user_id` create and update todos on the project?
    #[instrument(skip(self))]
    pub async fn can_manage_todos(&self, user_id: Uuid, project_id: Uuid) -> AccessResult<bool> {
        Ok(self
            .project_standing(user_id, project_id)
            .await?
            .is_some_and(|s| s.can_manage_todos()))
    }

    /// May `user_id` create a todo on the project?
    pub async fn can_create_todo(&self, user_id: Uuid, project_id: Uuid) -> AccessResult<bool> {
        self.can_manage_todos(user_id, project_id).await
    }

    /// May `user_id` be assigned todos on the project?
    #[instrument(skip(self))]
    pub async fn is_valid_assignee(&self, user_id: Uuid, project_id: Uuid) -> AccessResult<bool> {
        Ok(self
            .project_standing(user_id, project_id)
            .await?
            .is_some_and(|s| s.is_valid_assignee()))
    }

    /// Reject an assignee who may not hold todos in `scope`.
    ///
    /// # Errors
    ///
    /// `InvalidAssignee` is a validation failure, not a permission failure.
    pub async fn validate_assignee(&self, assignee_id: Uuid, scope: TodoScope) -> AccessResult<()> {
        let valid = match scope {
            TodoScope::Personal(owner) => assignee_id == owner,
            TodoScope::Project(project_id) => {
                self.is_valid_assignee(assignee_id, project_id).await?
            }
        };

        if valid {
            Ok(())
        } else {
            debug!(%assignee_id, ?scope, "Rejected assignee");
            Err(AccessError::InvalidAssignee(assignee_id))
        }
    }

    /// May `user_id` see this todo? `false` if it does not exist.
    #[instrument(skip(self))]
    pub async fn can_view_todo(&self, user_id: Uuid, todo_id: Uuid) -> AccessResult<bool> {
        match self.repo.find_todo(todo_id).await? {
            Some(todo) => self.can_view_loaded_todo(user_id, &todo).await,
            None => Ok(false),
        }
    }

    /// May `user_id` update this todo? `false` if it does not exist.
    #[instrument(skip(self))]
    pub async fn can_update_todo(&self, user_id: Uuid, todo_id: Uuid) -> AccessResult<bool> {
        match self.repo.find_todo(todo_id).await? {
            Some(todo) => self.can_update_loaded_todo(user_id, &todo).await,
            None => Ok(false),
        }
    }

    /// May `user_id` change this todo's status or position?
    pub async fn can_move_todo(&self, user_id: Uuid, todo_id: Uuid) -> AccessResult<bool> {
        self.can_update_todo(user_id, todo_id).await
    }

    /// May `user_id` delete this todo? `false` if it does not exist.
    #[instrument(skip(self))]
    pub async fn can_delete_todo(&self, user_id: Uuid, todo_id: Uuid) -> AccessResult<bool> {
        match self.repo.find_todo(todo_id).await? {
            Some(todo) => self.can_delete_loaded_todo(user_id, &todo).await,
            None => Ok(false),
        }
    }

    /// View check on a todo the caller already loaded.
    pub async fn can_view_loaded_todo(&self, user_id: Uuid, todo: &Todo) -> AccessResult<bool> {
        if todo.is_creator(user_id) || todo.is_assignee(user_id) {
            return Ok(true);
        }
        match todo.scope {
            TodoScope::Personal(owner) => Ok(owner == user_id),
            TodoScope::Project(project_id) => self.can_view_todos(user_id, project_id).await,
        }
    }

    /// Update check on a todo the caller already loaded.
    pub async fn can_update_loaded_todo(&self, user_id: Uuid, todo: &Todo) -> AccessResult<bool> {
        if todo.is_creator(user_id) || todo.is_assignee(user_id) {
            return Ok(true);
        }
        let allowed = match todo.scope {
            TodoScope::Personal(owner) => owner == user_id,
            TodoScope::Project(project_id) => self.can_manage_todos(user_id, project_id).await?,
        };
        if !allowed {
            debug!(todo_id = %todo.id, %user_id, "Todo update denied");
        }
        Ok(allowed)
    }

    /// Delete check on a todo the caller already loaded.
    pub async fn can_delete_loaded_todo(&self, user_id: Uuid, todo: &Todo) -> AccessResult<bool> {
        if todo.is_creator(user_id) {
            return Ok(true);
        }
        let allowed = match todo.scope {
            TodoScope::Personal(owner) => owner == user_id,
            TodoScope::Project(project_id) => self
                .project_standing(user_id, project_id)
                .await?
                .is_some_and(|s| s.can_delete_todos()),
        };
        if !allowed {
            debug!(todo_id = %todo.id, %user_id, "Todo delete denied");
        }
        Ok(allowed)
    }
}
