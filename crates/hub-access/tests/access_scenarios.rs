//! End-to-end access scenarios against the in-memory repository.
//!
//! Scenarios:
//! 1. Visibility of PUBLIC, DRAFT and PRIVATE projects and products
//! 2. A MEMBER on a private project, before and after promotion to ADMIN
//! 3. A todo assigned to an accepted volunteer
//! 4. Creator rights that survive leaving the project
//! 5. Repository failures and configuration switches
//! 6. Personal access token scopes gating a todo action

use async_trait::async_trait;
use hub_access::{
    AccessConfig, AccessControl, AccessError, AccessRepository, MemoryRepository,
    RepositoryResult,
};
use hub_auth::PersonalAccessToken;
use hub_org::{
    Application, ApplicationStatus, EntityKind, EntityRecord, MemberRole, Membership,
    Organization, Product, Project, Todo, TodoScope, Visibility,
};
use hub_rbac::{Action, Permission, ResourceType};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// Test fixture: one organization owning one project, all private.
struct TestFixture {
    repo: Arc<MemoryRepository>,
    access: AccessControl<MemoryRepository>,
    /// Owner of the organization and the project (U1).
    owner: Uuid,
    org_id: Uuid,
    project_id: Uuid,
}

impl TestFixture {
    async fn new() -> Self {
        Self::with_config(AccessConfig::default()).await
    }

    async fn with_config(config: AccessConfig) -> Self {
        let repo = Arc::new(MemoryRepository::new());
        let owner = Uuid::now_v7();

        let org = Organization::new("River Cleanup", "river-cleanup", owner)
            .with_visibility(Visibility::Private);
        let org_id = org.id;
        repo.insert_entity(org.to_record(vec![Membership::new(org_id, owner, MemberRole::Owner)]))
            .await;

        let project = Project::new("Flood Map", "flood-map", owner)
            .in_organization(org_id)
            .with_visibility(Visibility::Private);
        let project_id = project.id;
        repo.insert_entity(project.to_record(vec![])).await;

        Self {
            access: AccessControl::with_config(Arc::clone(&repo), config),
            repo,
            owner,
            org_id,
            project_id,
        }
    }

    async fn add_project_member(&self, role: MemberRole) -> Uuid {
        let user = Uuid::now_v7();
        self.repo
            .upsert_member(EntityKind::Project, self.project_id, user, role)
            .await
            .unwrap();
        user
    }

    async fn add_volunteer(&self, status: ApplicationStatus) -> Uuid {
        let user = Uuid::now_v7();
        self.repo
            .insert_application(Application::new(user, self.project_id).with_status(status))
            .await;
        user
    }

    async fn add_todo(&self, todo: Todo) -> Uuid {
        let id = todo.id;
        self.repo.insert_todo(todo).await;
        id
    }

    async fn entity(&self, kind: EntityKind, visibility: Visibility) -> Uuid {
        let id = Uuid::now_v7();
        self.repo
            .insert_entity(EntityRecord::new(id, kind, visibility).with_owner(self.owner))
            .await;
        id
    }
}

// ============================================================================
// Visibility
// ============================================================================

#[tokio::test]
async fn test_public_entities_visible_to_everyone() {
    let fx = TestFixture::new().await;

    for kind in [EntityKind::Project, EntityKind::Product, EntityKind::Organization] {
        let id = fx.entity(kind, Visibility::Public).await;
        assert!(fx.access.can_view_entity(None, id, kind).await.unwrap());
        assert!(fx
            .access
            .can_view_entity(Some(Uuid::now_v7()), id, kind)
            .await
            .unwrap());
    }
}

#[tokio::test]
async fn test_draft_visible_only_to_owner() {
    let fx = TestFixture::new().await;
    let id = fx.entity(EntityKind::Project, Visibility::Draft).await;
    let admin = Uuid::now_v7();
    fx.repo
        .upsert_member(EntityKind::Project, id, admin, MemberRole::Admin)
        .await
        .unwrap();

    assert!(fx
        .access
        .can_view_entity(Some(fx.owner), id, EntityKind::Project)
        .await
        .unwrap());
    assert!(!fx
        .access
        .can_view_entity(Some(admin), id, EntityKind::Project)
        .await
        .unwrap());
    assert!(!fx
        .access
        .can_view_entity(None, id, EntityKind::Project)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_private_visible_to_owner_members_and_org() {
    let fx = TestFixture::new().await;
    let member = fx.add_project_member(MemberRole::Viewer).await;
    let org_member = Uuid::now_v7();
    fx.repo
        .upsert_member(EntityKind::Organization, fx.org_id, org_member, MemberRole::Member)
        .await
        .unwrap();

    for user in [fx.owner, member, org_member] {
        assert!(fx
            .access
            .can_view_entity(Some(user), fx.project_id, EntityKind::Project)
            .await
            .unwrap());
    }
    assert!(!fx
        .access
        .can_view_entity(Some(Uuid::now_v7()), fx.project_id, EntityKind::Project)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_org_product_draft_visible_to_org_owner() {
    let fx = TestFixture::new().await;
    let co_owner = Uuid::now_v7();
    let admin = Uuid::now_v7();
    fx.repo
        .upsert_member(EntityKind::Organization, fx.org_id, co_owner, MemberRole::Owner)
        .await
        .unwrap();
    fx.repo
        .upsert_member(EntityKind::Organization, fx.org_id, admin, MemberRole::Admin)
        .await
        .unwrap();

    let product = Product::for_organization("Sandbag Tracker", fx.org_id, fx.owner);
    let product_id = product.id;
    fx.repo.insert_entity(product.to_record(vec![])).await;

    assert!(fx
        .access
        .can_view_entity(Some(co_owner), product_id, EntityKind::Product)
        .await
        .unwrap());
    assert!(!fx
        .access
        .can_view_entity(Some(admin), product_id, EntityKind::Product)
        .await
        .unwrap());
}

// ============================================================================
// Role permissions
// ============================================================================

#[tokio::test]
async fn test_member_promoted_to_admin() {
    let fx = TestFixture::new().await;
    let u2 = fx.add_project_member(MemberRole::Member).await;
    let kind = EntityKind::Project;

    assert!(fx.access.can_view_entity(Some(u2), fx.project_id, kind).await.unwrap());
    assert!(!fx.access.can_delete_entity(u2, fx.project_id, kind).await.unwrap());
    assert!(!fx.access.can_edit_entity(u2, fx.project_id, kind).await.unwrap());

    fx.repo
        .upsert_member(kind, fx.project_id, u2, MemberRole::Admin)
        .await
        .unwrap();

    let perms = fx.access.entity_permissions(u2, fx.project_id, kind).await.unwrap();
    assert_eq!(perms.role, Some(MemberRole::Admin));
    assert!(perms.can_edit);
    assert!(perms.can_manage_members);
    assert!(!perms.can_delete);

    let err = fx.access.require_delete(u2, fx.project_id, kind).await.unwrap_err();
    assert_eq!(err.status_code(), 403);
}

#[tokio::test]
async fn test_personal_product_belongs_to_owner() {
    let fx = TestFixture::new().await;
    let maker = Uuid::now_v7();
    let product = Product::personal("Rain Gauge", maker).with_visibility(Visibility::Public);
    let product_id = product.id;
    let helper = Uuid::now_v7();
    fx.repo
        .insert_entity(product.to_record(vec![Membership::new(product_id, helper, MemberRole::Admin)]))
        .await;

    assert!(fx
        .access
        .can_manage_entity_members(maker, product_id, EntityKind::Product)
        .await
        .unwrap());
    assert!(!fx
        .access
        .can_edit_entity(helper, product_id, EntityKind::Product)
        .await
        .unwrap());
}

// ============================================================================
// Todos
// ============================================================================

#[tokio::test]
async fn test_accepted_volunteer_assignee() {
    let fx = TestFixture::new().await;
    let u3 = fx.add_volunteer(ApplicationStatus::Accepted).await;
    let todo_id = fx
        .add_todo(Todo::in_project(fx.project_id, fx.owner, "Survey the levee").assigned_to(u3))
        .await;

    assert!(fx.access.can_update_todo(u3, todo_id).await.unwrap());
    assert!(fx.access.can_move_todo(u3, todo_id).await.unwrap());
    assert!(!fx.access.can_delete_todo(u3, todo_id).await.unwrap());
    assert!(fx
        .access
        .validate_assignee(u3, TodoScope::Project(fx.project_id))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_pending_volunteer_cannot_be_assigned() {
    let fx = TestFixture::new().await;
    let pending = fx.add_volunteer(ApplicationStatus::Pending).await;

    let err = fx
        .access
        .validate_assignee(pending, TodoScope::Project(fx.project_id))
        .await
        .unwrap_err();
    assert!(matches!(err, AccessError::InvalidAssignee(id) if id == pending));
}

#[tokio::test]
async fn test_creator_keeps_rights_after_leaving() {
    let fx = TestFixture::new().await;
    let creator = fx.add_project_member(MemberRole::Member).await;
    let todo_id = fx
        .add_todo(Todo::in_project(fx.project_id, creator, "Print flyers"))
        .await;

    assert!(fx
        .repo
        .remove_member(EntityKind::Project, fx.project_id, creator)
        .await);

    assert!(fx.access.can_delete_todo(creator, todo_id).await.unwrap());
    assert!(fx.access.can_update_todo(creator, todo_id).await.unwrap());
    assert!(!fx.access.can_manage_todos(creator, fx.project_id).await.unwrap());
}

#[tokio::test]
async fn test_stranger_cannot_update() {
    let fx = TestFixture::new().await;
    let todo_id = fx
        .add_todo(Todo::in_project(fx.project_id, fx.owner, "Book the hall"))
        .await;
    let stranger = Uuid::now_v7();

    assert!(!fx.access.can_update_todo(stranger, todo_id).await.unwrap());
    let err = fx.access.require_todo_update(stranger, todo_id).await.unwrap_err();
    assert!(matches!(
        err,
        AccessError::Forbidden {
            resource: ResourceType::Todo,
            action: Action::Update
        }
    ));
}

#[tokio::test]
async fn test_checks_are_idempotent() {
    let fx = TestFixture::new().await;
    let member = fx.add_project_member(MemberRole::Member).await;
    let todo_id = fx
        .add_todo(Todo::in_project(fx.project_id, fx.owner, "Buy gloves"))
        .await;

    let first = (
        fx.access
            .can_view_entity(Some(member), fx.project_id, EntityKind::Project)
            .await
            .unwrap(),
        fx.access.can_update_todo(member, todo_id).await.unwrap(),
        fx.access.can_delete_todo(member, todo_id).await.unwrap(),
    );
    for _ in 0..3 {
        let again = (
            fx.access
                .can_view_entity(Some(member), fx.project_id, EntityKind::Project)
                .await
                .unwrap(),
            fx.access.can_update_todo(member, todo_id).await.unwrap(),
            fx.access.can_delete_todo(member, todo_id).await.unwrap(),
        );
        assert_eq!(first, again);
    }
    assert_eq!(first, (true, true, false));
}

// ============================================================================
// Failures and configuration
// ============================================================================

/// Wraps a repository and counts application lookups.
struct CountingRepository {
    inner: MemoryRepository,
    application_lookups: AtomicUsize,
}

#[async_trait]
impl AccessRepository for CountingRepository {
    async fn find_entity(
        &self,
        kind: EntityKind,
        entity_id: Uuid,
    ) -> RepositoryResult<Option<EntityRecord>> {
        self.inner.find_entity(kind, entity_id).await
    }

    async fn find_membership(
        &self,
        kind: EntityKind,
        entity_id: Uuid,
        user_id: Uuid,
    ) -> RepositoryResult<Option<Membership>> {
        self.inner.find_membership(kind, entity_id, user_id).await
    }

    async fn find_todo(&self, todo_id: Uuid) -> RepositoryResult<Option<Todo>> {
        self.inner.find_todo(todo_id).await
    }

    async fn find_application(
        &self,
        user_id: Uuid,
        project_id: Uuid,
    ) -> RepositoryResult<Option<Application>> {
        self.application_lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_application(user_id, project_id).await
    }
}

#[tokio::test]
async fn test_application_lookup_only_when_needed() {
    let inner = MemoryRepository::new();
    let owner = Uuid::now_v7();
    let member = Uuid::now_v7();
    let project_id = Uuid::now_v7();
    inner
        .insert_entity(
            EntityRecord::new(project_id, EntityKind::Project, Visibility::Private)
                .with_owner(owner)
                .with_members(vec![Membership::new(project_id, member, MemberRole::Member)]),
        )
        .await;

    let repo = Arc::new(CountingRepository {
        inner,
        application_lookups: AtomicUsize::new(0),
    });
    let access = AccessControl::new(Arc::clone(&repo));

    assert!(access.can_manage_todos(owner, project_id).await.unwrap());
    assert!(access.can_manage_todos(member, project_id).await.unwrap());
    assert_eq!(repo.application_lookups.load(Ordering::SeqCst), 0);

    assert!(!access.can_manage_todos(Uuid::now_v7(), project_id).await.unwrap());
    assert_eq!(repo.application_lookups.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_repository_failure_is_not_a_denial() {
    let fx = TestFixture::new().await;
    let todo_id = fx
        .add_todo(Todo::in_project(fx.project_id, fx.owner, "Count sandbags"))
        .await;
    fx.repo.set_unavailable(true);

    let view = fx
        .access
        .can_view_entity(Some(fx.owner), fx.project_id, EntityKind::Project)
        .await;
    assert!(matches!(view, Err(AccessError::Repository(_))));

    let err = fx.access.can_delete_todo(fx.owner, todo_id).await.unwrap_err();
    assert!(err.is_server_error());
    assert_eq!(err.status_code(), 500);
}

#[tokio::test]
async fn test_legacy_volunteers_switched_off() {
    let config = AccessConfig::from_lookup(|key| {
        (key == hub_access::config::ENV_LEGACY_VOLUNTEERS).then(|| "off".to_string())
    })
    .unwrap();
    let fx = TestFixture::with_config(config).await;
    let volunteer = fx.add_volunteer(ApplicationStatus::Accepted).await;
    let todo_id = fx
        .add_todo(Todo::in_project(fx.project_id, fx.owner, "Fill sandbags"))
        .await;

    assert!(!fx.access.can_view_todos(volunteer, fx.project_id).await.unwrap());
    assert!(!fx.access.can_update_todo(volunteer, todo_id).await.unwrap());
}

// ============================================================================
// Personal access tokens
// ============================================================================

#[tokio::test]
async fn test_token_scope_gates_todo_update() {
    let fx = TestFixture::new().await;
    let member = fx.add_project_member(MemberRole::Member).await;
    let todo_id = fx
        .add_todo(Todo::in_project(fx.project_id, fx.owner, "Call volunteers"))
        .await;

    let (read_only, secret) =
        PersonalAccessToken::generate(member, "cli", vec!["todo:read".to_string()], None);
    assert!(read_only.verify(&secret).is_ok());

    let update = Permission::for_resource(ResourceType::Todo, Action::Update, todo_id.to_string());
    let role_allows = fx.access.can_update_todo(member, todo_id).await.unwrap();
    assert!(role_allows);
    assert!(read_only.require(&update).is_err());

    let (writer, _) =
        PersonalAccessToken::generate(member, "bot", vec!["todo:update".to_string()], None);
    assert!(writer.allows(&update));
}
