//! Service orchestration tests for task creation, lookup, update, and
//! deletion.

use std::sync::Arc;

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, Task, TaskId, TaskPatch, TaskStatus},
    ports::{TaskRepository, TaskRepositoryResult},
    services::{TaskErrorKind, TaskService, TaskServiceError},
};
use async_trait::async_trait;
use rstest::{fixture, rstest};

type TestService = TaskService<InMemoryTaskRepository>;

#[fixture]
fn service() -> TestService {
    TaskService::new(Arc::new(InMemoryTaskRepository::new()))
}

mockall::mock! {
    Repo {}

    #[async_trait]
    impl TaskRepository for Repo {
        async fn create(&self, new_task: NewTask) -> TaskRepositoryResult<Task>;
        async fn get(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;
        async fn list(&self, skip: i64, limit: i64) -> TaskRepositoryResult<Vec<Task>>;
        async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskRepositoryResult<Option<Task>>;
        async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool>;
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_title_is_rejected_before_any_repository_access() {
    // No expectations are set, so any repository call panics the mock.
    let service = TaskService::new(Arc::new(MockRepo::new()));

    let result = service.create_task(NewTask::new("")).await;

    let Err(err) = result else {
        panic!("empty title should be rejected");
    };
    assert_eq!(err.kind(), TaskErrorKind::InvalidInput);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_tasks_are_retrievable_with_identical_fields(service: TestService) {
    let created = service
        .create_task(
            NewTask::new("Test Task")
                .with_description("Test Description")
                .with_status(TaskStatus::Created),
        )
        .await
        .expect("task creation should succeed");

    let fetched = service
        .get_task(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_create_update_delete(service: TestService) {
    let created = service
        .create_task(NewTask::new("Test Task").with_description("Test Description"))
        .await
        .expect("task creation should succeed");
    assert_eq!(created.status(), TaskStatus::Created);

    let updated = service
        .update_task(
            created.id(),
            TaskPatch::new()
                .with_title("Updated Task")
                .with_status(TaskStatus::InProgress),
        )
        .await
        .expect("update should succeed");
    assert_eq!(updated.title(), "Updated Task");
    assert_eq!(updated.status(), TaskStatus::InProgress);
    assert_eq!(updated.description(), Some("Test Description"));

    service
        .delete_task(created.id())
        .await
        .expect("deletion should succeed");

    let result = service.get_task(created.id()).await;
    assert!(matches!(result, Err(TaskServiceError::NotFound(id)) if id == created.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_succeeds_on_an_empty_store(service: TestService) {
    let tasks = service
        .list_tasks(0, 100)
        .await
        .expect("listing should succeed");
    assert!(tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_respects_the_limit(service: TestService) {
    for index in 0..4 {
        service
            .create_task(NewTask::new(format!("Task {index}")))
            .await
            .expect("task creation should succeed");
    }

    let tasks = service
        .list_tasks(1, 2)
        .await
        .expect("listing should succeed");
    assert_eq!(tasks.len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn operations_on_unknown_identifiers_report_not_found(service: TestService) {
    let unknown = TaskId::new();

    let get = service.get_task(unknown).await;
    let update = service
        .update_task(unknown, TaskPatch::new().with_title("No Task"))
        .await;
    let delete = service.delete_task(unknown).await;

    for err in [get.err(), update.err(), delete.err()] {
        let err = err.expect("operation should fail");
        assert_eq!(err.kind(), TaskErrorKind::NotFound);
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn null_status_update_on_unknown_identifier_reports_not_found(service: TestService) {
    let result = service
        .update_task(TaskId::new(), TaskPatch::new().with_null_status())
        .await;
    let err = result.err().expect("update should fail");
    assert_eq!(err.kind(), TaskErrorKind::NotFound);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn null_status_update_surfaces_a_constraint_violation(service: TestService) {
    let created = service
        .create_task(NewTask::new("Test Task").with_status(TaskStatus::InProgress))
        .await
        .expect("task creation should succeed");

    let result = service
        .update_task(created.id(), TaskPatch::new().with_null_status())
        .await;
    let err = result.err().expect("null status should be rejected");
    assert_eq!(err.kind(), TaskErrorKind::ConstraintViolation);

    // Distinct from the not-found kind, and no partial write happened.
    let stored = service
        .get_task(created.id())
        .await
        .expect("task should still exist");
    assert_eq!(stored.status(), TaskStatus::InProgress);
}
