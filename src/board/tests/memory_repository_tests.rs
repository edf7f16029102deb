//! Repository contract tests for the in-memory adapter.

use std::sync::Arc;

use crate::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::{Project, ProjectId, Task, TaskId, User, UserId, UserRole},
    ports::{BoardRepository, BoardRepositoryError},
};
use crate::test_support::FixedClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> FixedClock {
    FixedClock::at_midnight(2025, 3, 10)
}

#[fixture]
fn repository() -> Arc<InMemoryBoardRepository> {
    Arc::new(InMemoryBoardRepository::new())
}

fn sample_task(project_id: ProjectId, title: &str, clock: &FixedClock) -> Task {
    Task::new(project_id, title, clock).expect("valid task")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_is_retrievable(
    repository: Arc<InMemoryBoardRepository>,
    clock: FixedClock,
) {
    let task = sample_task(ProjectId::new(), "Wire the scheduler", &clock);
    repository.create_task(&task).await.expect("create task");

    let fetched = repository.find_task(task.id()).await.expect("find task");
    assert_eq!(fetched, Some(task));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_create_is_rejected(
    repository: Arc<InMemoryBoardRepository>,
    clock: FixedClock,
) {
    let task = sample_task(ProjectId::new(), "Once only", &clock);
    repository.create_task(&task).await.expect("first create");

    let result = repository.create_task(&task).await;
    assert!(matches!(
        result,
        Err(BoardRepositoryError::DuplicateTask(id)) if id == task.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn batch_create_is_all_or_nothing(
    repository: Arc<InMemoryBoardRepository>,
    clock: FixedClock,
) {
    let project_id = ProjectId::new();
    let existing = sample_task(project_id, "Already stored", &clock);
    repository.create_task(&existing).await.expect("seed task");

    let fresh = sample_task(project_id, "Fresh subtask", &clock);
    let batch = vec![fresh.clone(), existing.clone()];
    let result = repository.create_subtasks(&batch).await;
    assert!(matches!(
        result,
        Err(BoardRepositoryError::DuplicateTask(_))
    ));

    // The fresh task must not have been persisted by the failed batch.
    let fetched = repository.find_task(fresh.id()).await.expect("find task");
    assert!(fetched.is_none());
    let listed = repository
        .list_tasks_by_project(project_id)
        .await
        .expect("list tasks");
    assert_eq!(listed.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_requires_existing_task(
    repository: Arc<InMemoryBoardRepository>,
    clock: FixedClock,
) {
    let task = sample_task(ProjectId::new(), "Never stored", &clock);
    let result = repository.update_task(&task).await;
    assert!(matches!(
        result,
        Err(BoardRepositoryError::TaskNotFound(id)) if id == task.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_tasks_is_scoped_to_the_project(
    repository: Arc<InMemoryBoardRepository>,
    clock: FixedClock,
) {
    let project_a = ProjectId::new();
    let project_b = ProjectId::new();
    for title in ["One", "Two"] {
        repository
            .create_task(&sample_task(project_a, title, &clock))
            .await
            .expect("create task");
    }
    repository
        .create_task(&sample_task(project_b, "Elsewhere", &clock))
        .await
        .expect("create task");

    let listed = repository
        .list_tasks_by_project(project_a)
        .await
        .expect("list tasks");
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|task| task.project_id() == project_a));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_ids_resolve_to_none(repository: Arc<InMemoryBoardRepository>) {
    assert!(
        repository
            .find_task(TaskId::new())
            .await
            .expect("find task")
            .is_none()
    );
    assert!(
        repository
            .find_project(ProjectId::new())
            .await
            .expect("find project")
            .is_none()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn inactive_users_are_filtered_out(repository: Arc<InMemoryBoardRepository>) {
    repository
        .insert_user(User::new("active", "Active Person", UserRole::Employee))
        .expect("seed user");
    repository
        .insert_user(User::new("gone", "Gone Person", UserRole::Employee).deactivated())
        .expect("seed user");

    let users = repository.list_active_users().await.expect("list users");
    assert_eq!(users.len(), 1);
    assert_eq!(users.first().map(|user| user.username.as_str()), Some("active"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeded_project_is_retrievable(repository: Arc<InMemoryBoardRepository>) {
    let project = Project::new("Board revamp", UserId::new()).expect("valid project");
    let project_id = project.id;
    repository.insert_project(project).expect("seed project");

    let fetched = repository
        .find_project(project_id)
        .await
        .expect("find project");
    assert_eq!(fetched.map(|p| p.name), Some("Board revamp".to_owned()));
}
