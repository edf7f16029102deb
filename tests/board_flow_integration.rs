//! Behavioural integration tests for the triage flow over the in-memory
//! board.
//!
//! These tests exercise the services together in realistic board scenarios:
//! seeding users and a project, decomposing a feature into persisted
//! subtasks, and reading progress, health, and analytics back through the
//! same repository.

use std::sync::Arc;

use mockable::DefaultClock;
use taylor::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::{Project, Task, TaskStatus, User, UserRole},
    ports::BoardRepository,
};
use taylor::triage::services::{
    AnalyticsService, AssignmentService, BuildService, ProgressService,
};

fn seeded_board() -> (Arc<InMemoryBoardRepository>, taylor::board::domain::ProjectId) {
    let repository = Arc::new(InMemoryBoardRepository::new());
    repository
        .insert_user(
            User::new("ada", "Ada Admin", UserRole::Admin).with_department("Engineering"),
        )
        .expect("seed admin");
    repository
        .insert_user(
            User::new("eli", "Eli Engineer", UserRole::Employee).with_department("Engineering"),
        )
        .expect("seed engineer");

    let manager = User::new("mia", "Mia Manager", UserRole::DepartmentHead);
    let manager_id = manager.id;
    repository.insert_user(manager).expect("seed manager");

    let project = Project::new("Billing platform", manager_id)
        .expect("valid project")
        .with_department("Engineering");
    let project_id = project.id;
    repository.insert_project(project).expect("seed project");

    (repository, project_id)
}

#[tokio::test(flavor = "multi_thread")]
async fn feature_creation_flows_into_progress_and_health() {
    let (repository, project_id) = seeded_board();
    let clock = Arc::new(DefaultClock);

    let build = BuildService::new(Arc::clone(&repository), Arc::clone(&clock));
    let created = build
        .create_feature_tasks(
            project_id,
            "Implement invoice exports",
            "CSV and PDF exports for the billing screens",
        )
        .await
        .expect("feature creation");
    assert_eq!(created.len(), 4);

    // Complete the design phase and block the documentation phase.
    let stored = repository
        .list_tasks_by_project(project_id)
        .await
        .expect("list tasks");
    let mut design = stored
        .iter()
        .find(|task| task.title().starts_with("Design and plan:"))
        .expect("design subtask")
        .clone();
    design.set_status(TaskStatus::Completed, &*clock);
    repository.update_task(&design).await.expect("update task");

    let mut docs = stored
        .iter()
        .find(|task| task.title().starts_with("Documentation:"))
        .expect("docs subtask")
        .clone();
    docs.set_status(TaskStatus::Blocked, &*clock);
    repository.update_task(&docs).await.expect("update task");

    let progress = ProgressService::new(Arc::clone(&repository), Arc::clone(&clock));
    let report = progress.track(project_id).await.expect("progress report");
    assert_eq!(report.total_tasks, 4);
    assert_eq!(report.completed_tasks, 1);
    assert_eq!(report.blocked_tasks, 1);
    assert_eq!(report.completion_percentage, 25.0);
    assert_eq!(report.total_estimated_hours, 28.0);
    assert!(report.predicted_completion.is_some());

    let status = build.build_status(project_id).await.expect("build status");
    // 100, minus 10 for the blocked task; completion is above 10% and no
    // hours have been logged, so nothing else subtracts.
    assert_eq!(status.health.health_score, 90.0);
    assert_eq!(status.health.health_status.as_str(), "excellent");
}

#[tokio::test(flavor = "multi_thread")]
async fn assignment_prefers_department_matched_skills() {
    let (repository, project_id) = seeded_board();
    let clock = Arc::new(DefaultClock);

    let assignment = AssignmentService::new(Arc::clone(&repository), Arc::clone(&clock));
    let ranked = assignment
        .suggest(
            "Fix the backend API pagination bug",
            "Listing endpoints return duplicate rows",
            Some(project_id),
        )
        .await
        .expect("suggestions");

    assert!(!ranked.suggestions.is_empty());
    assert!(
        ranked
            .suggestions
            .windows(2)
            .all(|pair| pair[0].score >= pair[1].score)
    );
    // The admin with a department outranks everyone else.
    let top = ranked.suggestions.first().expect("top suggestion");
    assert_eq!(top.username, "ada");

    let task = Task::new(project_id, "Fix the backend API pagination bug", &*clock)
        .expect("valid task");
    repository.create_task(&task).await.expect("create task");
    let assigned = assignment
        .auto_assign(task.id())
        .await
        .expect("auto-assign");
    assert_eq!(assigned.assignee.username, "ada");
}

#[tokio::test(flavor = "multi_thread")]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
async fn analytics_aggregate_the_seeded_board() -> eyre::Result<()> {
    let (repository, project_id) = seeded_board();
    let clock = Arc::new(DefaultClock);

    let build = BuildService::new(Arc::clone(&repository), Arc::clone(&clock));
    build
        .create_feature_tasks(project_id, "Implement statement exports", "")
        .await?;

    let analytics = AnalyticsService::new(Arc::clone(&repository), Arc::clone(&clock));
    let board = analytics.board_analytics(&[project_id]).await?;

    assert_eq!(board.summary.total_projects, 1);
    assert_eq!(board.summary.total_tasks, 4);
    assert_eq!(board.summary.completed_tasks, 0);
    // Two of the four decomposed phases are high priority and still open.
    assert_eq!(board.summary.high_priority_tasks, 2);
    Ok(())
}
