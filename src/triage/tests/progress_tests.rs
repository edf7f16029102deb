//! Tests for progress aggregation, velocity projection, and health scoring.

use std::sync::Arc;

use crate::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::{
        PersistedTaskData, Project, ProjectId, Task, TaskId, TaskPriority, TaskStatus, UserId,
    },
    ports::BoardRepository,
};
use crate::test_support::FixedClock;
use crate::triage::domain::{HealthStatus, assess_health, compute_progress};
use crate::triage::services::{ProgressService, TriageError};
use chrono::Duration;
use mockable::Clock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> FixedClock {
    FixedClock::at_midnight(2025, 3, 10)
}

fn sample_project() -> Project {
    Project::new("Data platform", UserId::new()).expect("valid project")
}

fn open_task(project_id: ProjectId, clock: &FixedClock) -> Task {
    Task::new(project_id, "Open item", clock).expect("valid task")
}

fn completed_task(project_id: ProjectId, clock: &FixedClock) -> Task {
    let mut task = Task::new(project_id, "Done item", clock).expect("valid task");
    task.set_status(TaskStatus::Completed, clock);
    task
}

#[rstest]
fn empty_projects_report_zero_without_dividing(clock: FixedClock) {
    let project = sample_project();
    let report = compute_progress(&project, &[], clock.utc());

    assert_eq!(report.total_tasks, 0);
    assert_eq!(report.completion_percentage, 0.0);
    assert_eq!(report.velocity, 0.0);
    assert!(report.predicted_completion.is_none());
    assert!(report.on_track);
}

#[rstest]
fn no_completions_means_no_prediction(clock: FixedClock) {
    let project = sample_project();
    let tasks = vec![open_task(project.id, &clock), open_task(project.id, &clock)];
    let report = compute_progress(&project, &tasks, clock.utc());

    assert_eq!(report.completed_tasks, 0);
    assert!(report.predicted_completion.is_none());
}

#[rstest]
fn velocity_counts_only_dated_completions(clock: FixedClock) {
    let project = sample_project();
    let mut tasks = vec![completed_task(project.id, &clock)];
    // A legacy row can carry a completed status without a date; it counts
    // toward completion but not toward velocity.
    let legacy = Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        project_id: project.id,
        title: "Legacy completion".to_owned(),
        description: None,
        status: TaskStatus::Completed,
        priority: TaskPriority::Medium,
        estimated_hours: 0.0,
        actual_hours: 0.0,
        due_date: None,
        completed_date: None,
        assigned_to: None,
        parent_task_id: None,
        created_at: clock.utc(),
        updated_at: clock.utc(),
    });
    tasks.push(legacy);

    let report = compute_progress(&project, &tasks, clock.utc());
    assert_eq!(report.completed_tasks, 2);
    assert_eq!(report.velocity, 1.0);
}

#[rstest]
fn prediction_extends_from_now_by_remaining_over_velocity(clock: FixedClock) {
    let project = sample_project();
    let mut tasks: Vec<Task> = (0..3).map(|_| completed_task(project.id, &clock)).collect();
    tasks.extend((0..7).map(|_| open_task(project.id, &clock)));

    let report = compute_progress(&project, &tasks, clock.utc());
    // Ten tasks form one window, so velocity is 3 completions per window and
    // seven remaining tasks project to 7/3 weeks out.
    assert_eq!(report.velocity, 3.0);
    let predicted = report.predicted_completion.expect("prediction available");
    assert!(predicted > clock.utc() + Duration::weeks(2));
    assert!(predicted < clock.utc() + Duration::weeks(3));
}

#[rstest]
fn on_track_tolerates_ten_percent_overrun(clock: FixedClock) {
    let project = sample_project();
    let mut task = Task::new(project.id, "Budgeted", &clock)
        .expect("valid task")
        .with_estimated_hours(10.0)
        .expect("valid hours");
    task.record_hours(11.0, &clock).expect("valid hours");

    let report = compute_progress(&project, &[task.clone()], clock.utc());
    assert!(report.on_track);

    task.record_hours(0.5, &clock).expect("valid hours");
    let overrun = compute_progress(&project, &[task], clock.utc());
    assert!(!overrun.on_track);
}

#[rstest]
fn health_score_is_clamped_even_under_many_blocked_tasks(clock: FixedClock) {
    let project = sample_project();
    let tasks: Vec<Task> = (0..15)
        .map(|_| {
            let mut task = open_task(project.id, &clock);
            task.set_status(TaskStatus::Blocked, &clock);
            task
        })
        .collect();

    let report = compute_progress(&project, &tasks, clock.utc());
    let health = assess_health(&report);

    assert_eq!(health.health_score, 0.0);
    assert_eq!(health.health_status, HealthStatus::Poor);
}

#[rstest]
fn healthy_projects_score_excellent(clock: FixedClock) {
    let project = sample_project();
    let tasks = vec![completed_task(project.id, &clock)];
    let report = compute_progress(&project, &tasks, clock.utc());
    let health = assess_health(&report);

    assert_eq!(health.health_score, 100.0);
    assert_eq!(health.health_status, HealthStatus::Excellent);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tracking_an_unknown_project_is_an_explicit_error(clock: FixedClock) {
    let repository = Arc::new(InMemoryBoardRepository::new());
    let service = ProgressService::new(Arc::clone(&repository), Arc::new(clock));

    let missing = ProjectId::new();
    let result = service.track(missing).await;
    assert!(matches!(result, Err(TriageError::ProjectNotFound(id)) if id == missing));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tracking_reads_tasks_through_the_repository(clock: FixedClock) {
    let repository = Arc::new(InMemoryBoardRepository::new());
    let project = sample_project();
    let project_id = project.id;
    repository.insert_project(project).expect("seed project");
    repository
        .create_task(&completed_task(project_id, &clock))
        .await
        .expect("create task");
    repository
        .create_task(&open_task(project_id, &clock))
        .await
        .expect("create task");

    let service = ProgressService::new(Arc::clone(&repository), Arc::new(clock));
    let report = service.track(project_id).await.expect("progress report");

    assert_eq!(report.total_tasks, 2);
    assert_eq!(report.completed_tasks, 1);
    assert_eq!(report.completion_percentage, 50.0);
}
