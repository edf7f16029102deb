//! Tests for free-text task drafting.

use std::sync::Arc;

use crate::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::{Project, TaskPriority, User, UserId, UserRole},
    ports::BoardRepository,
};
use crate::test_support::FixedClock;
use crate::triage::domain::{extract_priority, extract_title};
use crate::triage::services::DraftService;
use rstest::rstest;

#[rstest]
#[case("This is urgent, production is down", TaskPriority::Urgent)]
#[case("Critical outage in the payment flow", TaskPriority::Urgent)]
#[case("Important cleanup of the build scripts", TaskPriority::High)]
#[case("Minor polish, can happen later", TaskPriority::Low)]
#[case("Rework the navigation copy", TaskPriority::Medium)]
fn urgency_language_maps_to_priorities(
    #[case] description: &str,
    #[case] expected: TaskPriority,
) {
    assert_eq!(extract_priority(description), expected);
}

#[rstest]
fn title_is_the_first_sentence() {
    let title = extract_title("Speed up the export job. It currently takes an hour.");
    assert_eq!(title, "Speed up the export job");
}

#[rstest]
fn long_first_sentences_are_truncated() {
    let description = "x".repeat(300);
    assert_eq!(extract_title(&description).chars().count(), 200);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn drafting_composes_assessment_and_assignee() {
    let repository = Arc::new(InMemoryBoardRepository::new());
    repository
        .insert_user(User::new("root", "Ada Admin", UserRole::Admin))
        .expect("seed user");
    let project = Project::new("Platform", UserId::new()).expect("valid project");
    let project_id = project.id;
    repository.insert_project(project).expect("seed project");

    let service = DraftService::new(
        Arc::clone(&repository),
        Arc::new(FixedClock::at_midnight(2025, 3, 10)),
    );
    let draft = service
        .draft_task(
            "Urgent: fix the backend API timeout. Users see errors on checkout.",
            project_id,
        )
        .await
        .expect("draft");

    assert_eq!(draft.priority, TaskPriority::Urgent);
    assert_eq!(draft.title, "Urgent: fix the backend API timeout");
    assert_eq!(draft.estimated_hours, draft.assessment.estimated_hours);
    assert!(draft.suggested_assignee.is_some());
    assert_eq!(draft.confidence, 0.8);

    let task_id = service.create_from_draft(&draft).await.expect("create");
    let stored = repository
        .find_task(task_id)
        .await
        .expect("find task")
        .expect("task exists");
    assert_eq!(stored.title(), draft.title);
    assert_eq!(
        stored.assigned_to(),
        draft.suggested_assignee.map(|s| s.user_id)
    );
}
