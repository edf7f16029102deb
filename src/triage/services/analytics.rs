//! Cross-project board analytics.

use super::{TriageError, TriageResult};
use crate::board::{
    domain::{Project, ProjectId, Task, TaskPriority, TaskStatus},
    ports::BoardRepository,
};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Per-project slice of the board analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Project identifier.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// Number of tasks in the project.
    pub total_tasks: u32,
    /// Number of completed tasks.
    pub completed_tasks: u32,
    /// Completed share of all tasks, rounded to one decimal.
    pub completion_percentage: f64,
    /// Open tasks whose due date has passed.
    pub overdue_tasks: u32,
    /// Open tasks at high or urgent priority.
    pub high_priority_tasks: u32,
}

/// Aggregate figures across all requested projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSummary {
    /// Number of projects summarised.
    pub total_projects: u32,
    /// Tasks across all projects.
    pub total_tasks: u32,
    /// Completed tasks across all projects.
    pub completed_tasks: u32,
    /// Completed share across all projects, rounded to one decimal.
    pub completion_percentage: f64,
    /// Overdue open tasks across all projects.
    pub overdue_tasks: u32,
    /// High or urgent open tasks across all projects.
    pub high_priority_tasks: u32,
}

/// Board-wide analytics payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardAnalytics {
    /// Cross-project totals.
    pub summary: BoardSummary,
    /// Per-project breakdown, in request order.
    pub projects: Vec<ProjectSummary>,
}

/// Cross-project analytics service.
#[derive(Clone)]
pub struct AnalyticsService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> AnalyticsService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new analytics service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Summarises the requested projects and their tasks.
    ///
    /// "Overdue" means due before today and not completed; "high priority"
    /// means an open task at high or urgent priority. Today comes from the
    /// injected clock.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::ProjectNotFound`] for the first requested
    /// project that does not exist.
    pub async fn board_analytics(
        &self,
        project_ids: &[ProjectId],
    ) -> TriageResult<BoardAnalytics> {
        let today = self.clock.utc().date_naive();

        let mut projects = Vec::with_capacity(project_ids.len());
        for &project_id in project_ids {
            let project = self
                .repository
                .find_project(project_id)
                .await?
                .ok_or(TriageError::ProjectNotFound(project_id))?;
            let tasks = self.repository.list_tasks_by_project(project_id).await?;
            projects.push(summarize_project(&project, &tasks, today));
        }

        let summary = summarize_board(&projects);
        Ok(BoardAnalytics { summary, projects })
    }
}

fn summarize_project(project: &Project, tasks: &[Task], today: NaiveDate) -> ProjectSummary {
    let total_tasks = to_u32(tasks.len());
    let completed_tasks = to_u32(
        tasks
            .iter()
            .filter(|task| task.status() == TaskStatus::Completed)
            .count(),
    );
    let overdue_tasks = to_u32(
        tasks
            .iter()
            .filter(|task| {
                task.status() != TaskStatus::Completed
                    && task.due_date().is_some_and(|due| due < today)
            })
            .count(),
    );
    let high_priority_tasks = to_u32(
        tasks
            .iter()
            .filter(|task| {
                task.status() != TaskStatus::Completed && task.priority() >= TaskPriority::High
            })
            .count(),
    );

    ProjectSummary {
        id: project.id,
        name: project.name.clone(),
        total_tasks,
        completed_tasks,
        completion_percentage: percentage(completed_tasks, total_tasks),
        overdue_tasks,
        high_priority_tasks,
    }
}

fn summarize_board(projects: &[ProjectSummary]) -> BoardSummary {
    let total_tasks = projects.iter().map(|p| p.total_tasks).sum();
    let completed_tasks = projects.iter().map(|p| p.completed_tasks).sum();

    BoardSummary {
        total_projects: to_u32(projects.len()),
        total_tasks,
        completed_tasks,
        completion_percentage: percentage(completed_tasks, total_tasks),
        overdue_tasks: projects.iter().map(|p| p.overdue_tasks).sum(),
        high_priority_tasks: projects.iter().map(|p| p.high_priority_tasks).sum(),
    }
}

/// Narrows a count to `u32`, saturating on the (unreachable) overflow.
fn to_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let raw = f64::from(part) / f64::from(whole) * 100.0;
    (raw * 10.0).round() / 10.0
}
