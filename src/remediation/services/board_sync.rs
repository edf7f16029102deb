//! Mirroring external issues onto the board as tasks.

use crate::board::{
    domain::{ProjectId, Task, TaskId},
    ports::BoardRepository,
};
use crate::remediation::domain::{
    IssueReport, RemediationError, RemediationResult, classify_issue,
};
use mockable::Clock;
use std::sync::Arc;

/// Issue-to-board synchronisation service.
#[derive(Clone)]
pub struct BoardSyncService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> BoardSyncService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new board synchronisation service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Mirrors one external issue into a board task.
    ///
    /// The task opens in the todo state with the classifier's severity
    /// mapped onto its priority and the effort band onto a fixed hour
    /// estimate; the description cites the originating tracker and issue
    /// number above the raw body.
    ///
    /// # Errors
    ///
    /// Returns [`RemediationError::ProjectNotFound`] when the target project
    /// does not exist, [`RemediationError::Domain`] when the payload fails
    /// task validation (for example, a blank title), and
    /// [`RemediationError::Repository`] when persistence fails, reported
    /// with a caller-safe category while the detail is logged server-side.
    pub async fn ingest_issue(
        &self,
        issue: &IssueReport,
        project_id: ProjectId,
    ) -> RemediationResult<TaskId> {
        self.repository
            .find_project(project_id)
            .await?
            .ok_or(RemediationError::ProjectNotFound(project_id))?;

        let strategy = classify_issue(issue);
        let description = format!(
            "{} #{}\n\n{}",
            issue.source.display_name(),
            issue.number,
            issue.body
        );

        let task = Task::new(project_id, issue.title.clone(), &*self.clock)?
            .with_description(description)
            .with_priority(strategy.severity.to_task_priority())
            .with_estimated_hours(strategy.estimated_effort.hours())?;

        if let Err(err) = self.repository.create_task(&task).await {
            tracing::error!(
                issue_number = issue.number,
                project_id = %project_id,
                error = ?err,
                "issue ingestion failed to persist task",
            );
            return Err(err.into());
        }

        Ok(task.id())
    }
}
