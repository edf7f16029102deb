//! Progress tracking over loaded board records.

use super::{TriageError, TriageResult};
use crate::board::{domain::ProjectId, ports::BoardRepository};
use crate::triage::domain::{ProgressReport, compute_progress};
use mockable::Clock;
use std::sync::Arc;

/// Project progress reporting service.
#[derive(Clone)]
pub struct ProgressService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ProgressService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new progress service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Computes the aggregate progress report for a project.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::ProjectNotFound`] when the project does not
    /// exist, rather than defaulting to an empty report.
    pub async fn track(&self, project_id: ProjectId) -> TriageResult<ProgressReport> {
        let project = self
            .repository
            .find_project(project_id)
            .await?
            .ok_or(TriageError::ProjectNotFound(project_id))?;
        let tasks = self.repository.list_tasks_by_project(project_id).await?;
        Ok(compute_progress(&project, &tasks, self.clock.utc()))
    }
}
