//! Feature build orchestration: subtask creation and build health.

use super::{TriageError, TriageResult};
use crate::board::{
    domain::{ProjectId, Task, TaskId},
    ports::BoardRepository,
};
use crate::triage::domain::{BuildHealth, ProgressReport, assess_health, compute_progress, decompose};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Combined progress and health view of a project build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildStatus {
    /// Aggregate progress metrics.
    #[serde(flatten)]
    pub progress: ProgressReport,
    /// Health indicators derived from the metrics.
    #[serde(flatten)]
    pub health: BuildHealth,
}

/// Feature build orchestration service.
#[derive(Clone)]
pub struct BuildService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> BuildService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new build service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates the decomposed subtasks for a feature under a project.
    ///
    /// The whole batch commits through one atomic transaction: a failure
    /// part-way through persists nothing. A feature whose name matches no
    /// decomposition pattern creates no tasks and returns an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::ProjectNotFound`] when the project does not
    /// exist, and a repository error when the batch fails to persist.
    pub async fn create_feature_tasks(
        &self,
        project_id: ProjectId,
        feature_name: &str,
        feature_description: &str,
    ) -> TriageResult<Vec<TaskId>> {
        let project = self
            .repository
            .find_project(project_id)
            .await?
            .ok_or(TriageError::ProjectNotFound(project_id))?;

        let templates = decompose(feature_name, feature_description);
        let mut subtasks = Vec::with_capacity(templates.len());
        for template in &templates {
            let task = Task::new(project.id, template.title.clone(), &*self.clock)?
                .with_description(template.description.clone())
                .with_priority(template.priority)
                .with_estimated_hours(template.estimated_hours)?;
            subtasks.push(task);
        }

        if subtasks.is_empty() {
            return Ok(Vec::new());
        }

        if let Err(err) = self.repository.create_subtasks(&subtasks).await {
            tracing::error!(
                project_id = %project_id,
                feature = feature_name,
                error = ?err,
                "feature task batch rolled back",
            );
            return Err(err.into());
        }

        Ok(subtasks.iter().map(Task::id).collect())
    }

    /// Computes the progress report with health indicators layered on top.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::ProjectNotFound`] when the project does not
    /// exist.
    pub async fn build_status(&self, project_id: ProjectId) -> TriageResult<BuildStatus> {
        let project = self
            .repository
            .find_project(project_id)
            .await?
            .ok_or(TriageError::ProjectNotFound(project_id))?;
        let tasks = self.repository.list_tasks_by_project(project_id).await?;

        let progress = compute_progress(&project, &tasks, self.clock.utc());
        let health = assess_health(&progress);
        Ok(BuildStatus { progress, health })
    }
}
