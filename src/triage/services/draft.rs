//! Drafting structured tasks from free-text descriptions.

use super::{AssigneeSuggestion, AssignmentService, TriageError, TriageResult};
use crate::board::{
    domain::{ProjectId, Task, TaskId, TaskPriority},
    ports::BoardRepository,
};
use crate::triage::domain::{
    ComplexityAssessment, assess_complexity, extract_priority, extract_title,
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Fixed confidence attached to drafted tasks.
const DRAFT_CONFIDENCE: f64 = 0.8;

/// Structured task drafted from a free-text description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftedTask {
    /// Title extracted from the first sentence.
    pub title: String,
    /// The full source description.
    pub description: String,
    /// Target project.
    pub project_id: ProjectId,
    /// Priority extracted from urgency language.
    pub priority: TaskPriority,
    /// Effort estimate taken from the complexity assessment.
    pub estimated_hours: f64,
    /// Best-ranked assignee candidate, when one scores above zero.
    pub suggested_assignee: Option<AssigneeSuggestion>,
    /// The complexity assessment backing the estimate.
    pub assessment: ComplexityAssessment,
    /// Overall confidence in the draft.
    pub confidence: f64,
}

/// Free-text task intake service.
#[derive(Clone)]
pub struct DraftService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    assignment: AssignmentService<R, C>,
}

impl<R, C> DraftService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new draft service.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        let assignment = AssignmentService::new(Arc::clone(&repository), Arc::clone(&clock));
        Self {
            repository,
            clock,
            assignment,
        }
    }

    /// Drafts a structured task from a free-text description.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::ProjectNotFound`] when the target project does
    /// not exist.
    pub async fn draft_task(
        &self,
        description: &str,
        project_id: ProjectId,
    ) -> TriageResult<DraftedTask> {
        self.repository
            .find_project(project_id)
            .await?
            .ok_or(TriageError::ProjectNotFound(project_id))?;

        let title = extract_title(description);
        let priority = extract_priority(description);
        let assessment = assess_complexity(&title, description);
        let ranked = self
            .assignment
            .suggest(&title, description, Some(project_id))
            .await?;

        Ok(DraftedTask {
            title,
            description: description.to_owned(),
            project_id,
            priority,
            estimated_hours: assessment.estimated_hours,
            suggested_assignee: ranked.suggestions.into_iter().next(),
            assessment,
            confidence: DRAFT_CONFIDENCE,
        })
    }

    /// Persists a drafted task, auto-assigning the suggested user if any.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::Domain`] when the draft fails task validation
    /// (for example, an empty extracted title) and a repository error when
    /// persistence fails.
    pub async fn create_from_draft(&self, draft: &DraftedTask) -> TriageResult<TaskId> {
        let mut task = Task::new(draft.project_id, draft.title.clone(), &*self.clock)?
            .with_description(draft.description.clone())
            .with_priority(draft.priority)
            .with_estimated_hours(draft.estimated_hours)?;
        if let Some(assignee) = &draft.suggested_assignee {
            task = task.with_assignee(assignee.user_id);
        }

        self.repository.create_task(&task).await?;
        Ok(task.id())
    }
}
