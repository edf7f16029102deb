//! Service-level errors for triage operations.

use crate::board::domain::{BoardDomainError, ProjectId, TaskId};
use crate::board::ports::BoardRepositoryError;
use thiserror::Error;

/// Errors returned by triage services.
///
/// Absent suggestions (an empty decomposition, an empty candidate list from
/// text that matches no skills) are normal outcomes and never surface here;
/// this type covers missing records, domain validation, and persistence.
#[derive(Debug, Error)]
pub enum TriageError {
    /// The referenced project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Auto-assignment found no candidate with a positive score.
    #[error("no suitable assignee found for task {0}")]
    NoCandidate(TaskId),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] BoardRepositoryError),
}

/// Result type for triage service operations.
pub type TriageResult<T> = Result<T, TriageError>;
