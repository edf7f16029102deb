//! Error types for remediation operations.

use crate::board::domain::{BoardDomainError, ProjectId};
use crate::board::ports::BoardRepositoryError;
use thiserror::Error;

/// Errors returned by remediation functions and services.
///
/// Non-matching classifications, non-fixable issues, and withheld PR plans
/// are ordinary outcomes and never surface here.
#[derive(Debug, Error)]
pub enum RemediationError {
    /// The referenced project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// A static template failed to render.
    #[error("template rendering failed")]
    Template(#[source] Box<minijinja::Error>),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] BoardRepositoryError),
}

impl From<minijinja::Error> for RemediationError {
    fn from(err: minijinja::Error) -> Self {
        Self::Template(Box::new(err))
    }
}

/// Result type for remediation operations.
pub type RemediationResult<T> = Result<T, RemediationError>;
