//! Repository port for board record persistence and lookup.

use crate::board::domain::{Project, ProjectId, Task, TaskId, User};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board repository operations.
pub type BoardRepositoryResult<T> = Result<T, BoardRepositoryError>;

/// Board persistence contract.
///
/// This is the narrow interface the engine holds onto the project store:
/// task creation and update, plus read access to projects, users, and a
/// project's tasks. Everything else about the store is out of scope.
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn create_task(&self, task: &Task) -> BoardRepositoryResult<()>;

    /// Stores a batch of tasks atomically.
    ///
    /// Either every task in the batch is persisted or none is; a failure
    /// part-way through must leave the store unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::DuplicateTask`] when any task ID in
    /// the batch already exists, without persisting the remainder.
    async fn create_subtasks(&self, tasks: &[Task]) -> BoardRepositoryResult<()>;

    /// Persists changes to an existing task (status, assignee, hours).
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::TaskNotFound`] when the task does not
    /// exist.
    async fn update_task(&self, task: &Task) -> BoardRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_task(&self, id: TaskId) -> BoardRepositoryResult<Option<Task>>;

    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    async fn find_project(&self, id: ProjectId) -> BoardRepositoryResult<Option<Project>>;

    /// Returns all users currently able to receive work.
    async fn list_active_users(&self) -> BoardRepositoryResult<Vec<User>>;

    /// Returns all tasks belonging to the given project.
    async fn list_tasks_by_project(
        &self,
        project_id: ProjectId,
    ) -> BoardRepositoryResult<Vec<Task>>;
}

/// Errors returned by board repository implementations.
///
/// The persistence variant deliberately displays a generic category string;
/// the underlying detail stays on the source chain for server-side logging
/// and never reaches caller-facing messages.
#[derive(Debug, Clone, Error)]
pub enum BoardRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence failure")]
    Persistence(#[source] Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
