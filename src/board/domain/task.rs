//! Task aggregate root and related lifecycle types.

use super::{
    BoardDomainError, ParseTaskPriorityError, ParseTaskStatusError, ProjectId, TaskId, UserId,
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    Todo,
    /// Task is being worked on.
    InProgress,
    /// Task is awaiting review.
    Review,
    /// Task work has finished.
    Completed,
    /// Task cannot progress until an impediment is resolved.
    Blocked,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Review => "review",
            Self::Completed => "completed",
            Self::Blocked => "blocked",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "completed" => Ok(Self::Completed),
            "blocked" => Ok(Self::Blocked),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Task priority level, ordered from least to most pressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can wait for a quiet moment.
    Low,
    /// Default scheduling weight.
    Medium,
    /// Should be picked up ahead of medium work.
    High,
    /// Needs attention immediately.
    Urgent,
}

impl TaskPriority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

/// Task aggregate root.
///
/// Subtask relationships are id references: a task carries at most one
/// `parent_task_id` and never owns its children. The aggregate maintains two
/// invariants: hour figures are finite and non-negative, and
/// `completed_date` is set exactly when the status is
/// [`TaskStatus::Completed`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    priority: TaskPriority,
    estimated_hours: f64,
    actual_hours: f64,
    due_date: Option<NaiveDate>,
    completed_date: Option<NaiveDate>,
    assigned_to: Option<UserId>,
    parent_task_id: Option<TaskId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning project.
    pub project_id: ProjectId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted estimate in hours.
    pub estimated_hours: f64,
    /// Persisted accumulated hours.
    pub actual_hours: f64,
    /// Persisted due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Persisted completion date, if any.
    pub completed_date: Option<NaiveDate>,
    /// Persisted assignee, if any.
    pub assigned_to: Option<UserId>,
    /// Persisted parent task reference, if any.
    pub parent_task_id: Option<TaskId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in the [`TaskStatus::Todo`] state.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the title is empty
    /// after trimming.
    pub fn new(
        project_id: ProjectId,
        title: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        let raw_title = title.into();
        let normalized_title = raw_title.trim();
        if normalized_title.is_empty() {
            return Err(BoardDomainError::EmptyTaskTitle);
        }

        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            project_id,
            title: normalized_title.to_owned(),
            description: None,
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            estimated_hours: 0.0,
            actual_hours: 0.0,
            due_date: None,
            completed_date: None,
            assigned_to: None,
            parent_task_id: None,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            estimated_hours: data.estimated_hours,
            actual_hours: data.actual_hours,
            due_date: data.due_date,
            completed_date: data.completed_date,
            assigned_to: data.assigned_to,
            parent_task_id: data.parent_task_id,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Sets the task description, dropping blank input.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let value = description.into();
        let normalized = value.trim();
        self.description = (!normalized.is_empty()).then_some(normalized.to_owned());
        self
    }

    /// Sets the task priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the estimated effort in hours.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidHours`] when the value is negative
    /// or not finite.
    pub fn with_estimated_hours(mut self, hours: f64) -> Result<Self, BoardDomainError> {
        self.estimated_hours = validate_hours(hours)?;
        Ok(self)
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the initial assignee.
    #[must_use]
    pub const fn with_assignee(mut self, user_id: UserId) -> Self {
        self.assigned_to = Some(user_id);
        self
    }

    /// Links this task under a parent task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::SelfParent`] when the parent id equals the
    /// task's own id.
    pub fn with_parent(mut self, parent: TaskId) -> Result<Self, BoardDomainError> {
        if parent == self.id {
            return Err(BoardDomainError::SelfParent(self.id));
        }
        self.parent_task_id = Some(parent);
        Ok(self)
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the estimated effort in hours.
    #[must_use]
    pub const fn estimated_hours(&self) -> f64 {
        self.estimated_hours
    }

    /// Returns the accumulated effort in hours.
    #[must_use]
    pub const fn actual_hours(&self) -> f64 {
        self.actual_hours
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the completion date, if any.
    #[must_use]
    pub const fn completed_date(&self) -> Option<NaiveDate> {
        self.completed_date
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<UserId> {
        self.assigned_to
    }

    /// Returns the parent task reference, if any.
    #[must_use]
    pub const fn parent_task_id(&self) -> Option<TaskId> {
        self.parent_task_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Transitions the task to a new status.
    ///
    /// Entering [`TaskStatus::Completed`] stamps `completed_date` with the
    /// clock's current date; leaving it clears the stamp, keeping the
    /// completion-date invariant intact.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.completed_date = match status {
            TaskStatus::Completed => Some(clock.utc().date_naive()),
            _ => None,
        };
        self.touch(clock);
    }

    /// Assigns the task to a user.
    pub fn assign(&mut self, user_id: UserId, clock: &impl Clock) {
        self.assigned_to = Some(user_id);
        self.touch(clock);
    }

    /// Accumulates worked hours onto the task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidHours`] when the value is negative
    /// or not finite.
    pub fn record_hours(&mut self, hours: f64, clock: &impl Clock) -> Result<(), BoardDomainError> {
        self.actual_hours += validate_hours(hours)?;
        self.touch(clock);
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Validates that an hour figure is finite and non-negative.
fn validate_hours(value: f64) -> Result<f64, BoardDomainError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(BoardDomainError::InvalidHours(value))
    }
}
