//! Project record and status types.

use super::{BoardDomainError, ParseProjectStatusError, ProjectId, UserId};
use serde::{Deserialize, Serialize};

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Scope is still being defined.
    Planning,
    /// Delivery is underway.
    InProgress,
    /// Work is paused.
    OnHold,
    /// All planned work has shipped.
    Completed,
    /// The project was abandoned.
    Cancelled,
}

impl ProjectStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::InProgress => "in_progress",
            Self::OnHold => "on_hold",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "planning" => Ok(Self::Planning),
            "in_progress" => Ok(Self::InProgress),
            "on_hold" => Ok(Self::OnHold),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseProjectStatusError(value.to_owned())),
        }
    }
}

/// Project record as read from the board store.
///
/// The engine never mutates projects; fields are public in the manner of a
/// read-only snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project identifier.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// Owning department label, if the project belongs to one.
    pub department: Option<String>,
    /// Managing user.
    pub manager_id: UserId,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Allocated budget, if tracked.
    pub budget: Option<f64>,
    /// Spend to date, if tracked.
    pub actual_cost: Option<f64>,
    /// Completion percentage in `[0, 100]`.
    pub completion_percentage: f64,
}

impl Project {
    /// Creates a project in the [`ProjectStatus::Planning`] state.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyProjectName`] when the name is empty
    /// after trimming.
    pub fn new(name: impl Into<String>, manager_id: UserId) -> Result<Self, BoardDomainError> {
        let raw_name = name.into();
        let normalized_name = raw_name.trim();
        if normalized_name.is_empty() {
            return Err(BoardDomainError::EmptyProjectName);
        }

        Ok(Self {
            id: ProjectId::new(),
            name: normalized_name.to_owned(),
            department: None,
            manager_id,
            status: ProjectStatus::Planning,
            budget: None,
            actual_cost: None,
            completion_percentage: 0.0,
        })
    }

    /// Sets the owning department label, dropping blank input.
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        let value = department.into();
        let normalized = value.trim();
        self.department = (!normalized.is_empty()).then_some(normalized.to_owned());
        self
    }

    /// Sets the lifecycle status.
    #[must_use]
    pub const fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the completion percentage.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidCompletionPercentage`] when the
    /// value lies outside `[0, 100]` or is not finite.
    pub fn with_completion_percentage(mut self, value: f64) -> Result<Self, BoardDomainError> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(BoardDomainError::InvalidCompletionPercentage(value));
        }
        self.completion_percentage = value;
        Ok(self)
    }
}
