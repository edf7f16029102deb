//! Diesel row models for board persistence.

use super::schema::{projects, tasks, users};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning project identifier.
    pub project_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional long-form description.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: String,
    /// Priority level.
    pub priority: String,
    /// Estimated effort in hours.
    pub estimated_hours: f64,
    /// Accumulated effort in hours.
    pub actual_hours: f64,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Optional completion date.
    pub completed_date: Option<NaiveDate>,
    /// Optional assignee identifier.
    pub assigned_to: Option<uuid::Uuid>,
    /// Optional parent task identifier.
    pub parent_task_id: Option<uuid::Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert and update model for task records.
///
/// `treat_none_as_null` keeps updates faithful to the aggregate: clearing
/// `completed_date` on reopen must write NULL, not skip the column.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning project identifier.
    pub project_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional long-form description.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: String,
    /// Priority level.
    pub priority: String,
    /// Estimated effort in hours.
    pub estimated_hours: f64,
    /// Accumulated effort in hours.
    pub actual_hours: f64,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Optional completion date.
    pub completed_date: Option<NaiveDate>,
    /// Optional assignee identifier.
    pub assigned_to: Option<uuid::Uuid>,
    /// Optional parent task identifier.
    pub parent_task_id: Option<uuid::Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Project identifier.
    pub id: uuid::Uuid,
    /// Project name.
    pub name: String,
    /// Optional owning department label.
    pub department: Option<String>,
    /// Managing user identifier.
    pub manager_id: uuid::Uuid,
    /// Lifecycle status.
    pub status: String,
    /// Optional allocated budget.
    pub budget: Option<f64>,
    /// Optional spend to date.
    pub actual_cost: Option<f64>,
    /// Completion percentage in `[0, 100]`.
    pub completion_percentage: f64,
}

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// User identifier.
    pub id: uuid::Uuid,
    /// Login name.
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// Resolved role.
    pub role: String,
    /// Optional department label.
    pub department: Option<String>,
    /// Whether the user can receive work.
    pub is_active: bool,
}
