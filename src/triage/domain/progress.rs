//! Progress aggregation, velocity projection, and build health scoring.

use crate::board::domain::{Project, ProjectId, Task, TaskStatus};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Number of tasks treated as one velocity window.
const VELOCITY_WINDOW: u32 = 7;

/// Seconds in one projection week.
const SECONDS_PER_WEEK: f64 = 7.0 * 24.0 * 3600.0;

/// Tolerated actual-over-estimate ratio before a project is off track.
const ON_TRACK_TOLERANCE: f64 = 1.1;

/// Aggregate progress metrics for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Project identifier.
    pub project_id: ProjectId,
    /// Project name.
    pub project_name: String,
    /// Number of tasks in the project.
    pub total_tasks: u32,
    /// Number of completed tasks.
    pub completed_tasks: u32,
    /// Number of tasks currently in progress.
    pub in_progress_tasks: u32,
    /// Number of blocked tasks.
    pub blocked_tasks: u32,
    /// Completed share of all tasks, as a percentage rounded to one decimal.
    pub completion_percentage: f64,
    /// Sum of task estimates in hours, rounded to one decimal.
    pub total_estimated_hours: f64,
    /// Sum of logged hours, rounded to one decimal.
    pub total_actual_hours: f64,
    /// Completed tasks per seven-task window, rounded to two decimals.
    pub velocity: f64,
    /// Projected completion instant, when one can be computed.
    pub predicted_completion: Option<DateTime<Utc>>,
    /// Whether logged hours stay within tolerance of the estimate.
    pub on_track: bool,
}

/// Qualitative label derived from a health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// Health score of 90 or above.
    Excellent,
    /// Health score of 75 or above.
    Good,
    /// Health score of 60 or above.
    Fair,
    /// Health score below 60.
    Poor,
}

impl HealthStatus {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

/// Health indicators layered on top of a progress report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildHealth {
    /// Composite health score clamped into `[0, 100]`.
    pub health_score: f64,
    /// Qualitative label for the score.
    pub health_status: HealthStatus,
}

/// Computes aggregate progress for a project from its loaded tasks.
///
/// Velocity is a coarse completed-per-seven-task-window rate, not a
/// time-series rate. The completion projection is only produced when at
/// least one task has completed and velocity is positive; a project with no
/// tasks reports zero completion without dividing by zero.
#[must_use]
pub fn compute_progress(project: &Project, tasks: &[Task], now: DateTime<Utc>) -> ProgressReport {
    let total_tasks = to_u32(tasks.len());
    let completed_tasks = to_u32(
        tasks
            .iter()
            .filter(|task| task.status() == TaskStatus::Completed)
            .count(),
    );
    let in_progress_tasks = to_u32(
        tasks
            .iter()
            .filter(|task| task.status() == TaskStatus::InProgress)
            .count(),
    );
    let blocked_tasks = to_u32(
        tasks
            .iter()
            .filter(|task| task.status() == TaskStatus::Blocked)
            .count(),
    );

    let total_estimated: f64 = tasks.iter().map(Task::estimated_hours).sum();
    let total_actual: f64 = tasks.iter().map(Task::actual_hours).sum();

    let completed_with_dates = to_u32(
        tasks
            .iter()
            .filter(|task| {
                task.status() == TaskStatus::Completed && task.completed_date().is_some()
            })
            .count(),
    );
    let window_count = (total_tasks / VELOCITY_WINDOW).max(1);
    let velocity = f64::from(completed_with_dates) / f64::from(window_count);

    let completion_percentage = if total_tasks > 0 {
        f64::from(completed_tasks) / f64::from(total_tasks) * 100.0
    } else {
        0.0
    };

    let predicted_completion = if completed_tasks > 0 && velocity > 0.0 {
        let remaining_tasks = total_tasks - completed_tasks;
        let estimated_weeks = f64::from(remaining_tasks) / velocity;
        project_forward(now, estimated_weeks)
    } else {
        None
    };

    let on_track = total_estimated <= 0.0 || total_actual <= total_estimated * ON_TRACK_TOLERANCE;

    ProgressReport {
        project_id: project.id,
        project_name: project.name.clone(),
        total_tasks,
        completed_tasks,
        in_progress_tasks,
        blocked_tasks,
        completion_percentage: round_to(completion_percentage, 10.0),
        total_estimated_hours: round_to(total_estimated, 10.0),
        total_actual_hours: round_to(total_actual, 10.0),
        velocity: round_to(velocity, 100.0),
        predicted_completion,
        on_track,
    }
}

/// Derives health indicators from a progress report.
///
/// The score starts at 100 and loses 10 per blocked task, 20 when the
/// project is off track, and 10 when completion sits below 10%, clamped
/// into `[0, 100]` however many penalties apply.
#[must_use]
pub fn assess_health(report: &ProgressReport) -> BuildHealth {
    let mut health_score = 100.0;

    health_score -= f64::from(report.blocked_tasks) * 10.0;
    if !report.on_track {
        health_score -= 20.0;
    }
    if report.completion_percentage < 10.0 {
        health_score -= 10.0;
    }
    let clamped = health_score.clamp(0.0, 100.0);

    BuildHealth {
        health_score: clamped,
        health_status: status_for_score(clamped),
    }
}

const fn status_for_score(score: f64) -> HealthStatus {
    if score >= 90.0 {
        HealthStatus::Excellent
    } else if score >= 75.0 {
        HealthStatus::Good
    } else if score >= 60.0 {
        HealthStatus::Fair
    } else {
        HealthStatus::Poor
    }
}

/// Narrows a count to `u32`, saturating on the (unreachable) overflow.
fn to_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

fn project_forward(now: DateTime<Utc>, weeks: f64) -> Option<DateTime<Utc>> {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "projection horizons are bounded far below the i64 second range"
    )]
    let seconds = (weeks * SECONDS_PER_WEEK) as i64;
    Duration::try_seconds(seconds).and_then(|span| now.checked_add_signed(span))
}

/// Rounds to a decimal place expressed as a power of ten (10 = one decimal).
fn round_to(value: f64, factor: f64) -> f64 {
    (value * factor).round() / factor
}
