//! Autonomous workflow state machine: classify, synthesise, plan.

use super::classify::{AutomationStrategy, classify_issue};
use super::error::RemediationResult;
use super::fix::{FixPlan, synthesize_fix};
use super::issue::IssueReport;
use super::pr::{IssueContext, PrPlan, plan_pr};
use serde::{Deserialize, Serialize};
use std::ops::ControlFlow;

/// Workflow step identifiers, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepName {
    /// Issue classification.
    Analyze,
    /// Fix synthesis.
    GenerateFix,
    /// Pull-request planning.
    PrStrategy,
}

impl StepName {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Analyze => "analyze",
            Self::GenerateFix => "generate_fix",
            Self::PrStrategy => "pr_strategy",
        }
    }
}

/// Execution status recorded with each trace entry.
///
/// A step either completes or the workflow halts before recording it, so
/// completion is currently the only status; the enum keeps the trace format
/// explicit for when partial steps are introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// The step ran to completion.
    Complete,
}

/// Payload recorded with each trace entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepData {
    /// Output of the classification step.
    Analysis(AutomationStrategy),
    /// Output of the fix-synthesis step.
    Fix(FixPlan),
    /// Output of the PR-planning step.
    PrStrategy(PrPlan),
}

/// One entry of the auditable workflow trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStep {
    /// Which step produced this entry.
    pub step: StepName,
    /// How the step ended.
    pub status: StepStatus,
    /// The step's full output.
    pub data: StepData,
}

impl WorkflowStep {
    /// Records a completed step.
    #[must_use]
    pub const fn complete(step: StepName, data: StepData) -> Self {
        Self {
            step,
            status: StepStatus::Complete,
            data,
        }
    }
}

/// Terminal and intermediate workflow statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    /// Workflow has not reached a terminal state.
    Pending,
    /// The issue is not automatable; a human has to pick it up.
    ManualInterventionRequired,
    /// Automation engaged but no mechanical fix exists.
    NotFixable,
    /// A pull request has been planned.
    PrCreated,
}

impl WorkflowStatus {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::ManualInterventionRequired => "manual_intervention_required",
            Self::NotFixable => "not_fixable",
            Self::PrCreated => "pr_created",
        }
    }
}

/// Outcome of one workflow run, with the full decision trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowResult {
    /// Issue the workflow ran over.
    pub issue_number: u64,
    /// Ordered trace of every step that ran.
    pub steps: Vec<WorkflowStep>,
    /// Terminal status the run reached.
    pub status: WorkflowStatus,
    /// Planned branch name, present only when a PR was planned.
    pub pr_reference: Option<String>,
}

/// Runs the full autonomous workflow over one issue payload.
///
/// The machine moves from `analyze` through `generate_fix` to
/// `pr_strategy`, appending each step's output to the trace; a
/// non-automatable issue halts at
/// [`WorkflowStatus::ManualInterventionRequired`] after one entry and a
/// non-fixable one at [`WorkflowStatus::NotFixable`] after two. Both are
/// terminal outcomes, not errors. There is no retry inside the workflow;
/// re-submission happens at ingestion if circumstances change.
///
/// # Errors
///
/// Returns [`super::RemediationError::Template`] when PR body rendering
/// fails.
pub fn run_workflow(issue: &IssueReport) -> RemediationResult<WorkflowResult> {
    let mut steps = Vec::new();

    if let ControlFlow::Break(status) = analyze(issue, &mut steps) {
        return Ok(conclude(issue.number, steps, status, None));
    }

    let fix = match synthesize(issue, &mut steps) {
        ControlFlow::Break(status) => return Ok(conclude(issue.number, steps, status, None)),
        ControlFlow::Continue(fix) => fix,
    };

    let plan = plan_pr(&IssueContext::from_issue(issue), &fix)?;
    let branch = plan.branch_name.clone();
    steps.push(WorkflowStep::complete(
        StepName::PrStrategy,
        StepData::PrStrategy(plan),
    ));
    Ok(conclude(
        issue.number,
        steps,
        WorkflowStatus::PrCreated,
        Some(branch),
    ))
}

/// Classification step; breaks when the issue is not automatable.
fn analyze(issue: &IssueReport, steps: &mut Vec<WorkflowStep>) -> ControlFlow<WorkflowStatus> {
    let strategy = classify_issue(issue);
    let automatable = strategy.automatable;
    steps.push(WorkflowStep::complete(
        StepName::Analyze,
        StepData::Analysis(strategy),
    ));

    if automatable {
        ControlFlow::Continue(())
    } else {
        ControlFlow::Break(WorkflowStatus::ManualInterventionRequired)
    }
}

/// Fix-synthesis step; breaks when no mechanical fix exists.
fn synthesize(
    issue: &IssueReport,
    steps: &mut Vec<WorkflowStep>,
) -> ControlFlow<WorkflowStatus, FixPlan> {
    let fix = synthesize_fix(&issue.body, &issue.title);
    steps.push(WorkflowStep::complete(
        StepName::GenerateFix,
        StepData::Fix(fix.clone()),
    ));

    if fix.fixable {
        ControlFlow::Continue(fix)
    } else {
        ControlFlow::Break(WorkflowStatus::NotFixable)
    }
}

const fn conclude(
    issue_number: u64,
    steps: Vec<WorkflowStep>,
    status: WorkflowStatus,
    pr_reference: Option<String>,
) -> WorkflowResult {
    WorkflowResult {
        issue_number,
        steps,
        status,
        pr_reference,
    }
}
