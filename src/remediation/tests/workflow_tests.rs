//! Tests for the autonomous workflow state machine.

use crate::remediation::domain::{
    IssueLabel, IssueReport, StepData, StepName, WorkflowStatus, run_workflow,
};
use rstest::rstest;

#[rstest]
fn unmatched_issues_halt_for_manual_intervention() {
    let issue = IssueReport::new(21, "The roadmap page looks odd on tablets");
    let result = run_workflow(&issue).expect("workflow run");

    assert_eq!(result.status, WorkflowStatus::ManualInterventionRequired);
    assert_eq!(result.steps.len(), 1);
    let step = result.steps.first().expect("one step");
    assert_eq!(step.step, StepName::Analyze);
    assert!(matches!(&step.data, StepData::Analysis(s) if !s.automatable));
    assert!(result.pr_reference.is_none());
}

#[rstest]
fn automatable_but_unfixable_issues_halt_after_synthesis() {
    // The trigger label engages automation, but the body matches no fix
    // rule, so the run ends at the synthesis step.
    let issue = IssueReport::new(22, "Dashboard is noticeably slower this week")
        .with_labels([IssueLabel::new("auto-fix")]);
    let result = run_workflow(&issue).expect("workflow run");

    assert_eq!(result.status, WorkflowStatus::NotFixable);
    assert_eq!(result.steps.len(), 2);
    assert_eq!(
        result.steps.iter().map(|s| s.step).collect::<Vec<_>>(),
        vec![StepName::Analyze, StepName::GenerateFix]
    );
    assert!(result.pr_reference.is_none());
}

#[rstest]
fn fixable_issues_run_to_a_planned_pr() {
    let issue = IssueReport::new(23, "SyntaxError in settings module")
        .with_body("SyntaxError: invalid syntax at settings.py line 3");
    let result = run_workflow(&issue).expect("workflow run");

    assert_eq!(result.status, WorkflowStatus::PrCreated);
    assert_eq!(
        result.steps.iter().map(|s| s.step).collect::<Vec<_>>(),
        vec![StepName::Analyze, StepName::GenerateFix, StepName::PrStrategy]
    );

    let branch = result.pr_reference.as_deref().expect("planned branch");
    assert!(branch.starts_with("auto-fix/"));

    // The trace carries the full PR plan for auditing.
    let last = result.steps.last().expect("three steps");
    assert!(matches!(&last.data, StepData::PrStrategy(plan) if plan.should_create));
}

#[rstest]
fn the_trace_records_every_decision_in_order() {
    let issue = IssueReport::new(24, "Typo in the welcome email");
    let result = run_workflow(&issue).expect("workflow run");

    // "Typo" matches no detection regex and no trigger label is present, so
    // classification alone decides; the low-keyword language never reaches
    // the synthesis rule that would have scored 0.95.
    assert_eq!(result.status, WorkflowStatus::ManualInterventionRequired);
    assert_eq!(result.steps.len(), 1);
}

#[rstest]
fn workflow_results_serialize_for_the_reporting_layer() {
    let issue = IssueReport::new(25, "SyntaxError in exporter");
    let result = run_workflow(&issue).expect("workflow run");

    let json = serde_json::to_value(&result).expect("serializable result");
    assert_eq!(json["status"], "pr_created");
    assert_eq!(json["steps"][0]["step"], "analyze");
    assert_eq!(json["steps"][0]["status"], "complete");
}
