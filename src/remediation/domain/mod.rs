//! Pure decision logic for autonomous remediation.
//!
//! Pattern tables, trigger labels, and templates live here as static data;
//! every function is deterministic in its inputs. "No match" results
//! (`automatable = false`, `fixable = false`, `should_create = false`) are
//! ordinary values, not errors.

pub mod classify;
pub mod docs;
pub mod error;
pub mod fix;
pub mod issue;
pub mod pr;
pub mod workflow;

pub use classify::{
    AutomationStrategy, AutomationTrigger, Effort, FixCategory, Severity, classify_issue,
};
pub use docs::{DocumentKind, render_documentation};
pub use error::{RemediationError, RemediationResult};
pub use fix::{FixPlan, FixType, RemediationStep, synthesize_fix};
pub use issue::{IssueLabel, IssueReport, IssueSource, IssueState, PullRequestPayload};
pub use pr::{CheckStatus, IssueContext, ParseCheckStatusError, PrPlan, plan_pr, should_auto_merge};
pub use workflow::{
    StepData, StepName, StepStatus, WorkflowResult, WorkflowStatus, WorkflowStep, run_workflow,
};
