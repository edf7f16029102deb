//! Pull-request strategy planning and merge gating.

use super::error::RemediationResult;
use super::fix::{FixPlan, FixType};
use super::issue::{IssueReport, PullRequestPayload};
use minijinja::{Environment, context};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

/// Branch prefix for automated fixes.
const BRANCH_PREFIX: &str = "auto-fix";

/// Maximum length of the slug segment of a branch name.
const MAX_SLUG_LENGTH: usize = 50;

/// Confidence floor for proposing an unattended merge.
const AUTO_MERGE_CONFIDENCE: f64 = 0.9;

/// Labels that opt a pull request into unattended merging.
const AUTO_MERGE_LABELS: [&str; 2] = ["auto-merge", "safe-to-merge"];

#[expect(
    clippy::expect_used,
    reason = "the slug pattern is a compile-time constant validated by unit tests"
)]
static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-z0-9]+").expect("static slug pattern must compile"));

/// Markdown scaffold for generated pull-request bodies.
const PR_BODY_TEMPLATE: &str = "\
## Automated Fix

**Issue**: #{{ issue_number }}
**Fix Type**: {{ fix_type }}
**Confidence**: {{ confidence_pct }}%

### Changes Applied
{% for change in changes %}- {{ change }}
{% endfor %}
### Explanation
{{ explanation }}

### Testing
- Syntax validation passed
- Linting checks applied
- Manual testing recommended

---
*This PR was automatically generated by the autonomous remediation engine.*
*Review carefully before merging.*
";

#[expect(
    clippy::expect_used,
    reason = "static templates are compile-time constants validated by unit tests"
)]
static TEMPLATES: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    env.add_template("pr_body", PR_BODY_TEMPLATE)
        .expect("static PR body template must parse");
    env
});

/// Minimal issue context needed to plan a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueContext {
    /// Work-item title the branch and PR title derive from.
    pub title: String,
    /// Tracker issue number, when the work item mirrors one.
    pub issue_number: Option<u64>,
}

impl IssueContext {
    /// Builds a context from a raw issue payload.
    #[must_use]
    pub fn from_issue(issue: &IssueReport) -> Self {
        Self {
            title: issue.title.clone(),
            issue_number: Some(issue.number),
        }
    }
}

/// Pull-request intent proposed for a synthesised fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrPlan {
    /// Whether a pull request should be opened at all.
    pub should_create: bool,
    /// Proposed branch name.
    pub branch_name: String,
    /// Proposed PR title.
    pub title: String,
    /// Proposed PR body in Markdown.
    pub body: String,
    /// Whether the PR qualifies for unattended merging.
    pub auto_merge: bool,
}

impl PrPlan {
    /// Plan that opts out of creating a pull request.
    const fn withheld() -> Self {
        Self {
            should_create: false,
            branch_name: String::new(),
            title: String::new(),
            body: String::new(),
            auto_merge: false,
        }
    }
}

/// CI check outcome reported by the tracking gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// All checks passed.
    Success,
    /// At least one check failed.
    Failure,
    /// Checks are still running.
    Pending,
}

impl CheckStatus {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Pending => "pending",
        }
    }
}

/// Error returned while parsing check statuses from the gateway.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown check status: {0}")]
pub struct ParseCheckStatusError(pub String);

impl TryFrom<&str> for CheckStatus {
    type Error = ParseCheckStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "success" => Ok(Self::Success),
            "failure" => Ok(Self::Failure),
            "pending" => Ok(Self::Pending),
            _ => Err(ParseCheckStatusError(value.to_owned())),
        }
    }
}

/// Plans the pull request for a synthesised fix.
///
/// A non-fixable plan yields a withheld `PrPlan` with nothing computed;
/// that is a normal outcome, not an error. Otherwise the branch name is an
/// `auto-fix/` slug of the title, the body is rendered from the Markdown
/// scaffold, and unattended merging is proposed only for high-confidence
/// typo or syntax fixes.
///
/// # Errors
///
/// Returns [`super::RemediationError::Template`] when the body scaffold
/// fails to render.
pub fn plan_pr(context: &IssueContext, fix: &FixPlan) -> RemediationResult<PrPlan> {
    if !fix.fixable {
        return Ok(PrPlan::withheld());
    }

    let branch_name = format!("{BRANCH_PREFIX}/{}", slugify(&context.title));
    let title = format!(
        "Auto-fix: {} - {}",
        fix.fix_type.display_name(),
        context.title
    );
    let body = render_body(context, fix)?;
    let auto_merge = fix.confidence >= AUTO_MERGE_CONFIDENCE
        && matches!(fix.fix_type, FixType::Typo | FixType::Syntax);

    Ok(PrPlan {
        should_create: true,
        branch_name,
        title,
        body,
        auto_merge,
    })
}

/// Decides whether a pull request may merge unattended.
///
/// The PR must carry an opt-in label and the checks must have succeeded.
/// No reviewer-approval count is consulted; that is a deliberate, known gap
/// in the merge gate rather than an oversight.
#[must_use]
pub fn should_auto_merge(pr: &PullRequestPayload, checks_status: CheckStatus) -> bool {
    let labelled = AUTO_MERGE_LABELS.iter().any(|label| pr.has_label(label));
    labelled && checks_status == CheckStatus::Success
}

/// Lower-cases a title and collapses non-alphanumeric runs into dashes,
/// truncated to the slug limit.
fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let collapsed = SLUG_PATTERN.replace_all(&lowered, "-");
    collapsed.chars().take(MAX_SLUG_LENGTH).collect()
}

fn render_body(context: &IssueContext, fix: &FixPlan) -> RemediationResult<String> {
    let issue_number = context
        .issue_number
        .map_or_else(|| "N/A".to_owned(), |number| number.to_string());
    let changes: Vec<&str> = fix
        .changes
        .iter()
        .map(|change| change.description.as_str())
        .collect();

    let template = TEMPLATES.get_template("pr_body")?;
    let body = template.render(context! {
        issue_number => issue_number,
        fix_type => fix.fix_type.as_str(),
        confidence_pct => format!("{:.0}", fix.confidence * 100.0),
        changes => changes,
        explanation => fix.explanation,
    })?;
    Ok(body)
}
