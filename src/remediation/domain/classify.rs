//! Regex and label-based classification of external issues.

use super::issue::IssueReport;
use crate::board::domain::TaskPriority;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Severity assigned by the fix-pattern table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Cosmetic or low-impact issue.
    Low,
    /// Standard defect.
    #[default]
    Medium,
    /// Breaks a mainline flow.
    High,
    /// Security-relevant or production-down.
    Critical,
}

impl Severity {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Maps the severity onto a board task priority.
    #[must_use]
    pub const fn to_task_priority(self) -> TaskPriority {
        match self {
            Self::Low => TaskPriority::Low,
            Self::Medium => TaskPriority::Medium,
            Self::High => TaskPriority::High,
            Self::Critical => TaskPriority::Urgent,
        }
    }
}

/// Effort band estimated for an issue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effort {
    /// Small, mechanical change.
    Low,
    /// Typical change.
    #[default]
    Medium,
    /// Architectural or long-bodied change.
    High,
}

impl Effort {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Returns the fixed hour budget used when mirroring an issue into a
    /// task estimate.
    #[must_use]
    pub const fn hours(self) -> f64 {
        match self {
            Self::Low => 4.0,
            Self::Medium => 8.0,
            Self::High => 16.0,
        }
    }
}

/// Defect family recognised by the fix-pattern table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixCategory {
    /// Parser-level source errors.
    SyntaxError,
    /// Missing or broken imports.
    ImportError,
    /// Type and attribute misuse.
    TypeError,
    /// Injection, scripting, and disclosure reports.
    SecurityVulnerability,
    /// Deprecated API usage.
    Deprecation,
}

impl FixCategory {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SyntaxError => "syntax_error",
            Self::ImportError => "import_error",
            Self::TypeError => "type_error",
            Self::SecurityVulnerability => "security_vulnerability",
            Self::Deprecation => "deprecation",
        }
    }
}

/// Labels that force an issue into the automatable pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutomationTrigger {
    /// Fix the issue automatically when possible.
    AutoFix,
    /// Merge the resulting PR once checks pass.
    AutoMerge,
    /// Generate documentation automatically.
    AutoDocument,
    /// Generate test cases automatically.
    AutoTest,
    /// Apply a quick fix and open a PR.
    QuickFix,
    /// Analyse for an implementation approach.
    Enhancement,
}

impl AutomationTrigger {
    /// Returns the tracker label that activates this trigger.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AutoFix => "auto-fix",
            Self::AutoMerge => "auto-merge",
            Self::AutoDocument => "auto-document",
            Self::AutoTest => "auto-test",
            Self::QuickFix => "quick-fix",
            Self::Enhancement => "enhancement",
        }
    }

    /// Returns the human-readable action appended when the trigger fires.
    #[must_use]
    pub const fn action(self) -> &'static str {
        match self {
            Self::AutoFix => "Automatically fix the issue if possible",
            Self::AutoMerge => "Auto-merge PR when checks pass",
            Self::AutoDocument => "Generate documentation automatically",
            Self::AutoTest => "Generate test cases automatically",
            Self::QuickFix => "Apply quick fix and create PR",
            Self::Enhancement => "Auto-analyze for implementation approach",
        }
    }

    /// Resolves a tracker label to a trigger, if recognised.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        [
            Self::AutoFix,
            Self::AutoMerge,
            Self::AutoDocument,
            Self::AutoTest,
            Self::QuickFix,
            Self::Enhancement,
        ]
        .into_iter()
        .find(|trigger| trigger.label() == label)
    }
}

/// One row of the auto-fix detection table.
struct FixPattern {
    category: FixCategory,
    detection: &'static str,
    severity: Severity,
    auto_fixable: bool,
}

/// Detection table checked in order; the first match wins.
static FIX_PATTERN_TABLE: [FixPattern; 5] = [
    FixPattern {
        category: FixCategory::SyntaxError,
        detection: r"SyntaxError|IndentationError|TabError",
        severity: Severity::High,
        auto_fixable: true,
    },
    FixPattern {
        category: FixCategory::ImportError,
        detection: r"ImportError|ModuleNotFoundError",
        severity: Severity::High,
        auto_fixable: true,
    },
    FixPattern {
        category: FixCategory::TypeError,
        detection: r"TypeError|AttributeError",
        severity: Severity::Medium,
        auto_fixable: true,
    },
    FixPattern {
        category: FixCategory::SecurityVulnerability,
        detection: r"SQL injection|XSS|CSRF|CVE-\d+",
        severity: Severity::Critical,
        auto_fixable: true,
    },
    FixPattern {
        category: FixCategory::Deprecation,
        detection: r"DeprecationWarning|deprecated",
        severity: Severity::Low,
        auto_fixable: true,
    },
];

#[expect(
    clippy::expect_used,
    reason = "detection patterns are compile-time constants validated by unit tests"
)]
static DETECTORS: LazyLock<Vec<(Regex, &'static FixPattern)>> = LazyLock::new(|| {
    FIX_PATTERN_TABLE
        .iter()
        .map(|pattern| {
            let regex = Regex::new(&format!("(?i){}", pattern.detection))
                .expect("static detection pattern must compile");
            (regex, pattern)
        })
        .collect()
});

/// Body length above which an issue is considered high effort.
const HIGH_EFFORT_BODY_LENGTH: usize = 500;

/// Body length below which an issue is considered low effort.
const LOW_EFFORT_BODY_LENGTH: usize = 100;

/// Automation strategy derived from one issue payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomationStrategy {
    /// Issue number the strategy refers to.
    pub issue_number: u64,
    /// Issue title echoed for reporting.
    pub title: String,
    /// Whether automation should pick this issue up.
    pub automatable: bool,
    /// Matched defect family, when a detection pattern fired.
    pub fix_category: Option<FixCategory>,
    /// Ordered follow-up actions for the automation pipeline.
    pub suggested_actions: Vec<String>,
    /// Severity doubling as the suggested task priority.
    pub severity: Severity,
    /// Estimated effort band.
    pub estimated_effort: Effort,
}

/// Classifies an issue payload into an automation strategy.
///
/// The detection table is scanned in order over the lower-cased
/// title-plus-body and the first match decides automatability, fix category,
/// and severity. Recognised automation-trigger labels force the issue into
/// the automatable pool regardless of pattern matches. Keyword scans append
/// follow-up actions independently of both. An unmatched, unlabelled issue
/// is a normal non-automatable outcome, not an error.
#[must_use]
pub fn classify_issue(issue: &IssueReport) -> AutomationStrategy {
    let content = format!("{} {}", issue.title, issue.body).to_lowercase();

    let mut strategy = AutomationStrategy {
        issue_number: issue.number,
        title: issue.title.clone(),
        automatable: false,
        fix_category: None,
        suggested_actions: Vec::new(),
        severity: Severity::Medium,
        estimated_effort: Effort::Medium,
    };

    if let Some(pattern) = detect_fix_pattern(&content) {
        strategy.automatable = pattern.auto_fixable;
        strategy.fix_category = Some(pattern.category);
        strategy.severity = pattern.severity;
    }

    for label in issue.label_names() {
        if let Some(trigger) = AutomationTrigger::from_label(label) {
            strategy.automatable = true;
            strategy.suggested_actions.push(trigger.action().to_owned());
        }
    }

    append_content_actions(&content, &mut strategy.suggested_actions);
    strategy.estimated_effort = estimate_effort(&content, issue.body.chars().count());

    strategy
}

/// Returns the first detection-table row matching the content.
fn detect_fix_pattern(content: &str) -> Option<&'static FixPattern> {
    DETECTORS
        .iter()
        .find(|(regex, _)| regex.is_match(content))
        .map(|(_, pattern)| *pattern)
}

/// Appends keyword-driven follow-up actions.
fn append_content_actions(content: &str, actions: &mut Vec<String>) {
    let mentions = |keywords: &[&str]| keywords.iter().any(|kw| content.contains(kw));

    if mentions(&["fix", "bug", "error", "broken", "not working"]) {
        actions.push("Generate fix and create PR".to_owned());
    }
    if mentions(&["feature", "add", "implement", "create"]) {
        actions.push("Generate implementation plan".to_owned());
        actions.push("Create task breakdown".to_owned());
    }
    if mentions(&["document", "docs", "readme", "guide"]) {
        actions.push("Auto-generate documentation".to_owned());
    }
    if mentions(&["test", "testing", "coverage"]) {
        actions.push("Generate test cases".to_owned());
    }
}

/// Estimates the effort band from content markers and body length.
fn estimate_effort(content: &str, body_length: usize) -> Effort {
    if body_length > HIGH_EFFORT_BODY_LENGTH
        || content.contains("complex")
        || content.contains("architecture")
    {
        Effort::High
    } else if body_length < LOW_EFFORT_BODY_LENGTH
        || content.contains("simple")
        || content.contains("typo")
    {
        Effort::Low
    } else {
        Effort::Medium
    }
}
