//! Deterministic fix synthesis for classified issues.

use serde::{Deserialize, Serialize};

/// Remediation family a synthesised fix belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixType {
    /// Indentation and syntax corrections.
    Syntax,
    /// Missing import insertion.
    Import,
    /// Security hardening.
    Security,
    /// Deprecated API replacement.
    Deprecation,
    /// Spelling corrections.
    Typo,
    /// No mechanical remediation; a human has to look.
    Manual,
}

impl FixType {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Import => "import",
            Self::Security => "security",
            Self::Deprecation => "deprecation",
            Self::Typo => "typo",
            Self::Manual => "manual",
        }
    }

    /// Returns the capitalised name used in PR titles.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Syntax => "Syntax",
            Self::Import => "Import",
            Self::Security => "Security",
            Self::Deprecation => "Deprecation",
            Self::Typo => "Typo",
            Self::Manual => "Manual",
        }
    }
}

/// One mechanical remediation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemediationStep {
    /// Machine-readable action tag.
    pub action: String,
    /// What the step changes.
    pub description: String,
    /// Tooling hint for the executing actor.
    pub command: String,
}

/// Deterministic remediation recipe with an associated confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixPlan {
    /// Whether a mechanical fix is available.
    pub fixable: bool,
    /// Remediation family.
    pub fix_type: FixType,
    /// Confidence in the recipe, in `[0, 1]`.
    pub confidence: f64,
    /// Ordered steps to apply.
    pub changes: Vec<RemediationStep>,
    /// One-line summary of the recipe.
    pub explanation: String,
}

/// One row of the synthesis rule table.
struct FixRule {
    keywords: &'static [&'static str],
    fix_type: FixType,
    confidence: f64,
    action: &'static str,
    description: &'static str,
    command: &'static str,
    explanation: &'static str,
}

/// Synthesis rules checked in priority order; the first match wins.
static FIX_RULES: [FixRule; 5] = [
    FixRule {
        keywords: &["syntaxerror", "indentation"],
        fix_type: FixType::Syntax,
        confidence: 0.9,
        action: "fix_indentation",
        description: "Fix indentation issues using the formatter",
        command: "Run the auto-formatter in fix mode",
        explanation: "Auto-fix indentation and syntax issues",
    },
    FixRule {
        keywords: &["importerror", "modulenotfound"],
        fix_type: FixType::Import,
        confidence: 0.85,
        action: "add_import",
        description: "Add missing import statement",
        command: "Auto-detect and add import",
        explanation: "Add missing import statements",
    },
    FixRule {
        keywords: &["sql injection", "xss", "csrf", "vulnerability"],
        fix_type: FixType::Security,
        confidence: 0.8,
        action: "apply_security_fix",
        description: "Apply security best practices",
        command: "Apply parameterized queries, escape output",
        explanation: "Apply security fixes and sanitization",
    },
    FixRule {
        keywords: &["deprecat"],
        fix_type: FixType::Deprecation,
        confidence: 0.75,
        action: "update_deprecated",
        description: "Update to current API",
        command: "Replace deprecated calls",
        explanation: "Update deprecated API calls",
    },
    FixRule {
        keywords: &["typo", "spelling"],
        fix_type: FixType::Typo,
        confidence: 0.95,
        action: "fix_typo",
        description: "Correct spelling errors",
        command: "Apply spell checker",
        explanation: "Fix typos and spelling errors",
    },
];

/// Synthesises a remediation recipe from an issue description and optional
/// error context.
///
/// The rule table is scanned in priority order over the lower-cased
/// combined text; the first rule whose keyword list matches produces the
/// plan. Text matching no rule yields a non-fixable manual plan with zero
/// confidence, which is a normal outcome rather than an error.
#[must_use]
pub fn synthesize_fix(description: &str, error_context: &str) -> FixPlan {
    let content = format!("{description} {error_context}").to_lowercase();

    let matched = FIX_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| content.contains(kw)));

    matched.map_or_else(manual_plan, |rule| FixPlan {
        fixable: true,
        fix_type: rule.fix_type,
        confidence: rule.confidence,
        changes: vec![RemediationStep {
            action: rule.action.to_owned(),
            description: rule.description.to_owned(),
            command: rule.command.to_owned(),
        }],
        explanation: rule.explanation.to_owned(),
    })
}

/// Plan returned when no rule matches.
const fn manual_plan() -> FixPlan {
    FixPlan {
        fixable: false,
        fix_type: FixType::Manual,
        confidence: 0.0,
        changes: Vec::new(),
        explanation: String::new(),
    }
}
