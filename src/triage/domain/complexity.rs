//! Complexity scoring and priority suggestion for work items.

use crate::board::domain::TaskPriority;
use serde::{Deserialize, Serialize};

/// Keywords that pull the score up to the high band.
pub const HIGH_COMPLEXITY_KEYWORDS: &[&str] =
    &["architecture", "refactor", "migration", "integration", "critical"];

/// Keywords that anchor the score at the medium band.
pub const MEDIUM_COMPLEXITY_KEYWORDS: &[&str] =
    &["feature", "enhancement", "improvement", "update"];

/// Keywords that pull the score down to the low band.
pub const LOW_COMPLEXITY_KEYWORDS: &[&str] =
    &["fix", "bug", "typo", "documentation", "comment"];

/// Fixed confidence attached to every assessment.
const ASSESSMENT_CONFIDENCE: f64 = 0.75;

/// Complexity assessment for a single work item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityAssessment {
    /// Composite complexity score on a 1-to-10 scale.
    pub complexity_score: u8,
    /// Priority suggested by the score.
    pub suggested_priority: TaskPriority,
    /// Effort estimate derived from the score, in hours.
    pub estimated_hours: f64,
    /// Confidence in the assessment, in `[0, 1]`.
    pub confidence: f64,
    /// Human-readable summary of the inputs considered.
    pub reasoning: String,
}

/// Scores a work item's complexity from its title and description.
///
/// The score starts at 5 (medium), moves to the keyword band of the
/// strongest indicator found in the lower-cased text, and shifts by one for
/// unusually long (>100 words) or short (<20 words) descriptions. The final
/// score maps onto a priority and hour estimate through fixed thresholds.
/// There are no error conditions: empty input scores as medium text that is
/// short.
#[must_use]
pub fn assess_complexity(title: &str, description: &str) -> ComplexityAssessment {
    let content = format!("{title} {description}").to_lowercase();
    let words = content.split_whitespace().count();

    let mut score: u8 = 5;
    if HIGH_COMPLEXITY_KEYWORDS.iter().any(|kw| content.contains(kw)) {
        score = score.max(8);
    }
    if MEDIUM_COMPLEXITY_KEYWORDS.iter().any(|kw| content.contains(kw)) {
        score = score.max(5);
    }
    if LOW_COMPLEXITY_KEYWORDS.iter().any(|kw| content.contains(kw)) {
        score = score.min(3);
    }

    if words > 100 {
        score += 1;
    } else if words < 20 {
        score = score.saturating_sub(1);
    }

    let (suggested_priority, estimated_hours) = priority_for_score(score);

    ComplexityAssessment {
        complexity_score: score,
        suggested_priority,
        estimated_hours,
        confidence: ASSESSMENT_CONFIDENCE,
        reasoning: format!("Analyzed {words} words with complexity indicators"),
    }
}

/// Maps a complexity score onto a priority and hour estimate.
const fn priority_for_score(score: u8) -> (TaskPriority, f64) {
    match score {
        8.. => (TaskPriority::Urgent, 40.0),
        6..=7 => (TaskPriority::High, 20.0),
        4..=5 => (TaskPriority::Medium, 8.0),
        _ => (TaskPriority::Low, 4.0),
    }
}
