//! Keyword extraction for drafting tasks from free-text descriptions.

use crate::board::domain::TaskPriority;

/// Maximum length of a title extracted from free text.
const MAX_TITLE_LENGTH: usize = 200;

/// Keywords that escalate a drafted task to urgent priority.
const URGENT_KEYWORDS: &[&str] = &["urgent", "asap", "critical"];

/// Keywords that escalate a drafted task to high priority.
const HIGH_KEYWORDS: &[&str] = &["important", "high"];

/// Keywords that relax a drafted task to low priority.
const LOW_KEYWORDS: &[&str] = &["minor", "low", "later"];

/// Extracts a priority from urgency language in a description.
///
/// Urgent keywords win over high keywords, which win over low keywords;
/// text without urgency language drafts at medium priority.
#[must_use]
pub fn extract_priority(description: &str) -> TaskPriority {
    let content = description.to_lowercase();
    if URGENT_KEYWORDS.iter().any(|kw| content.contains(kw)) {
        TaskPriority::Urgent
    } else if HIGH_KEYWORDS.iter().any(|kw| content.contains(kw)) {
        TaskPriority::High
    } else if LOW_KEYWORDS.iter().any(|kw| content.contains(kw)) {
        TaskPriority::Low
    } else {
        TaskPriority::Medium
    }
}

/// Extracts a title from the first sentence of a description.
///
/// The sentence is trimmed and truncated to 200 characters; descriptions
/// without a full stop yield their leading text unchanged.
#[must_use]
pub fn extract_title(description: &str) -> String {
    let first_sentence = description.split('.').next().unwrap_or(description);
    first_sentence.trim().chars().take(MAX_TITLE_LENGTH).collect()
}
