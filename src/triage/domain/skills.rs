//! Keyword-to-skill matching for assignee recommendation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Skill areas the engine can recognise in work-item text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    /// Server-side and API work.
    Backend,
    /// Client-side and UI work.
    Frontend,
    /// Build, deployment, and infrastructure work.
    Devops,
    /// Security and access-control work.
    Security,
    /// Schema and data-store work.
    Database,
    /// Quality assurance and test work.
    Testing,
    /// Documentation work.
    Documentation,
}

impl SkillCategory {
    /// All recognised categories, in table order.
    pub const ALL: [Self; 7] = [
        Self::Backend,
        Self::Frontend,
        Self::Devops,
        Self::Security,
        Self::Database,
        Self::Testing,
        Self::Documentation,
    ];

    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::Frontend => "frontend",
            Self::Devops => "devops",
            Self::Security => "security",
            Self::Database => "database",
            Self::Testing => "testing",
            Self::Documentation => "documentation",
        }
    }

    /// Returns the keyword list that maps free text onto this category.
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Backend => &["api", "backend", "server", "database", "sql", "flask", "python"],
            Self::Frontend => &["ui", "frontend", "html", "css", "javascript", "react", "vue"],
            Self::Devops => &["ci/cd", "deploy", "docker", "kubernetes", "infrastructure"],
            Self::Security => &["security", "vulnerability", "authentication", "authorization"],
            Self::Database => &["database", "sql", "migration", "schema", "postgres", "sqlite"],
            Self::Testing => &["test", "testing", "qa", "quality", "coverage"],
            Self::Documentation => &["docs", "documentation", "readme", "guide"],
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns the categories whose keyword list intersects the given text.
///
/// Matching is case-insensitive substring containment over the whole text;
/// the result preserves table order and holds each category at most once.
#[must_use]
pub fn match_skills(text: &str) -> Vec<SkillCategory> {
    let content = text.to_lowercase();
    SkillCategory::ALL
        .into_iter()
        .filter(|category| {
            category
                .keywords()
                .iter()
                .any(|keyword| content.contains(keyword))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{SkillCategory, match_skills};

    #[test]
    fn matches_are_reported_in_table_order() {
        let skills = match_skills("Add SQL migration and coverage for the API");
        assert_eq!(
            skills,
            vec![
                SkillCategory::Backend,
                SkillCategory::Database,
                SkillCategory::Testing,
            ]
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            match_skills("Harden AUTHENTICATION flow"),
            vec![SkillCategory::Security]
        );
    }

    #[test]
    fn unrelated_text_matches_nothing() {
        assert!(match_skills("Plan the offsite agenda").is_empty());
    }
}
