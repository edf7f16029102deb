//! Tests for issue classification.

use crate::remediation::domain::{
    Effort, FixCategory, IssueLabel, IssueReport, Severity, classify_issue,
};
use rstest::rstest;

#[rstest]
fn syntax_errors_classify_as_automatable_high() {
    let issue = IssueReport::new(41, "SyntaxError in parser");
    let strategy = classify_issue(&issue);

    assert!(strategy.automatable);
    assert_eq!(strategy.fix_category, Some(FixCategory::SyntaxError));
    assert_eq!(strategy.severity, Severity::High);
}

#[rstest]
#[case("ImportError when starting the worker", FixCategory::ImportError, Severity::High)]
#[case("TypeError in report rendering", FixCategory::TypeError, Severity::Medium)]
#[case("Possible SQL injection in search", FixCategory::SecurityVulnerability, Severity::Critical)]
#[case("DeprecationWarning from the client library", FixCategory::Deprecation, Severity::Low)]
fn each_pattern_row_sets_category_and_severity(
    #[case] title: &str,
    #[case] expected_category: FixCategory,
    #[case] expected_severity: Severity,
) {
    let strategy = classify_issue(&IssueReport::new(7, title));
    assert!(strategy.automatable);
    assert_eq!(strategy.fix_category, Some(expected_category));
    assert_eq!(strategy.severity, expected_severity);
}

#[rstest]
fn first_matching_pattern_wins() {
    // Both the syntax and deprecation rows match; the earlier row decides.
    let issue = IssueReport::new(8, "SyntaxError in deprecated helper");
    let strategy = classify_issue(&issue);
    assert_eq!(strategy.fix_category, Some(FixCategory::SyntaxError));
    assert_eq!(strategy.severity, Severity::High);
}

#[rstest]
fn cve_identifiers_are_detected() {
    let issue = IssueReport::new(9, "Bump dependency for CVE-2024 advisory");
    let strategy = classify_issue(&issue);
    assert_eq!(
        strategy.fix_category,
        Some(FixCategory::SecurityVulnerability)
    );
}

#[rstest]
fn trigger_labels_force_automatability() {
    let issue = IssueReport::new(10, "Please look at the settings page")
        .with_labels([IssueLabel::new("quick-fix")]);
    let strategy = classify_issue(&issue);

    assert!(strategy.automatable);
    assert_eq!(strategy.fix_category, None);
    assert!(
        strategy
            .suggested_actions
            .iter()
            .any(|action| action == "Apply quick fix and create PR")
    );
}

#[rstest]
fn unrecognised_labels_change_nothing() {
    let issue = IssueReport::new(11, "Please look at the settings page")
        .with_labels([IssueLabel::new("wontfix")]);
    let strategy = classify_issue(&issue);
    assert!(!strategy.automatable);
    assert!(strategy.suggested_actions.is_empty());
}

#[rstest]
fn content_keywords_append_actions_independently() {
    let issue = IssueReport::new(12, "Add docs and tests for the export feature");
    let strategy = classify_issue(&issue);

    assert_eq!(
        strategy.suggested_actions,
        vec![
            "Generate implementation plan".to_owned(),
            "Create task breakdown".to_owned(),
            "Auto-generate documentation".to_owned(),
            "Generate test cases".to_owned(),
        ]
    );
    // Action keywords alone do not make the issue automatable.
    assert!(!strategy.automatable);
}

#[rstest]
fn short_bodies_estimate_low_effort() {
    let issue = IssueReport::new(13, "Update onboarding copy").with_body("Two words.");
    assert_eq!(classify_issue(&issue).estimated_effort, Effort::Low);
}

#[rstest]
fn long_bodies_estimate_high_effort() {
    let issue = IssueReport::new(14, "Update onboarding flow").with_body("x".repeat(501));
    assert_eq!(classify_issue(&issue).estimated_effort, Effort::High);
}

#[rstest]
fn architecture_language_estimates_high_effort_regardless_of_length() {
    let issue = IssueReport::new(15, "Rework the ingestion architecture")
        .with_body("Short but architectural.");
    assert_eq!(classify_issue(&issue).estimated_effort, Effort::High);
}

#[rstest]
fn mid_sized_bodies_estimate_medium_effort() {
    let issue = IssueReport::new(16, "Rework the ingestion pipeline").with_body("y".repeat(250));
    assert_eq!(classify_issue(&issue).estimated_effort, Effort::Medium);
}
