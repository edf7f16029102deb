//! Tests for PR strategy planning and the merge gate.

use crate::remediation::domain::{
    CheckStatus, IssueContext, IssueLabel, PullRequestPayload, plan_pr, should_auto_merge,
    synthesize_fix,
};
use rstest::rstest;

fn context(title: &str) -> IssueContext {
    IssueContext {
        title: title.to_owned(),
        issue_number: Some(88),
    }
}

#[rstest]
fn unfixable_plans_withhold_the_pr() {
    let fix = synthesize_fix("The dashboard feels slow", "");
    let plan = plan_pr(&context("Dashboard slowness"), &fix).expect("plan");

    assert!(!plan.should_create);
    assert!(plan.branch_name.is_empty());
    assert!(plan.title.is_empty());
    assert!(plan.body.is_empty());
    assert!(!plan.auto_merge);
}

#[rstest]
fn branch_names_are_slugged_under_the_auto_fix_prefix() {
    let fix = synthesize_fix("Typo on the banner", "");
    let plan = plan_pr(&context("Typo: 'Welcom' on the banner!"), &fix).expect("plan");

    assert_eq!(plan.branch_name, "auto-fix/typo-welcom-on-the-banner-");
}

#[rstest]
fn long_titles_truncate_to_fifty_slug_characters() {
    let fix = synthesize_fix("Typo everywhere", "");
    let long_title = "Fix the spelling of accommodation across every single onboarding screen";
    let plan = plan_pr(&context(long_title), &fix).expect("plan");

    let slug = plan
        .branch_name
        .strip_prefix("auto-fix/")
        .expect("prefixed branch");
    assert_eq!(slug.chars().count(), 50);
}

#[rstest]
fn titles_and_bodies_embed_the_fix_details() {
    let fix = synthesize_fix("SyntaxError in the config loader", "");
    let plan = plan_pr(&context("Config loader broken"), &fix).expect("plan");

    assert_eq!(plan.title, "Auto-fix: Syntax - Config loader broken");
    assert!(plan.body.contains("**Issue**: #88"));
    assert!(plan.body.contains("**Fix Type**: syntax"));
    assert!(plan.body.contains("**Confidence**: 90%"));
    assert!(plan.body.contains("- Fix indentation issues"));
    assert!(plan.body.contains("Auto-fix indentation and syntax issues"));
}

#[rstest]
fn missing_issue_numbers_render_as_not_available() {
    let fix = synthesize_fix("Typo in footer", "");
    let anonymous = IssueContext {
        title: "Footer typo".to_owned(),
        issue_number: None,
    };
    let plan = plan_pr(&anonymous, &fix).expect("plan");
    assert!(plan.body.contains("**Issue**: #N/A"));
}

#[rstest]
fn auto_merge_requires_high_confidence_mechanical_fixes() {
    // Typo (0.95) and syntax (0.9) qualify.
    let typo = synthesize_fix("typo in footer", "");
    assert!(plan_pr(&context("Footer"), &typo).expect("plan").auto_merge);

    let syntax = synthesize_fix("SyntaxError in loader", "");
    assert!(plan_pr(&context("Loader"), &syntax).expect("plan").auto_merge);

    // Import (0.85) and security (0.8) fall below the gate or family.
    let import = synthesize_fix("ImportError in worker", "");
    assert!(!plan_pr(&context("Worker"), &import).expect("plan").auto_merge);

    let security = synthesize_fix("XSS in comments", "");
    assert!(
        !plan_pr(&context("Comments"), &security)
            .expect("plan")
            .auto_merge
    );
}

#[rstest]
#[case(&["auto-merge"], CheckStatus::Success, true)]
#[case(&["safe-to-merge"], CheckStatus::Success, true)]
#[case(&["auto-merge"], CheckStatus::Failure, false)]
#[case(&["auto-merge"], CheckStatus::Pending, false)]
#[case(&["enhancement"], CheckStatus::Success, false)]
#[case(&[], CheckStatus::Success, false)]
fn merge_gate_requires_label_and_green_checks(
    #[case] labels: &[&str],
    #[case] checks: CheckStatus,
    #[case] expected: bool,
) {
    let pr = PullRequestPayload::new(5, "Auto-fix: Typo - Footer")
        .with_labels(labels.iter().map(|name| IssueLabel::new(*name)));
    assert_eq!(should_auto_merge(&pr, checks), expected);
}

#[rstest]
fn check_status_parses_gateway_strings() {
    assert_eq!(CheckStatus::try_from("success"), Ok(CheckStatus::Success));
    assert_eq!(CheckStatus::try_from("FAILURE"), Ok(CheckStatus::Failure));
    assert!(CheckStatus::try_from("neutral").is_err());
}
