//! Unit tests for the remediation module.

mod classify_tests;
mod pr_tests;
mod workflow_tests;
