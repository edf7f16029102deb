//! Issue and pull-request payloads from the tracking gateway.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tracker a payload originated from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSource {
    /// GitHub issues.
    #[default]
    GitHub,
    /// GitLab issues.
    GitLab,
}

impl IssueSource {
    /// Returns the human-readable prefix used when mirroring an issue into a
    /// task description.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub Issue",
            Self::GitLab => "GitLab Issue",
        }
    }
}

/// Open/closed state carried on a tracker payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueState {
    /// Issue is open.
    #[default]
    Open,
    /// Issue has been closed.
    Closed,
}

/// Label attached to an issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueLabel {
    /// Label name as reported by the tracker.
    pub name: String,
}

impl IssueLabel {
    /// Creates a label.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Raw issue payload as supplied by the issue-tracking gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueReport {
    /// Issue number within its repository.
    pub number: u64,
    /// Issue title.
    pub title: String,
    /// Issue body, empty when the reporter left none.
    #[serde(default)]
    pub body: String,
    /// Labels attached to the issue.
    #[serde(default)]
    pub labels: Vec<IssueLabel>,
    /// Open/closed state.
    #[serde(default)]
    pub state: IssueState,
    /// Originating tracker.
    #[serde(default)]
    pub source: IssueSource,
    /// Creation timestamp, when the gateway supplies one.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp, when the gateway supplies one.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl IssueReport {
    /// Creates a minimal open issue payload.
    #[must_use]
    pub fn new(number: u64, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            body: String::new(),
            labels: Vec::new(),
            state: IssueState::Open,
            source: IssueSource::GitHub,
            created_at: None,
            updated_at: None,
        }
    }

    /// Sets the issue body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the issue labels.
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = IssueLabel>) -> Self {
        self.labels = labels.into_iter().collect();
        self
    }

    /// Returns the label names in payload order.
    #[must_use]
    pub fn label_names(&self) -> Vec<&str> {
        self.labels.iter().map(|label| label.name.as_str()).collect()
    }
}

/// Raw pull-request payload as supplied by the issue-tracking gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestPayload {
    /// Pull request number within its repository.
    pub number: u64,
    /// Pull request title.
    pub title: String,
    /// Labels attached to the pull request.
    #[serde(default)]
    pub labels: Vec<IssueLabel>,
}

impl PullRequestPayload {
    /// Creates a pull-request payload.
    #[must_use]
    pub fn new(number: u64, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            labels: Vec::new(),
        }
    }

    /// Sets the pull-request labels.
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = IssueLabel>) -> Self {
        self.labels = labels.into_iter().collect();
        self
    }

    /// Returns whether any label carries the given name.
    #[must_use]
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|label| label.name == name)
    }
}
