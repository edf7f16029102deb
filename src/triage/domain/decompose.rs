//! Pattern-based decomposition of work items into ordered subtasks.

use crate::board::domain::TaskPriority;
use serde::{Deserialize, Serialize};

/// Title keywords that select the build-intent template.
const BUILD_KEYWORDS: &[&str] = &["implement", "create", "build", "develop"];

/// Title keywords that select the fix-intent template.
const FIX_KEYWORDS: &[&str] = &["fix", "bug", "issue"];

/// One phase of a decomposition template.
struct PhaseSpec {
    prefix: &'static str,
    description: &'static str,
    priority: TaskPriority,
    estimated_hours: f64,
}

/// Ordered phases emitted for build-intent items.
const BUILD_PHASES: [PhaseSpec; 4] = [
    PhaseSpec {
        prefix: "Design and plan",
        description: "Create technical design and implementation plan",
        priority: TaskPriority::High,
        estimated_hours: 4.0,
    },
    PhaseSpec {
        prefix: "Implement core functionality",
        description: "Develop the main features and functionality",
        priority: TaskPriority::High,
        estimated_hours: 16.0,
    },
    PhaseSpec {
        prefix: "Write tests",
        description: "Create unit and integration tests",
        priority: TaskPriority::Medium,
        estimated_hours: 6.0,
    },
    PhaseSpec {
        prefix: "Documentation",
        description: "Write documentation and usage examples",
        priority: TaskPriority::Low,
        estimated_hours: 2.0,
    },
];

/// Ordered phases emitted for fix-intent items.
const FIX_PHASES: [PhaseSpec; 3] = [
    PhaseSpec {
        prefix: "Investigate",
        description: "Identify root cause and impact",
        priority: TaskPriority::High,
        estimated_hours: 2.0,
    },
    PhaseSpec {
        prefix: "Fix",
        description: "Implement the fix",
        priority: TaskPriority::High,
        estimated_hours: 4.0,
    },
    PhaseSpec {
        prefix: "Test",
        description: "Verify the fix and prevent regression",
        priority: TaskPriority::Medium,
        estimated_hours: 2.0,
    },
];

/// Suggested subtask produced by decomposition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtaskTemplate {
    /// Phase-prefixed subtask title.
    pub title: String,
    /// Fixed phase description.
    pub description: String,
    /// Phase priority.
    pub priority: TaskPriority,
    /// Phase effort estimate in hours.
    pub estimated_hours: f64,
}

/// Decomposes a work item into an ordered subtask template.
///
/// Build-intent titles (implement/create/build/develop) take precedence over
/// fix-intent titles (fix/bug/issue); matching keys off the title only. An
/// empty result means no decomposition is suggested; it is not an error.
#[must_use]
pub fn decompose(title: &str, _description: &str) -> Vec<SubtaskTemplate> {
    let lowered = title.to_lowercase();

    if BUILD_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        expand_phases(&BUILD_PHASES, title)
    } else if FIX_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        expand_phases(&FIX_PHASES, title)
    } else {
        Vec::new()
    }
}

fn expand_phases(phases: &[PhaseSpec], title: &str) -> Vec<SubtaskTemplate> {
    phases
        .iter()
        .map(|phase| SubtaskTemplate {
            title: format!("{}: {title}", phase.prefix),
            description: phase.description.to_owned(),
            priority: phase.priority,
            estimated_hours: phase.estimated_hours,
        })
        .collect()
}
