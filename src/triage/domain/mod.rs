//! Pure decision logic for task triage.
//!
//! Every function in this module is a total function of its text inputs (and
//! loaded board records); the keyword and template tables are static data so
//! they can be unit-tested and extended without touching control flow.

pub mod complexity;
pub mod decompose;
pub mod draft;
pub mod progress;
pub mod skills;

pub use complexity::{ComplexityAssessment, assess_complexity};
pub use decompose::{SubtaskTemplate, decompose};
pub use draft::{extract_priority, extract_title};
pub use progress::{BuildHealth, HealthStatus, ProgressReport, assess_health, compute_progress};
pub use skills::{SkillCategory, match_skills};
