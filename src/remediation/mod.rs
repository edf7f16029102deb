//! Autonomous remediation: issue classification, fix planning, PR strategy.
//!
//! Remediation takes raw issue payloads from the tracking gateway and decides
//! what the surrounding automation should do with them: whether the issue is
//! mechanically fixable, which remediation steps apply, and what pull request
//! to open. The engine only *plans*: branch names, PR bodies, and merge
//! eligibility are produced as intent for an external actor to execute, and
//! no git operation ever happens here. Classification is deterministic
//! regex/keyword matching over static tables. The module follows hexagonal
//! architecture:
//!
//! - Pure decision logic in [`domain`]
//! - Board-touching ingestion in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
