//! Port contracts for board persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by engine services.

pub mod repository;

pub use repository::{BoardRepository, BoardRepositoryError, BoardRepositoryResult};
