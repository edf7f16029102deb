//! Application services for remediation ingestion.

mod board_sync;

pub use board_sync::BoardSyncService;
