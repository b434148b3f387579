//! Display formatting for terminal output
//!
//! Provides the backup listing and the per-file copy report.

pub mod backup;
pub mod report;

pub use backup::{format_backup_list, format_local};
pub use report::format_copy_report;
