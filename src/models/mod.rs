//! Core data models for iosextract
//!
//! This module contains the data structures that describe a device backup,
//! the files wanted from it, and the outcome of extracting them.

pub mod backup;
pub mod report;
pub mod wanted;

pub use backup::{Backup, DeviceInfo};
pub use report::{CopyEntry, CopyReport, CopyStatus, ExtractionResult, Resolution};
pub use wanted::{WantedFile, WANTED_FILES};
