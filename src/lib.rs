//! iosextract - pull contact, message and chat databases out of iOS backups
//!
//! This library locates unencrypted iOS device backups, reads each backup's
//! `Manifest.db` to find a fixed set of databases, and copies them into a
//! timestamped output directory.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution, the TOML settings file and `RunConfig`
//! - `error`: Custom error types
//! - `models`: Backups, wanted files and extraction outcomes
//! - `backup`: Backup discovery and `Info.plist` reading
//! - `extract`: Manifest resolution, copying and the `info.txt` summary
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//! - `logging`: tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use iosextract::backup::BackupLocator;
//! use iosextract::extract::{copy_files, load_manifest, resolve};
//! use iosextract::models::WANTED_FILES;
//!
//! let backup = BackupLocator::new(root).select(None)?;
//! let manifest = load_manifest(&backup.path)?;
//! let report = copy_files(&resolve(&manifest, WANTED_FILES), &destination, false)?;
//! println!("{}", report.summary());
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod extract;
pub mod logging;
pub mod models;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{ExtractError, ExtractResult};
