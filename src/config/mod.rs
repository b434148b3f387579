//! Configuration module for iosextract
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - The optional TOML settings file
//! - `RunConfig`, the immutable merge of CLI flags, settings and defaults

pub mod paths;
pub mod settings;

use std::path::PathBuf;

pub use paths::ExtractPaths;
pub use settings::Settings;

use crate::error::ExtractError;

/// Values supplied on the command line; `None` means "not given"
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output_directory: Option<PathBuf>,
    pub backup_root: Option<PathBuf>,
    pub backup: Option<String>,
    pub dry_run: bool,
    pub summarise: bool,
    pub write_info_txt: bool,
}

/// Switches for an extraction run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Resolve and report without touching the output root
    pub dry_run: bool,
    /// Write `info.txt` next to the copied files
    pub write_info_txt: bool,
}

/// What a run should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// List the backups under the backup root
    Summarise,
    /// Copy the wanted files out of one backup
    Extract(ExtractOptions),
}

/// Fully resolved configuration for one run
///
/// Built once at startup and passed by reference; nothing downstream reads
/// the environment or the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub backup_root: PathBuf,
    pub output_root: PathBuf,
    /// Backup identifier or path; `None` selects the most recent backup
    pub backup: Option<String>,
    pub mode: Mode,
}

impl RunConfig {
    /// Merge CLI flags over settings over built-in defaults
    pub fn resolve(
        cli: CliOverrides,
        settings: &Settings,
        paths: &ExtractPaths,
    ) -> Result<Self, ExtractError> {
        let backup_root = match cli.backup_root.or_else(|| settings.backup_directory.clone()) {
            Some(root) => paths.expand_home(&root),
            None => paths.default_backup_root()?,
        };

        let output_root = cli
            .output_directory
            .or_else(|| settings.output_directory.clone())
            .map(|dir| paths.expand_home(&dir))
            .unwrap_or_else(|| paths.default_output_root());

        let mode = if cli.summarise {
            Mode::Summarise
        } else {
            Mode::Extract(ExtractOptions {
                dry_run: cli.dry_run,
                write_info_txt: cli.write_info_txt,
            })
        };

        Ok(Self {
            backup_root,
            output_root,
            backup: cli.backup.or_else(|| settings.uuid.clone()),
            mode,
        })
    }
}
