//! Extraction pipeline for iosextract
//!
//! One run moves through fixed stages:
//!
//! ```text
//! LocatingBackup -> ResolvingManifest -> Copying -> Summarizing -> Done
//! ```
//!
//! Errors while locating the backup or reading its manifest abort the run
//! before anything is written. Per-file copy failures and a failed summary
//! are recorded in the outcome and leave earlier copies in place.

mod copier;
mod manifest;
mod summary;

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Local};

pub use copier::{copy_files, is_run_dir_name, prune_empty_runs, RUN_DIR_FORMAT};
pub use manifest::{load_manifest, resolve, Manifest, ManifestEntry, MANIFEST_PLIST};
pub use summary::{format_utc, render_summary, write_summary, INFO_TXT};

use crate::backup::BackupLocator;
use crate::config::{ExtractOptions, RunConfig};
use crate::error::{ExtractError, ExtractResult};
use crate::models::{Backup, CopyReport, WANTED_FILES};

/// Pipeline stage, used to label progress in the logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    LocatingBackup,
    ResolvingManifest,
    Copying,
    Summarizing,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LocatingBackup => "locating backup",
            Self::ResolvingManifest => "resolving manifest",
            Self::Copying => "copying",
            Self::Summarizing => "summarizing",
            Self::Done => "done",
        };
        write!(f, "{}", name)
    }
}

/// Everything a finished run produced
#[derive(Debug)]
pub struct ExtractionOutcome {
    pub backup: Backup,
    pub report: CopyReport,
    /// `None` when no summary was requested or the run was a dry run
    pub summary: Option<ExtractResult<PathBuf>>,
    /// Empty run directories removed from the output root
    pub pruned: Vec<PathBuf>,
}

/// Output directory for a run started at `started_at`
pub fn run_directory(config: &RunConfig, started_at: &DateTime<Local>) -> PathBuf {
    config
        .output_root
        .join(started_at.format(RUN_DIR_FORMAT).to_string())
}

/// Extract the wanted files from the configured backup
pub fn run_extraction(
    config: &RunConfig,
    options: ExtractOptions,
    started_at: DateTime<Local>,
) -> ExtractResult<ExtractionOutcome> {
    enter(Stage::LocatingBackup);
    let locator = BackupLocator::new(&config.backup_root);
    let backup = locator.select(config.backup.as_deref())?;
    tracing::info!(backup = %backup.identifier, path = %backup.path.display(), "selected backup");

    enter(Stage::ResolvingManifest);
    let manifest = load_manifest(&backup.path)?;
    let results = resolve(&manifest, WANTED_FILES);

    enter(Stage::Copying);
    let destination = run_directory(config, &started_at);
    if !options.dry_run {
        tracing::info!(destination = %destination.display(), "extracting databases");
    }
    let report = copy_files(&results, &destination, options.dry_run)?;

    enter(Stage::Summarizing);
    let summary = (options.write_info_txt && !options.dry_run)
        .then(|| write_summary(&backup, &report, &destination));
    if let Some(Err(e)) = &summary {
        tracing::warn!(error = %e, "summary not written");
    }

    let pruned = if options.dry_run {
        Vec::new()
    } else {
        prune_empty_runs(&config.output_root).unwrap_or_else(|e: ExtractError| {
            tracing::warn!(error = %e, "could not prune empty run directories");
            Vec::new()
        })
    };

    enter(Stage::Done);
    Ok(ExtractionOutcome {
        backup,
        report,
        summary,
        pruned,
    })
}

fn enter(stage: Stage) {
    tracing::debug!(%stage, "entering stage");
}
