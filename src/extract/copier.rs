//! Copying resolved files out of a backup
//!
//! Copies are best effort: a failure on one file is recorded in the
//! `CopyReport` and the remaining files are still copied.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use filetime::FileTime;

use crate::error::{ExtractError, ExtractResult};
use crate::models::{CopyEntry, CopyReport, CopyStatus, ExtractionResult, Resolution};

/// Name format of per-run output directories, e.g. `20240131_235959`
pub const RUN_DIR_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Copy every resolved file into `destination`
///
/// With `dry_run` nothing is created; the report carries `WouldCopy` entries
/// for the same files a real run would copy.
///
/// # Errors
///
/// Only creating `destination` itself is fatal. Existing files are overwritten.
pub fn copy_files(
    results: &[ExtractionResult],
    destination: &Path,
    dry_run: bool,
) -> ExtractResult<CopyReport> {
    if !dry_run {
        fs::create_dir_all(destination).map_err(|e| {
            ExtractError::Io(format!(
                "Failed to create output directory {}: {}",
                destination.display(),
                e
            ))
        })?;
    }

    let entries = results
        .iter()
        .map(|result| {
            let status = match &result.resolution {
                Resolution::NotFound => CopyStatus::NotFound,
                Resolution::Resolved(source) => {
                    let target = destination.join(result.wanted.output_name);
                    if dry_run {
                        tracing::info!(from = %source.display(), to = %target.display(), "dry run: would copy");
                        CopyStatus::WouldCopy {
                            source: source.clone(),
                            destination: target,
                        }
                    } else {
                        copy_one(source, &target)
                    }
                }
            };
            CopyEntry {
                wanted: result.wanted,
                status,
            }
        })
        .collect();

    Ok(CopyReport {
        destination: destination.to_path_buf(),
        dry_run,
        entries,
    })
}

fn copy_one(source: &Path, target: &Path) -> CopyStatus {
    match fs::copy(source, target) {
        Ok(bytes) => copied(source, target, bytes, preserve_mtime(source, target)),
        Err(e) => {
            tracing::warn!(from = %source.display(), error = %e, "copy failed");
            CopyStatus::Failed {
                source: source.to_path_buf(),
                reason: e.to_string(),
            }
        }
    }
}

/// A written file counts as copied even if its mtime could not be carried over
fn copied(source: &Path, target: &Path, bytes: u64, mtime: std::io::Result<()>) -> CopyStatus {
    if let Err(e) = mtime {
        tracing::warn!(to = %target.display(), error = %e, "could not preserve modification time");
    }
    tracing::info!(from = %source.display(), to = %target.display(), bytes, "copied");
    CopyStatus::Copied {
        source: source.to_path_buf(),
        destination: target.to_path_buf(),
        bytes,
    }
}

fn preserve_mtime(source: &Path, target: &Path) -> std::io::Result<()> {
    let metadata = fs::metadata(source)?;
    filetime::set_file_mtime(target, FileTime::from_last_modification_time(&metadata))
}

/// Whether `name` looks like a per-run output directory
pub fn is_run_dir_name(name: &str) -> bool {
    name.len() == 15 && NaiveDateTime::parse_from_str(name, RUN_DIR_FORMAT).is_ok()
}

/// Remove empty run directories directly under `output_root`
///
/// Directories whose names are not run timestamps are left alone. Returns the
/// removed paths.
pub fn prune_empty_runs(output_root: &Path) -> ExtractResult<Vec<PathBuf>> {
    if !output_root.is_dir() {
        return Ok(Vec::new());
    }

    let mut removed = Vec::new();

    for entry in fs::read_dir(output_root)
        .map_err(|e| ExtractError::Io(format!("Failed to read output root: {}", e)))?
    {
        let entry =
            entry.map_err(|e| ExtractError::Io(format!("Failed to read directory entry: {}", e)))?;
        let path = entry.path();

        let is_candidate = path.is_dir()
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .map_or(false, is_run_dir_name);
        if !is_candidate {
            continue;
        }

        let is_empty = fs::read_dir(&path)
            .map(|mut it| it.next().is_none())
            .unwrap_or(false);
        if is_empty {
            fs::remove_dir(&path).map_err(|e| {
                ExtractError::Io(format!("Failed to remove {}: {}", path.display(), e))
            })?;
            tracing::info!(dir = %path.display(), "removed empty run directory");
            removed.push(path);
        }
    }

    Ok(removed)
}
