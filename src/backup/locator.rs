//! Backup locator
//!
//! Finds device backups under a backup root. A backup is any immediate
//! subdirectory holding a `Manifest.db`; the directory name is the backup
//! identifier.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::{ExtractError, ExtractResult};
use crate::models::Backup;

use super::device::load_device_info;

/// The manifest database every modern backup carries at its root
pub const MANIFEST_DB: &str = "Manifest.db";

/// Scans one backup root
pub struct BackupLocator {
    root: PathBuf,
}

impl BackupLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// List all backups under the root, sorted by identifier
    ///
    /// # Errors
    ///
    /// `NotFound` if the root is missing or holds no backups.
    pub fn list_backups(&self) -> ExtractResult<Vec<Backup>> {
        if !self.root.is_dir() {
            return Err(ExtractError::root_not_found(&self.root));
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.root).map_err(|e| {
            ExtractError::Io(format!("Failed to read backup root: {}", e))
        })? {
            let entry = entry.map_err(|e| {
                ExtractError::Io(format!("Failed to read directory entry: {}", e))
            })?;

            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            match read_backup(&path)? {
                Some(backup) => backups.push(backup),
                None => tracing::debug!(dir = %path.display(), "skipping directory without manifest"),
            }
        }

        if backups.is_empty() {
            return Err(ExtractError::NotFound {
                entity_type: "Backups",
                identifier: format!("none under {}", self.root.display()),
            });
        }

        backups.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        tracing::info!(root = %self.root.display(), count = backups.len(), "found backups");

        Ok(backups)
    }

    /// Open one backup by path or by identifier under the root
    pub fn open(&self, selector: &str) -> ExtractResult<Backup> {
        let as_path = PathBuf::from(selector);
        if as_path.join(MANIFEST_DB).is_file() {
            if let Some(backup) = read_backup(&as_path)? {
                return Ok(backup);
            }
        }

        read_backup(&self.root.join(selector))?
            .ok_or_else(|| ExtractError::backup_not_found(selector))
    }

    /// Open the explicitly selected backup, or the most recent one
    pub fn select(&self, selector: Option<&str>) -> ExtractResult<Backup> {
        match selector {
            Some(selector) => self.open(selector),
            None => {
                let backups = self.list_backups()?;
                most_recent(&backups).cloned()
            }
        }
    }
}

/// Pick the backup with the latest modification time
///
/// Ties go to the lexicographically greatest identifier.
pub fn most_recent(backups: &[Backup]) -> ExtractResult<&Backup> {
    backups
        .iter()
        .max_by(|a, b| {
            a.last_modified
                .cmp(&b.last_modified)
                .then_with(|| a.identifier.cmp(&b.identifier))
        })
        .ok_or(ExtractError::EmptyInput)
}

/// Build a `Backup` for `dir`, or `None` if it has no manifest
fn read_backup(dir: &Path) -> ExtractResult<Option<Backup>> {
    let manifest = dir.join(MANIFEST_DB);
    if !manifest.is_file() {
        return Ok(None);
    }

    let identifier = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string());

    let device = load_device_info(dir);
    let last_modified = match device.as_ref().and_then(|d| d.last_backup_date) {
        Some(date) => date,
        None => manifest_mtime(&manifest)?,
    };

    Ok(Some(Backup {
        identifier,
        path: dir.to_path_buf(),
        last_modified,
        device,
    }))
}

fn manifest_mtime(manifest: &Path) -> ExtractResult<DateTime<Utc>> {
    let modified = fs::metadata(manifest)
        .and_then(|m| m.modified())
        .map_err(|e| ExtractError::Io(format!("Failed to stat {}: {}", manifest.display(), e)))?;
    Ok(DateTime::<Utc>::from(modified))
}
