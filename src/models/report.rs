//! Extraction outcomes
//!
//! `ExtractionResult` records what manifest resolution found for each wanted
//! file; `CopyReport` records what the copier then did with it.

use std::fmt;
use std::path::PathBuf;

use super::wanted::WantedFile;
use crate::error::ExtractError;

/// Where a wanted file lives on disk, if anywhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(PathBuf),
    NotFound,
}

/// Manifest lookup outcome for one wanted file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub wanted: WantedFile,
    pub resolution: Resolution,
}

impl ExtractionResult {
    pub fn is_resolved(&self) -> bool {
        matches!(self.resolution, Resolution::Resolved(_))
    }
}

/// What happened to one wanted file during the copy step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyStatus {
    Copied {
        source: PathBuf,
        destination: PathBuf,
        bytes: u64,
    },
    /// Dry run: resolved, nothing written
    WouldCopy {
        source: PathBuf,
        destination: PathBuf,
    },
    /// Not present in the manifest
    NotFound,
    Failed {
        source: PathBuf,
        reason: String,
    },
}

impl CopyStatus {
    /// Whether manifest resolution succeeded, independent of the copy itself
    pub fn was_resolved(&self) -> bool {
        !matches!(self, Self::NotFound)
    }
}

impl fmt::Display for CopyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copied { .. } => write!(f, "copied"),
            Self::WouldCopy { .. } => write!(f, "would copy"),
            Self::NotFound => write!(f, "not found"),
            Self::Failed { reason, .. } => write!(f, "failed: {}", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyEntry {
    pub wanted: WantedFile,
    pub status: CopyStatus,
}

/// Per-file results of one copy step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyReport {
    pub destination: PathBuf,
    pub dry_run: bool,
    pub entries: Vec<CopyEntry>,
}

impl CopyReport {
    pub fn copied_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.status, CopyStatus::Copied { .. }))
            .count()
    }

    pub fn not_found(&self) -> impl Iterator<Item = &CopyEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.status, CopyStatus::NotFound))
    }

    pub fn failures(&self) -> impl Iterator<Item = &CopyEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.status, CopyStatus::Failed { .. }))
    }

    /// Per-file copy failures as `Copy` errors
    pub fn errors(&self) -> Vec<ExtractError> {
        self.entries
            .iter()
            .filter_map(|e| match &e.status {
                CopyStatus::Failed { reason, .. } => Some(ExtractError::Copy {
                    output_name: e.wanted.output_name.to_string(),
                    reason: reason.clone(),
                }),
                _ => None,
            })
            .collect()
    }

    /// `(output name, resolved?)` per entry, comparable across dry and real runs
    pub fn resolution_outcomes(&self) -> Vec<(&'static str, bool)> {
        self.entries
            .iter()
            .map(|e| (e.wanted.output_name, e.status.was_resolved()))
            .collect()
    }

    /// Get a one-line summary of the copy step
    pub fn summary(&self) -> String {
        let not_found = self.not_found().count();
        let failed = self.failures().count();

        if self.dry_run {
            let resolved = self.entries.len() - not_found;
            format!(
                "Dry run: {} of {} file(s) would be copied, {} not found",
                resolved,
                self.entries.len(),
                not_found
            )
        } else {
            format!(
                "Copied {} of {} file(s), {} not found, {} failed",
                self.copied_count(),
                self.entries.len(),
                not_found,
                failed
            )
        }
    }
}
