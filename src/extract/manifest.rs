//! Manifest loading and wanted-file resolution
//!
//! `Manifest.db` is an SQLite database whose `Files` table maps each backed-up
//! file's `(domain, relativePath)` to its `fileID`, the SHA-1 name the file is
//! stored under. Since iOS 10 the stored file lives in a subdirectory named by
//! the first two characters of its `fileID`:
//!
//! ```text
//! <backup>/7c/7c7fba66680ef796b916b067077cc246adacf01d
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use plist::Value;
use rusqlite::{Connection, OpenFlags};

use crate::backup::MANIFEST_DB;
use crate::error::{ExtractError, ExtractResult};
use crate::models::{ExtractionResult, Resolution, WantedFile};

/// Backup properties file; records whether the backup is encrypted
pub const MANIFEST_PLIST: &str = "Manifest.plist";

/// `Files.flags` value for regular files (2 is a directory, 4 a symlink)
const FLAG_FILE: i64 = 1;

/// One row of the manifest's `Files` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub domain: String,
    pub relative_path: String,
    pub file_id: String,
}

/// In-memory index of a backup's regular files
#[derive(Debug, Clone)]
pub struct Manifest {
    backup_root: PathBuf,
    entries: HashMap<(String, String), String>,
}

impl Manifest {
    /// Build a manifest from entries, dropping any with an unusable fileID
    pub fn from_entries(
        backup_root: impl Into<PathBuf>,
        entries: impl IntoIterator<Item = ManifestEntry>,
    ) -> Self {
        let mut manifest = Self {
            backup_root: backup_root.into(),
            entries: HashMap::new(),
        };
        for entry in entries {
            manifest.insert(entry);
        }
        manifest
    }

    fn insert(&mut self, entry: ManifestEntry) {
        if !is_valid_file_id(&entry.file_id) {
            tracing::warn!(
                domain = %entry.domain,
                path = %entry.relative_path,
                file_id = %entry.file_id,
                "skipping manifest entry with malformed fileID"
            );
            return;
        }
        self.entries
            .insert((entry.domain, entry.relative_path), entry.file_id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the fileID for a logical file
    pub fn file_id(&self, domain: &str, relative_path: &str) -> Option<&str> {
        self.entries
            .get(&(domain.to_owned(), relative_path.to_owned()))
            .map(String::as_str)
    }

    /// On-disk location of a stored file: `<root>/<first two chars>/<fileID>`
    ///
    /// `None` for a fileID that is not at least two hex digits.
    pub fn shard_path(&self, file_id: &str) -> Option<PathBuf> {
        if !is_valid_file_id(file_id) {
            return None;
        }
        Some(self.backup_root.join(&file_id[..2]).join(file_id))
    }
}

fn is_valid_file_id(file_id: &str) -> bool {
    file_id.len() >= 2 && file_id.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Read the manifest of the backup at `backup_path`
///
/// # Errors
///
/// `ManifestParse` if `Manifest.db` is missing or unreadable, lacks the
/// `Files` table, or the backup is marked encrypted.
pub fn load_manifest(backup_path: &Path) -> ExtractResult<Manifest> {
    let db_path = backup_path.join(MANIFEST_DB);
    if !db_path.is_file() {
        return Err(ExtractError::manifest(&db_path, "file is missing"));
    }

    if is_encrypted(backup_path) {
        return Err(ExtractError::manifest(
            &db_path,
            "backup is encrypted; only unencrypted backups are supported",
        ));
    }

    let conn = Connection::open_with_flags(
        &db_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| ExtractError::manifest(&db_path, e))?;

    let mut stmt = conn
        .prepare("SELECT fileID, domain, relativePath FROM Files WHERE flags = ?1")
        .map_err(|e| ExtractError::manifest(&db_path, e))?;

    let rows = stmt
        .query_map([FLAG_FILE], |row| {
            Ok(ManifestEntry {
                file_id: row.get(0)?,
                domain: row.get(1)?,
                relative_path: row.get(2)?,
            })
        })
        .map_err(|e| ExtractError::manifest(&db_path, e))?;

    let mut manifest = Manifest::from_entries(backup_path, Vec::new());
    for row in rows {
        manifest.insert(row.map_err(|e| ExtractError::manifest(&db_path, e))?);
    }

    tracing::info!(
        manifest = %db_path.display(),
        entries = manifest.len(),
        "loaded manifest"
    );

    Ok(manifest)
}

/// `Manifest.plist` is optional; only an explicit `IsEncrypted = true` counts
fn is_encrypted(backup_path: &Path) -> bool {
    let path = backup_path.join(MANIFEST_PLIST);
    if !path.is_file() {
        return false;
    }

    match Value::from_file(&path) {
        Ok(value) => value
            .as_dictionary()
            .and_then(|dict| dict.get("IsEncrypted"))
            .and_then(Value::as_boolean)
            .unwrap_or(false),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "ignoring unreadable Manifest.plist");
            false
        }
    }
}

/// Map each wanted file to its on-disk path
///
/// A file missing from the manifest is recorded as `NotFound`; the remaining
/// files are still resolved.
pub fn resolve(manifest: &Manifest, wanted: &[WantedFile]) -> Vec<ExtractionResult> {
    wanted
        .iter()
        .map(|w| {
            let path = manifest
                .file_id(w.domain, w.relative_path)
                .and_then(|file_id| manifest.shard_path(file_id));
            let resolution = match path {
                Some(path) => {
                    tracing::debug!(file = w.output_name, path = %path.display(), "resolved");
                    Resolution::Resolved(path)
                }
                None => {
                    tracing::info!(file = w.output_name, key = %w, "not in manifest");
                    Resolution::NotFound
                }
            };
            ExtractionResult {
                wanted: *w,
                resolution,
            }
        })
        .collect()
}
