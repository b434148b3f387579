//! `info.txt` summary writer
//!
//! Records where an extraction came from and what it found. Dates are written
//! in UTC and labelled as such.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::{ExtractError, ExtractResult};
use crate::models::{Backup, CopyReport};

pub const INFO_TXT: &str = "info.txt";

const UTC_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

pub fn format_utc(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(UTC_FORMAT).to_string()
}

/// Render the summary text for one extraction
pub fn render_summary(backup: &Backup, report: &CopyReport) -> String {
    let mut out = String::new();

    // writing into a String cannot fail
    let _ = writeln!(out, "Backup Identifier: {}", backup.identifier);
    let _ = writeln!(out, "Backup Directory: {}", backup.path.display());
    let _ = writeln!(out, "Output Directory: {}", report.destination.display());
    let date_label = if backup.has_recorded_date() {
        "Last Backup Date"
    } else {
        "Manifest Modified"
    };
    let _ = writeln!(out, "{}: {}", date_label, format_utc(&backup.last_modified));

    if let Some(device) = &backup.device {
        for (label, value) in device.labelled_fields() {
            let _ = writeln!(out, "{}: {}", label, value);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Files:");
    for entry in &report.entries {
        let _ = writeln!(
            out,
            "  {}: {} ({})",
            entry.wanted.output_name, entry.status, entry.wanted
        );
    }

    out
}

/// Write `info.txt` into `destination`
///
/// # Errors
///
/// `Write` if the file cannot be created. Files already copied are untouched.
pub fn write_summary(
    backup: &Backup,
    report: &CopyReport,
    destination: &Path,
) -> ExtractResult<PathBuf> {
    let path = destination.join(INFO_TXT);
    fs::write(&path, render_summary(backup, report))
        .map_err(|e| ExtractError::Write(format!("{}: {}", path.display(), e)))?;

    tracing::info!(path = %path.display(), "wrote summary");
    Ok(path)
}
