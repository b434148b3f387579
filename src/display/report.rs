//! Copy report formatting

use crate::models::{CopyReport, CopyStatus};

/// Format a copy report as a per-file table followed by a summary line
pub fn format_copy_report(report: &CopyReport) -> String {
    let name_width = report
        .entries
        .iter()
        .map(|e| e.wanted.output_name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    if report.dry_run {
        output.push_str(&format!(
            "DRY RUN: nothing written; destination would be {}\n",
            report.destination.display()
        ));
    } else {
        output.push_str(&format!("Destination: {}\n", report.destination.display()));
    }
    output.push('\n');

    for entry in &report.entries {
        let detail = match &entry.status {
            CopyStatus::Copied { source, bytes, .. } => {
                format!("{} bytes from {}", bytes, source.display())
            }
            CopyStatus::WouldCopy { source, .. } => format!("from {}", source.display()),
            CopyStatus::NotFound => entry.wanted.label.to_string(),
            CopyStatus::Failed { source, .. } => source.display().to_string(),
        };
        output.push_str(&format!(
            "  {:<name_width$}  {:<12}  {}\n",
            entry.wanted.output_name,
            short_status(&entry.status),
            detail,
            name_width = name_width,
        ));
    }

    output.push('\n');
    output.push_str(&report.summary());
    output.push('\n');

    for error in report.errors() {
        output.push_str(&format!("Warning: {}\n", error));
    }

    output
}

fn short_status(status: &CopyStatus) -> &'static str {
    match status {
        CopyStatus::Copied { .. } => "copied",
        CopyStatus::WouldCopy { .. } => "would copy",
        CopyStatus::NotFound => "not found",
        CopyStatus::Failed { .. } => "FAILED",
    }
}
