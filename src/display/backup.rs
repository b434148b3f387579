//! Backup listing
//!
//! Formats the `--summarise` listing. Times are shown in local time with the
//! UTC offset spelled out.

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::models::Backup;

const HEADER_WIDTH: usize = 69;

/// Format a timestamp in `tz`, labelling the offset
pub fn format_local<Tz: TimeZone>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp
        .with_timezone(tz)
        .format("%d-%b-%Y %H:%M:%S (UTC%:z)")
        .to_string()
}

/// Format the list of available backups
pub fn format_backup_list(backups: &[Backup]) -> String {
    format_backup_list_in(backups, &Local)
}

pub(crate) fn format_backup_list_in<Tz: TimeZone>(backups: &[Backup], tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if backups.is_empty() {
        return "No backups found.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:=^width$}\n",
        " Backups Available ",
        width = HEADER_WIDTH
    ));

    for (i, backup) in backups.iter().enumerate() {
        let device = backup.device.as_ref();
        let product = device
            .and_then(|d| d.product_name.as_deref())
            .unwrap_or("unknown device");
        let version = device
            .and_then(|d| d.product_version.as_deref())
            .unwrap_or("?");

        output.push_str(&format!(
            "{}: {} [{}] (iOS version: {})\n",
            i + 1,
            backup.display_name(),
            product,
            version
        ));
        output.push_str(&format!(" - Identifier: {}\n", backup.identifier));
        output.push_str(&format!(
            " - Last backed up: {}\n",
            format_local(&backup.last_modified, tz)
        ));
        output.push('\n');
    }

    output.push_str(&"=".repeat(HEADER_WIDTH));
    output.push('\n');
    output
}
