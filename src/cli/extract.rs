//! Extraction command
//!
//! Runs the extraction pipeline and prints the outcome.

use chrono::{DateTime, Local};

use crate::config::{ExtractOptions, RunConfig};
use crate::display::format_copy_report;
use crate::error::ExtractResult;
use crate::extract::{format_utc, run_extraction};

/// Handle a default (non-summarise) invocation
pub fn handle_extract(
    config: &RunConfig,
    options: ExtractOptions,
    started_at: DateTime<Local>,
) -> ExtractResult<()> {
    let outcome = run_extraction(config, options, started_at)?;

    println!(
        "Backup: {} ({})",
        outcome.backup.display_name(),
        outcome.backup.identifier
    );
    println!(
        "Last backed up: {}",
        format_utc(&outcome.backup.last_modified)
    );
    print!("{}", format_copy_report(&outcome.report));

    match &outcome.summary {
        Some(Ok(path)) => println!("Summary written: {}", path.display()),
        Some(Err(e)) => println!("Warning: {}", e),
        None if options.write_info_txt => println!("Summary not written (dry run)"),
        None => {}
    }

    for dir in &outcome.pruned {
        println!("Removed empty directory: {}", dir.display());
    }

    Ok(())
}
