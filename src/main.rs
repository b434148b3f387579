use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};

use iosextract::cli::{handle_extract, handle_summarise};
use iosextract::config::{CliOverrides, ExtractPaths, Mode, RunConfig, Settings};

#[derive(Parser)]
#[command(
    name = "iosextract",
    version,
    disable_version_flag = true,
    about = "Extract specific files from an unencrypted iOS backup",
    long_about = "iosextract finds an unencrypted iOS backup, looks up the contacts, \
                  messages and WhatsApp chat databases in its manifest, and copies \
                  them into a timestamped directory under the output root."
)]
struct Cli {
    /// Output directory root (a YYYYMMDD_HHMMSS directory is created inside)
    #[arg(short, long, value_name = "DIR")]
    output_directory: Option<PathBuf>,

    /// Dry run: resolve and report, do not copy files
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Summarise all backup directories under the backup root
    #[arg(short, long)]
    summarise: bool,

    /// Write an info.txt summary next to the copied files
    #[arg(short, long)]
    write_info_txt: bool,

    /// Path to the config file
    #[arg(short, long, value_name = "FILE", env = "IOSEXTRACT_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding the device backups
    #[arg(short = 'r', long, value_name = "DIR")]
    backup_root: Option<PathBuf>,

    /// Backup identifier or path (defaults to the most recent backup)
    #[arg(short, long, value_name = "ID|PATH")]
    backup: Option<String>,

    /// Log filter, e.g. "debug" or "iosextract=trace"
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let started_at = chrono::Local::now();

    iosextract::logging::init(&cli.log_level)?;

    // Initialize paths and settings
    let paths = ExtractPaths::new()?;
    let settings = match &cli.config {
        Some(path) => Settings::load(&paths.expand_home(path), true)?,
        None => Settings::load(&paths.config_file(), false)?,
    };

    let overrides = CliOverrides {
        output_directory: cli.output_directory,
        backup_root: cli.backup_root,
        backup: cli.backup,
        dry_run: cli.dry_run,
        summarise: cli.summarise,
        write_info_txt: cli.write_info_txt,
    };
    let config = RunConfig::resolve(overrides, &settings, &paths)?;

    match config.mode {
        Mode::Summarise => handle_summarise(&config)?,
        Mode::Extract(options) => handle_extract(&config, options, started_at)?,
    }

    Ok(())
}
