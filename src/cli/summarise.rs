//! Summarise command
//!
//! Lists every backup under the backup root.

use crate::backup::BackupLocator;
use crate::config::RunConfig;
use crate::display::format_backup_list;
use crate::error::ExtractResult;

/// Handle `--summarise`
pub fn handle_summarise(config: &RunConfig) -> ExtractResult<()> {
    let backups = BackupLocator::new(&config.backup_root).list_backups()?;
    print!("{}", format_backup_list(&backups));
    Ok(())
}
