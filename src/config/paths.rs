//! Path management for iosextract
//!
//! Resolves the config file location, the default output root and the
//! platform's iOS backup location.
//!
//! ## Config File Resolution Order
//!
//! 1. `--config` flag or `IOSEXTRACT_CONFIG` environment variable
//! 2. `IOSEXTRACT_CONFIG_DIR` environment variable (directory holding `config.toml`)
//! 3. Platform config directory: `~/.config/iosextract` on Linux,
//!    `~/Library/Application Support/iosextract` on macOS, `%APPDATA%\iosextract` on Windows

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::ExtractError;

/// Name of the config file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Manages all paths used by iosextract
#[derive(Debug, Clone)]
pub struct ExtractPaths {
    /// Directory holding `config.toml`
    config_dir: PathBuf,
    /// The user's home directory, used for `~` expansion and defaults
    home_dir: PathBuf,
}

impl ExtractPaths {
    /// Create a new ExtractPaths instance from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ExtractError> {
        let base = BaseDirs::new()
            .ok_or_else(|| ExtractError::Config("Could not determine home directory".into()))?;

        let config_dir = if let Ok(custom) = std::env::var("IOSEXTRACT_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            base.config_dir().join("iosextract")
        };

        Ok(Self {
            config_dir,
            home_dir: base.home_dir().to_path_buf(),
        })
    }

    /// Create ExtractPaths rooted at custom directories (useful for testing)
    pub fn with_dirs(config_dir: PathBuf, home_dir: PathBuf) -> Self {
        Self {
            config_dir,
            home_dir,
        }
    }

    /// Get the default path to the config file
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Default root for extraction output (`~/ios-backups`)
    pub fn default_output_root(&self) -> PathBuf {
        self.home_dir.join("ios-backups")
    }

    /// Default location where the platform stores device backups
    ///
    /// # Errors
    ///
    /// Returns a config error on platforms without a known backup location;
    /// there the backup root has to be configured explicitly.
    pub fn default_backup_root(&self) -> Result<PathBuf, ExtractError> {
        platform_backup_root(&self.home_dir)
    }

    /// Expand a leading `~` to the home directory
    pub fn expand_home(&self, path: &Path) -> PathBuf {
        match path.strip_prefix("~") {
            Ok(rest) => self.home_dir.join(rest),
            Err(_) => path.to_path_buf(),
        }
    }
}

#[cfg(target_os = "macos")]
fn platform_backup_root(home: &Path) -> Result<PathBuf, ExtractError> {
    Ok(home.join("Library/Application Support/MobileSync/Backup"))
}

#[cfg(windows)]
fn platform_backup_root(home: &Path) -> Result<PathBuf, ExtractError> {
    Ok(home
        .join("AppData")
        .join("Roaming")
        .join("Apple Computer")
        .join("MobileSync")
        .join("Backup"))
}

#[cfg(not(any(target_os = "macos", windows)))]
fn platform_backup_root(_home: &Path) -> Result<PathBuf, ExtractError> {
    Err(ExtractError::Config(format!(
        "{} has no default iOS backup location; set `backup_directory` or pass --backup-root",
        std::env::consts::OS
    )))
}
