//! User settings for iosextract
//!
//! Settings live in an optional TOML file under a `[defaults]` section:
//!
//! ```toml
//! [defaults]
//! output_directory = "~/ios-backups"
//! backup_directory = "~/Library/Application Support/MobileSync/Backup"
//! uuid = "00008030-001A2B3C4D5E6F70"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ExtractError;

/// Options read from the `[defaults]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Root directory that receives timestamped extraction directories
    #[serde(default)]
    pub output_directory: Option<PathBuf>,

    /// Directory holding the device backups
    #[serde(default)]
    pub backup_directory: Option<PathBuf>,

    /// Identifier of the backup to extract from
    #[serde(default)]
    pub uuid: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    defaults: Settings,
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ExtractError> {
        let file: SettingsFile = toml::from_str(contents)
            .map_err(|e| ExtractError::Config(format!("Failed to parse config file: {}", e)))?;
        Ok(file.defaults)
    }

    /// Load settings from `path`
    ///
    /// A missing file yields default settings unless `required` is set, which
    /// is the case when the user named the file explicitly.
    pub fn load(path: &Path, required: bool) -> Result<Self, ExtractError> {
        if !path.exists() {
            if required {
                return Err(ExtractError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| ExtractError::Io(format!("Failed to read config file: {}", e)))?;

        let settings = Self::from_toml(&contents)?;
        tracing::debug!(path = %path.display(), ?settings, "loaded config file");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.output_directory.is_none());
        assert!(settings.backup_directory.is_none());
        assert!(settings.uuid.is_none());
    }

    #[test]
    fn test_parse_defaults_section() {
        let settings = Settings::from_toml(
            r#"
            [defaults]
            output_directory = "~/exports"
            uuid = "abc-123"
            "#,
        )
        .unwrap();

        assert_eq!(settings.output_directory, Some(PathBuf::from("~/exports")));
        assert_eq!(settings.uuid.as_deref(), Some("abc-123"));
        assert!(settings.backup_directory.is_none());
    }

    #[test]
    fn test_missing_section_is_empty() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_unknown_option_rejected() {
        let err = Settings::from_toml("[defaults]\noutput_dir = \"/tmp\"\n").unwrap_err();
        assert!(matches!(err, ExtractError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        assert_eq!(Settings::load(&path, false).unwrap(), Settings::default());
        assert!(matches!(
            Settings::load(&path, true),
            Err(ExtractError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[defaults]\nbackup_directory = \"/srv/backups\"\n").unwrap();

        let settings = Settings::load(&path, true).unwrap();
        assert_eq!(
            settings.backup_directory,
            Some(PathBuf::from("/srv/backups"))
        );
    }
}
