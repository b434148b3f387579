//! Custom error types for iosextract
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::Path;

use thiserror::Error;

/// The main error type for iosextract operations
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// A backup root or backup directory could not be found
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Selection was attempted from an empty set of backups
    #[error("No backups to choose from")]
    EmptyInput,

    /// The backup manifest is missing, corrupt or in an unknown format
    #[error("Cannot read manifest {path}: {reason}")]
    ManifestParse { path: String, reason: String },

    /// A single wanted file could not be copied
    #[error("Failed to copy {output_name}: {reason}")]
    Copy { output_name: String, reason: String },

    /// The summary file could not be written
    #[error("Failed to write summary: {0}")]
    Write(String),
}

impl ExtractError {
    /// Create a "not found" error for a backup root directory
    pub fn root_not_found(path: &Path) -> Self {
        Self::NotFound {
            entity_type: "Backup root",
            identifier: path.display().to_string(),
        }
    }

    /// Create a "not found" error for a single backup
    pub fn backup_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Backup",
            identifier: identifier.into(),
        }
    }

    /// Create a manifest parse error for the manifest at `path`
    pub fn manifest(path: &Path, reason: impl ToString) -> Self {
        Self::ManifestParse {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for iosextract operations
pub type ExtractResult<T> = Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExtractError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = ExtractError::backup_not_found("00008030-001A");
        assert_eq!(err.to_string(), "Backup not found: 00008030-001A");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_manifest_error() {
        let err = ExtractError::manifest(Path::new("/b/Manifest.db"), "file is not a database");
        assert_eq!(
            err.to_string(),
            "Cannot read manifest /b/Manifest.db: file is not a database"
        );
    }

    #[test]
    fn test_copy_error_display() {
        let copy = ExtractError::Copy {
            output_name: "sms.db".into(),
            reason: "permission denied".into(),
        };
        assert_eq!(copy.to_string(), "Failed to copy sms.db: permission denied");
        assert!(!copy.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExtractError = io_err.into();
        assert!(matches!(err, ExtractError::Io(_)));
    }
}
