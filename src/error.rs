//! Error types for botcheck operations.
//!
//! This module defines [`BotcheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A check that finds something missing records it in its
//!   [`CheckResult`](crate::checks::CheckResult) and never returns an error
//! - `BotcheckError` is reserved for conditions that stop the run
//!   (unwritable data directory, unreadable env file, a probe that failed
//!   for a reason other than "module not found", a broken checklist file)
//! - Use `anyhow::Error` (via `BotcheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for botcheck operations.
#[derive(Debug, Error)]
pub enum BotcheckError {
    /// Checklist file passed with `--config` does not exist.
    #[error("Checklist not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// The checklist file exists but could not be read.
    #[error("Failed to read checklist {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the checklist file.
    #[error("Failed to parse checklist at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Checklist parsed but contains invalid entries.
    #[error("Invalid checklist: {message}")]
    ConfigValidationError { message: String },

    /// The env file exists but could not be read.
    #[error("Failed to read env file {path}: {source}")]
    EnvFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data directory was missing and could not be created.
    #[error("Failed to create data directory {path}: {source}")]
    DataDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dependency probe failed for a reason other than the module being absent.
    #[error("Dependency probe failed for '{package}': {message}")]
    ProbeFailed { package: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BotcheckError {
    /// Whether this error comes from the checklist file rather than the project.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::ConfigRead { .. }
                | Self::ConfigParseError { .. }
                | Self::ConfigValidationError { .. }
        )
    }
}

/// Result type alias for botcheck operations.
pub type Result<T> = std::result::Result<T, BotcheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = BotcheckError::ConfigNotFound {
            path: PathBuf::from("/foo/.botcheck.yml"),
        };
        assert!(err.to_string().contains("/foo/.botcheck.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = BotcheckError::ConfigParseError {
            path: PathBuf::from("/checklist.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/checklist.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_read_is_config_error_with_path() {
        let err = BotcheckError::ConfigRead {
            path: PathBuf::from("/bot/checklist.yml"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "Is a directory"),
        };
        assert!(err.is_config_error());
        let msg = err.to_string();
        assert!(msg.contains("/bot/checklist.yml"));
        assert!(msg.contains("Is a directory"));
    }

    #[test]
    fn data_dir_create_displays_path_and_cause() {
        let err = BotcheckError::DataDirCreate {
            path: PathBuf::from("/ro/data"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/ro/data"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn probe_failed_displays_package_and_message() {
        let err = BotcheckError::ProbeFailed {
            package: "discord".into(),
            message: "exited with status 1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("discord"));
        assert!(msg.contains("status 1"));
    }

    #[test]
    fn config_errors_are_classified() {
        assert!(BotcheckError::ConfigValidationError {
            message: "x".into()
        }
        .is_config_error());
        assert!(!BotcheckError::ProbeFailed {
            package: "x".into(),
            message: "y".into()
        }
        .is_config_error());
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BotcheckError = io_err.into();
        assert!(matches!(err, BotcheckError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let anyhow_err = anyhow::anyhow!("something went wrong");
        let err: BotcheckError = anyhow_err.into();
        assert!(err.to_string().contains("something went wrong"));
    }
}
