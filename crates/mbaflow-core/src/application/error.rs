//! Application layer errors.
//!
//! These errors represent failures in orchestration and at the ports, not
//! domain rules. Domain errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The folder chosen to hold the project does not exist.
    #[error("Target folder does not exist: {path}")]
    TargetFolderMissing { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// In-memory adapter state was poisoned by a panicking writer.
    #[error("Filesystem state lock poisoned")]
    LockPoisoned,

    /// The external editor could not be started or exited unsuccessfully.
    #[error("Could not open editor '{command}': {reason}")]
    EditorLaunchFailed { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TargetFolderMissing { path } => vec![
                format!("'{}' was not found", path.display()),
                "Pick one of the listed folders or create the folder first".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Folders created before the failure were left in place".into(),
            ],
            Self::LockPoisoned => vec!["Internal state was corrupted; try again".into()],
            Self::EditorLaunchFailed { command, .. } => vec![
                format!("Ensure '{command}' is installed and on your PATH"),
                "Open the project folder manually".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TargetFolderMissing { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
            Self::EditorLaunchFailed { .. } => ErrorCategory::External,
        }
    }
}
