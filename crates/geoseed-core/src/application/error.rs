//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Recursive directory traversal failed.
    #[error("directory walk failed under {path}: {reason}")]
    WalkFailed { path: PathBuf, reason: String },

    /// The scan root does not exist.
    #[error("scan root not found: {path}")]
    ScanRootNotFound { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::WalkFailed { path, .. } => vec![
                format!("Traversal stopped under: {}", path.display()),
                "Check directory read permissions".into(),
            ],
            Self::ScanRootNotFound { path } => vec![
                format!("No such directory: {}", path.display()),
                "Pass an existing workspace directory to scan".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::WalkFailed { .. } => ErrorCategory::Internal,
            Self::ScanRootNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}
