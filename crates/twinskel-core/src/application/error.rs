//! Application layer errors.
//!
//! These errors represent failures while executing a plan, not invalid
//! input. Input errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ExecutionReport;
use crate::error::ErrorCategory;

/// Errors that occur during scaffold execution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A filesystem adapter could not complete an operation.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An action failed and the remaining actions were abandoned.
    ///
    /// `report` holds every outcome up to and including the failure.
    #[error("Failed to create {label} at {path}: {reason}")]
    ActionFailed {
        label: &'static str,
        path: PathBuf,
        reason: String,
        report: Box<ExecutionReport>,
    },

    /// The confirmation prompt could not be shown or answered.
    #[error("Confirmation prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// Adapter state was poisoned by a panicking thread.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } | Self::ActionFailed { path, .. } => vec![
                format!("Failed to create: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check that no file is in the way of a directory to be created".into(),
                "Actions completed before the failure were kept; re-running is safe".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Confirmation needs an interactive terminal on stdin".into(),
                "Run without --confirm, or pipe answers (y/n, one per line)".into(),
            ],
            Self::LockPoisoned => vec!["This is likely a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::ActionFailed { .. } => ErrorCategory::Filesystem,
            Self::PromptFailed { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }

    /// The partial report carried by [`ApplicationError::ActionFailed`].
    pub fn report(&self) -> Option<&ExecutionReport> {
        match self {
            Self::ActionFailed { report, .. } => Some(report.as_ref()),
            _ => None,
        }
    }
}
