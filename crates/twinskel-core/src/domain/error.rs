// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// A package segment or file name cannot be used as a path component.
    #[error("Invalid segment '{segment}': {reason}")]
    InvalidSegment { segment: String, reason: String },

    /// A package path was supplied with no segments at all.
    #[error("Package path for {field} has no segments")]
    EmptyPackagePath { field: &'static str },
}

impl DomainError {
    pub(crate) fn invalid_segment(segment: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSegment {
            segment: segment.into(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidSegment { segment, reason } => vec![
                format!("'{}' was rejected: {}", segment, reason),
                "Segments must be non-empty and must not contain '/' or '\\'".into(),
                "Pass package segments separated by commas: --base-package com,example".into(),
            ],
            Self::EmptyPackagePath { field } => vec![
                format!("Provide at least one segment for {}", field),
                "Example: --app-package app".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidSegment { .. } | Self::EmptyPackagePath { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}
