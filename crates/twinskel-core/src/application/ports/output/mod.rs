//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `twinskel-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::ScaffoldAction;
use crate::error::SkelResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `twinskel_adapters::filesystem::LocalFilesystem` (production)
/// - `twinskel_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parents. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> SkelResult<()>;

    /// Write content to a file, truncating any previous content.
    ///
    /// Must fail if the parent directory does not exist.
    fn write_file(&self, path: &Path, content: &str) -> SkelResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for per-action confirmation.
///
/// Implemented by:
/// - `twinskel_adapters::confirm::ConsoleConfirmer` (reads a line of input)
/// - `twinskel_adapters::confirm::ScriptedConfirmer` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Confirmer: Send + Sync {
    /// Ask `prompt` and return `true` only for an affirmative answer.
    fn confirm(&self, prompt: &str) -> SkelResult<bool>;
}

/// Port for the notices emitted while executing a plan.
///
/// Implemented by:
/// - `twinskel_cli::output::ConsoleReporter` (stderr)
/// - `twinskel_adapters::report::RecordingReporter` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ActionReporter: Send + Sync {
    /// Verbose mode: describe the action about to be processed.
    fn describe(&self, action: &ScaffoldAction) -> SkelResult<()>;

    /// What-if mode: announce the action that would have been performed.
    fn simulate(&self, action: &ScaffoldAction) -> SkelResult<()>;
}

/// Only `y` or `Y` is an answer of yes. Surrounding whitespace is ignored;
/// anything else, including an empty answer, is no.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y")
}
