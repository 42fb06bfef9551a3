//! Infrastructure adapters for twinskel.
//!
//! This crate implements the ports defined in `twinskel-core::application::ports`.
//! It contains the I/O operations the core never performs itself.

pub mod confirm;
pub mod filesystem;
pub mod report;

// Re-export commonly used adapters
pub use confirm::{ConsoleConfirmer, ScriptedConfirmer};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use report::RecordingReporter;
