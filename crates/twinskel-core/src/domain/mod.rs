// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for twinskel.
//!
//! This module contains pure logic with no I/O. Filesystem access, console
//! prompts and reporting are handled via ports (traits) defined in the
//! application layer.
//!
//! - **PathBuilder**: [`join_segments`] turns segment lists into paths
//! - **ScaffoldPlanner**: [`ScaffoldPlanner::plan`] computes the four targets
//! - **Outcomes**: [`ExecutionReport`] records what happened to each action
//!
// Public API - what the world sees
pub mod config;
pub mod error;
pub mod outcome;
pub mod package_path;
pub mod plan;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use config::{ExecutionFlags, ExecutionMode, ScaffoldConfig, ScaffoldConfigBuilder};
pub use error::{DomainError, ErrorCategory};
pub use outcome::{ActionOutcome, ActionStatus, ExecutionReport, SkipReason};
pub use package_path::{PackagePath, join_segments, validate_segment};
pub use plan::{ActionKind, ScaffoldAction, ScaffoldPlan, ScaffoldPlanner};

pub use validation::DomainValidator;
