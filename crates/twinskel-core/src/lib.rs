//! twinskel Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the twinskel
//! skeleton generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          twinskel-cli (CLI)             │
//! │     (Parses flags, renders output)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! │      Plans and executes the skeleton    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Filesystem, Confirmer, Report) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    twinskel-adapters (Infrastructure)   │
//! │ (LocalFilesystem, ConsoleConfirmer, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (PackagePath, ScaffoldPlan, Outcomes)   │
//! │             No I/O                      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use twinskel_core::prelude::*;
//!
//! # fn run(
//! #     filesystem: Box<dyn Filesystem>,
//! #     confirmer: Box<dyn Confirmer>,
//! #     reporter: Box<dyn ActionReporter>,
//! # ) -> SkelResult<()> {
//! // 1. Describe the skeleton
//! let config = ScaffoldConfig::builder()
//!     .base_package(PackagePath::new(["org", "example"])?)
//!     .what_if(true)
//!     .build()?;
//!
//! // 2. Use application service (with injected adapters)
//! let service = ScaffoldService::new(filesystem, confirmer, reporter);
//! let report = service.scaffold(&config)?;
//! assert_eq!(report.skipped_count(), 4);
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService,
        ports::{ActionReporter, Confirmer, Filesystem},
    };
    pub use crate::domain::{
        ActionKind, ActionStatus, ExecutionFlags, ExecutionReport, PackagePath, ScaffoldAction,
        ScaffoldConfig, ScaffoldPlan, ScaffoldPlanner, SkipReason, join_segments,
    };
    pub use crate::error::{SkelError, SkelResult};
}
