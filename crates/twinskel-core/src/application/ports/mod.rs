//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `twinskel-adapters` and the CLI
//! implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory and file creation
//!   - `Confirmer`: Yes/no questions in confirm mode
//!   - `ActionReporter`: Verbose and what-if notices
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (`ScaffoldService` is called directly by the CLI)

pub mod output;

pub use output::{ActionReporter, Confirmer, Filesystem, is_affirmative};

#[cfg(test)]
pub use output::{MockActionReporter, MockConfirmer, MockFilesystem};
