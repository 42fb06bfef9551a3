//! Application services - orchestrate use cases.
//!
//! Services sequence the domain plan through the ports to accomplish
//! the "scaffold a two-module project" use case.

pub mod scaffold_service;

pub use scaffold_service::ScaffoldService;
