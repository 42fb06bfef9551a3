//! Command handlers.  Each translates parsed arguments into calls on core
//! services and renders the result; no business logic lives here.

pub mod completions;
pub mod init;
pub mod scaffold;
