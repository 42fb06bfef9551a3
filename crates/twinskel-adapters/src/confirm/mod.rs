//! Confirmation adapters.

mod console;
mod scripted;

pub use console::ConsoleConfirmer;
pub use scripted::ScriptedConfirmer;
