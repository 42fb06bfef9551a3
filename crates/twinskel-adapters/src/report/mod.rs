//! Reporter adapters.

use std::sync::{Arc, Mutex};

use twinskel_core::{
    application::{ApplicationError, ports::ActionReporter},
    domain::ScaffoldAction,
    error::SkelResult,
};

/// Kind of notice a reporter received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Describe,
    Simulate,
}

/// Keeps every notice in memory for inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    notices: Arc<Mutex<Vec<(Notice, ScaffoldAction)>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<(Notice, ScaffoldAction)> {
        self.notices
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    pub fn count(&self, kind: Notice) -> usize {
        self.notices().iter().filter(|(n, _)| *n == kind).count()
    }

    fn push(&self, kind: Notice, action: &ScaffoldAction) -> SkelResult<()> {
        self.notices
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?
            .push((kind, action.clone()));
        Ok(())
    }
}

impl ActionReporter for RecordingReporter {
    fn describe(&self, action: &ScaffoldAction) -> SkelResult<()> {
        self.push(Notice::Describe, action)
    }

    fn simulate(&self, action: &ScaffoldAction) -> SkelResult<()> {
        self.push(Notice::Simulate, action)
    }
}
