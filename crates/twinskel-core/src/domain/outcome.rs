//! Per-action outcomes and the execution report.

use std::fmt;

use serde::Serialize;

use crate::domain::plan::ScaffoldAction;

/// Why an action was not performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// What-if mode: reported, never performed.
    Simulated,
    /// Confirm mode: the answer was not affirmative.
    Declined,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simulated => f.write_str("what-if"),
            Self::Declined => f.write_str("declined"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum ActionStatus {
    Created,
    Skipped(SkipReason),
    Failed(String),
}

impl ActionStatus {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutcome {
    pub action: ScaffoldAction,
    pub status: ActionStatus,
}

/// Ordered outcomes of one scaffold run.
///
/// A report attached to a failure ends with the `Failed` outcome; actions
/// after it were never attempted and do not appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionReport {
    outcomes: Vec<ActionOutcome>,
}

impl ExecutionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, action: ScaffoldAction, status: ActionStatus) {
        self.outcomes.push(ActionOutcome { action, status });
    }

    pub fn outcomes(&self) -> &[ActionOutcome] {
        &self.outcomes
    }

    pub fn statuses(&self) -> impl Iterator<Item = &ActionStatus> {
        self.outcomes.iter().map(|o| &o.status)
    }

    pub fn created_count(&self) -> usize {
        self.statuses().filter(|s| s.is_created()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.statuses().filter(|s| s.is_skipped()).count()
    }

    pub fn failure(&self) -> Option<&ActionOutcome> {
        self.outcomes.iter().find(|o| o.status.is_failed())
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
