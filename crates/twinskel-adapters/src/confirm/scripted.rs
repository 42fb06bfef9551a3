//! Pre-recorded answers for tests and non-interactive runs.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use twinskel_core::{
    application::{ApplicationError, ports::Confirmer, ports::is_affirmative},
    error::SkelResult,
};

/// Answers prompts from a fixed script and records every prompt it saw.
///
/// Once the script runs out every further prompt is declined.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConfirmer {
    inner: Arc<Mutex<ScriptState>>,
}

#[derive(Debug, Default)]
struct ScriptState {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedConfirmer {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner: Arc::new(Mutex::new(ScriptState {
                answers: answers.into_iter().map(Into::into).collect(),
                prompts: Vec::new(),
            })),
        }
    }

    /// Answer "n" to everything.
    pub fn always_decline() -> Self {
        Self::default()
    }

    /// Prompts asked so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|state| state.prompts.clone())
            .unwrap_or_default()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, prompt: &str) -> SkelResult<bool> {
        let mut state = self
            .inner
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        state.prompts.push(prompt.to_owned());
        let answer = state.answers.pop_front().unwrap_or_default();
        Ok(is_affirmative(&answer))
    }
}
