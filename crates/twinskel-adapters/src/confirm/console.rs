//! Line-based confirmation over any reader/writer pair.
//!
//! The prompt is written to the writer followed by ` [y/N] `, then one line
//! is read. End of input counts as an empty answer, which declines.

use std::io::{self, BufRead, BufReader, Stderr, Stdin, Write};
use std::sync::Mutex;

use tracing::debug;
use twinskel_core::{
    application::{ApplicationError, ports::Confirmer, ports::is_affirmative},
    error::SkelResult,
};

pub struct ConsoleConfirmer<R, W> {
    io: Mutex<(R, W)>,
}

impl ConsoleConfirmer<BufReader<Stdin>, Stderr> {
    /// Prompt on stderr, read answers from stdin.
    ///
    /// Stderr keeps stdout free for machine-readable output.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stderr())
    }
}

impl<R, W> ConsoleConfirmer<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Mutex::new((reader, writer)),
        }
    }

    /// Give back the reader and writer (testing helper).
    pub fn into_inner(self) -> (R, W) {
        match self.io.into_inner() {
            Ok(io) => io,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<R, W> Confirmer for ConsoleConfirmer<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn confirm(&self, prompt: &str) -> SkelResult<bool> {
        let mut guard = self.io.lock().map_err(|_| ApplicationError::LockPoisoned)?;
        let (reader, writer) = &mut *guard;

        write!(writer, "{prompt} [y/N] ")
            .and_then(|()| writer.flush())
            .map_err(prompt_failed)?;

        // answers may not be UTF-8
        let mut line = Vec::new();
        reader.read_until(b'\n', &mut line).map_err(prompt_failed)?;
        let answer = String::from_utf8_lossy(&line);

        let accepted = is_affirmative(&answer);
        debug!(answer = answer.trim(), accepted, "Confirmation answered");
        Ok(accepted)
    }
}

fn prompt_failed(e: io::Error) -> twinskel_core::error::SkelError {
    ApplicationError::PromptFailed {
        reason: e.to_string(),
    }
    .into()
}
