//! Confirmation prompts guarding destructive actions.

use std::io::{self, BufRead, Write};
use tracing::warn;

/// Asks the user to confirm an action
pub trait Confirm {
    /// Returns `true` if the user agreed to `prompt`.
    fn confirm(&self, prompt: &str) -> bool;
}

/// Agrees to everything, for `--yes` and scripted use
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Asks on stderr and reads the answer from stdin. Only `y` / `yes` agree.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        let mut stderr = io::stderr();
        if write!(stderr, "{prompt} [y/N] ")
            .and_then(|()| stderr.flush())
            .is_err()
        {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                warn!("Could not read confirmation: {e}");
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
