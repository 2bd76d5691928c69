//! General commands - backend diagnostics.

use crate::{
    cli::{CommandOutput, Desk},
    errors::Result,
    panels::Outcome,
};
use tracing::warn;

const CHECK_FAILED: &str = "Backend check failed";

/// Calls the backend's diagnostic endpoint and pretty-prints its answer.
pub async fn check(desk: &Desk) -> CommandOutput {
    let rendered: Result<String> = match desk.backend.check().await {
        Ok(report) => serde_json::to_string_pretty(&report).map_err(Into::into),
        Err(e) => Err(e),
    };

    match rendered {
        Ok(text) => CommandOutput::new(format!("{text}\n"), None, Outcome::Done),
        Err(e) => {
            warn!("{CHECK_FAILED}: {e}");
            CommandOutput::new(
                String::new(),
                Some(&e.panel_message(CHECK_FAILED)),
                Outcome::Failed,
            )
        }
    }
}
