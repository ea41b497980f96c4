// src/commands.rs

use crate::error::{Result, TailError};
use crate::models::{Outcome, TailPaths, TAIL_LINES};
use crate::tail;
use tracing::{debug, error, info, warn};

/// Copies the last lines of the source log into the output file.
///
/// Any failure on that path is recorded in the output file instead and the
/// run still succeeds. Only a failure to record it is returned.
pub fn handle_run(paths: &TailPaths) -> Result<Outcome> {
    debug!(source = %paths.source.display(), output = %paths.output.display(), "tailing log");

    match copy_tail(paths) {
        Ok(lines) => {
            info!(lines, output = %paths.output.display(), "tail written");
            Ok(Outcome::Tailed { lines })
        }
        Err(e) => {
            let message = e.to_string();
            warn!(error = %message, "tail failed, recording error instead");
            record_failure(paths, message)
        }
    }
}

fn copy_tail(paths: &TailPaths) -> Result<usize> {
    let lines = tail::read_tail(&paths.source, TAIL_LINES)?;
    debug!(count = lines.len(), "read tail");
    tail::replace_contents(&paths.output, &lines.concat())?;
    Ok(lines.len())
}

fn record_failure(paths: &TailPaths, message: String) -> Result<Outcome> {
    if let Err(e) = tail::replace_contents(&paths.output, &message) {
        error!(error = %e, "could not record failure");
        return Err(TailError::Fallback {
            path: paths.output.clone(),
            source: Box::new(e),
        });
    }
    Ok(Outcome::Recorded { message })
}
