//! Failure types for launcher steps.
use std::io;

use thiserror::Error;

/// Failure of a single launcher step.
#[derive(Debug, Error)]
pub enum StepError {
    /// The command ran and exited non-zero.
    #[error("`{command}` exited with status {code}")]
    Failed { command: String, code: i32 },
    /// The host shell could not be spawned at all.
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

impl StepError {
    /// Exit code to surface to the invoking shell.
    pub fn exit_code(&self) -> i32 {
        match self {
            StepError::Failed { code, .. } => *code,
            StepError::Spawn { .. } => 1,
        }
    }
}
