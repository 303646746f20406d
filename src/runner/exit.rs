//! Conversion of launch failures into the process exit code.
use std::process::ExitCode;

use anyhow::Error;

use super::StepError;

/// Bundles a launch failure message with the process exit code.
#[derive(Debug)]
pub struct RunnerExit {
    message: String,
    exit_code: ExitCode,
}

impl RunnerExit {
    /// Propagate a failed step's exact exit code to the invoking shell.
    pub fn from_step(err: StepError) -> Self {
        Self {
            message: err.to_string(),
            exit_code: ExitCode::from(exit_code_byte(err.exit_code())),
        }
    }

    /// Wrap a setup-path error (CLI resolution, tracing init) as exit code 1.
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }
}

/// Clamp a child exit code to the 8-bit range the platform can report.
fn exit_code_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}
