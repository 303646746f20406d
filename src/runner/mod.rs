//! Command execution with fail-fast semantics.
mod errors;
mod exit;
mod shell;

pub use errors::StepError;
pub use exit::RunnerExit;
pub use shell::{CommandRunner, ShellRunner};
