//! Shell-backed command runner with fail-fast semantics.
use std::{
    path::PathBuf,
    process::{Command, ExitStatus, Stdio},
};

use crate::telemetry::StepSpan;

use super::StepError;

/// Executes one shell command and reports any failure as `StepError`.
pub trait CommandRunner {
    fn run(&mut self, command: &str) -> Result<(), StepError>;
}

/// Production runner: echoes the command and executes it via the host shell.
pub struct ShellRunner {
    root: PathBuf,
}

impl ShellRunner {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&mut self, command: &str) -> Result<(), StepError> {
        println!("→ {command}");

        let span = StepSpan::start(command);
        let status = shell_command(command)
            .current_dir(&self.root)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| StepError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if status.success() {
            span.finish("succeeded", Some(0));
            return Ok(());
        }

        let code = exit_code_of(&status);
        span.finish("failed", Some(code));
        Err(StepError::Failed {
            command: command.to_string(),
            code,
        })
    }
}

#[cfg(unix)]
fn shell_command(command: &str) -> Command {
    let mut shell = Command::new("sh");
    shell.arg("-c").arg(command);
    shell
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut shell = Command::new("cmd");
    shell.arg("/C").arg(command);
    shell
}

#[cfg(unix)]
fn exit_code_of(status: &ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    match status.code() {
        Some(code) => code,
        // Terminated by a signal: surface the conventional 128+N code.
        None => 128 + status.signal().unwrap_or(0),
    }
}

#[cfg(not(unix))]
fn exit_code_of(status: &ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
