//! Entry point for devserve.
use std::process::ExitCode;

use clap::Parser;
use devserve::{cli::LaunchArgs, runner::RunnerExit, telemetry, workflow};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(()) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), RunnerExit> {
    telemetry::init_tracing().map_err(RunnerExit::from_error)?;
    let args = LaunchArgs::parse();
    let profile = args.into_profile().map_err(RunnerExit::from_error)?;
    workflow::run(&profile)
}
