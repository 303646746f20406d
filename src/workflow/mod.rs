//! The linear launch sequence: presence check → install → docs → server.

use tracing::info;

use crate::{
    cli::LaunchProfile,
    runner::{CommandRunner, RunnerExit, ShellRunner, StepError},
    toolchain::is_tool_available,
};

/// Documentation generator expected on the search path.
pub const DOC_TOOL: &str = "swag";
/// `go install` target used when the generator is absent.
pub const DOC_TOOL_PACKAGE: &str = "github.com/swaggo/swag/cmd/swag@latest";

/// Run the full launch sequence, converting the first failure into an exit.
pub fn run(profile: &LaunchProfile) -> Result<(), RunnerExit> {
    let mut runner = ShellRunner::new(profile.root.clone());
    run_with(profile, &mut runner, is_tool_available(DOC_TOOL)).map_err(RunnerExit::from_step)
}

/// Launch sequence over an injected runner.
///
/// `doc_tool_present` is the result of the one-shot presence check performed
/// before any command is issued. Each step goes through the runner; the first
/// failure halts all subsequent steps.
fn run_with(
    profile: &LaunchProfile,
    runner: &mut impl CommandRunner,
    doc_tool_present: bool,
) -> Result<(), StepError> {
    if !doc_tool_present {
        println!("Installing {DOC_TOOL} (requires Go to be in PATH)...");
        info!(
            target: "devserve::workflow",
            tool = DOC_TOOL,
            "Doc generator not on PATH; installing"
        );
        runner.run(&install_command())?;
    }

    runner.run(&generate_docs_command(profile))?;
    runner.run(&run_server_command(profile))?;
    Ok(())
}

fn install_command() -> String {
    format!("go install {DOC_TOOL_PACKAGE}")
}

fn generate_docs_command(profile: &LaunchProfile) -> String {
    format!("{DOC_TOOL} init -g {}", profile.entry.display())
}

fn run_server_command(profile: &LaunchProfile) -> String {
    format!("go run -tags={} {}", profile.tags, profile.entry.display())
}
