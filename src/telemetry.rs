//! Tracing initialization and launcher step span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` and format developer logs.
///
/// The launcher stays quiet by default so the echoed command lines and the
/// subprocess output remain the only thing on screen; `RUST_LOG=info` turns
/// on per-step telemetry.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of one launcher step.
pub struct StepSpan {
    span: Span,
    started_at: Instant,
}

impl StepSpan {
    /// Start a span for an echoed command.
    pub fn start(command: &str) -> Self {
        let span = info_span!(
            target: "devserve::runner",
            "launcher_step",
            command = %command
        );
        Self {
            span,
            started_at: Instant::now(),
        }
    }

    /// Close the span while recording status and exit code.
    pub fn finish(self, status: &'static str, exit_code: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "devserve::runner",
            status = status,
            exit_code = exit_code,
            elapsed_ms = elapsed_ms,
            "Completed launcher step"
        );
    }
}
