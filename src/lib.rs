//! Library crate root re-exporting launcher modules.

pub mod cli;
pub mod runner;
pub mod telemetry;
pub mod toolchain;
pub mod workflow;
