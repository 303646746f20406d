//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{resolve_root, LaunchProfile, DEFAULT_BUILD_TAGS, DEFAULT_ENTRY_POINT};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Regenerate Swagger docs and launch the backend server",
    long_about = None
)]
pub struct LaunchArgs {
    /// Directory to run commands in (defaults to the current directory).
    #[arg(long = "root")]
    pub root_override: Option<PathBuf>,
    /// Swagger annotation entry file passed to `swag init -g` and `go run`.
    #[arg(long, default_value = DEFAULT_ENTRY_POINT)]
    pub entry: PathBuf,
    /// Go build tags for the server launch.
    #[arg(long, default_value = DEFAULT_BUILD_TAGS)]
    pub tags: String,
}

impl LaunchArgs {
    /// Build a `LaunchProfile` from CLI args.
    pub fn into_profile(self) -> Result<LaunchProfile> {
        let root = resolve_root(self.root_override)?;

        Ok(LaunchProfile {
            root,
            entry: self.entry,
            tags: self.tags,
        })
    }
}
