//! `LaunchProfile` and working-directory resolution.
use std::{env, path::PathBuf};

use anyhow::{bail, Context, Result};

/// Default Swagger annotation entry file, matching the backend layout.
pub const DEFAULT_ENTRY_POINT: &str = "cmd/server/main.go";
/// Default Go build tags for the server launch.
pub const DEFAULT_BUILD_TAGS: &str = "debug";

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub root: PathBuf,
    pub entry: PathBuf,
    pub tags: String,
}

/// Resolve the working directory in the order: CLI override → current directory.
pub fn resolve_root(override_root: Option<PathBuf>) -> Result<PathBuf> {
    let root = match override_root {
        Some(path) => path,
        None => env::current_dir().context("failed to obtain current directory")?,
    };

    if !root.is_dir() {
        bail!("--root is not a directory: {}", root.display());
    }
    Ok(root)
}
