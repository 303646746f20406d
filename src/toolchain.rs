//! Executable search-path lookup for external tools.

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Check whether `tool` resolves to an executable on the search path.
pub fn is_tool_available(tool: &str) -> bool {
    find_in_path(tool, env::var_os("PATH")).is_some()
}

/// Scan a `PATH`-style search string for an executable named `tool`.
pub fn find_in_path(tool: &str, path_var: Option<OsString>) -> Option<PathBuf> {
    let path_var = path_var?;
    for dir in env::split_paths(&path_var) {
        if dir.as_os_str().is_empty() {
            continue;
        }
        for name in candidate_names(tool) {
            let candidate = dir.join(name);
            if is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(unix)]
fn candidate_names(tool: &str) -> Vec<String> {
    vec![tool.to_string()]
}

#[cfg(windows)]
fn candidate_names(tool: &str) -> Vec<String> {
    // PATHEXT is richer in practice; these cover Go-installed tools.
    ["exe", "bat", "cmd"]
        .iter()
        .map(|ext| format!("{tool}.{ext}"))
        .collect()
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(windows)]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
