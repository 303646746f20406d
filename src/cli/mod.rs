//! CLI entrypoint module structure.
pub mod args;
pub mod profile;

pub use args::LaunchArgs;
pub use profile::{resolve_root, LaunchProfile, DEFAULT_BUILD_TAGS, DEFAULT_ENTRY_POINT};
