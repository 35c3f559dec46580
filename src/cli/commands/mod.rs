//! Command implementations

mod check;
mod rules;

pub use check::check;
pub use rules::rules;

use std::path::{Path, PathBuf};

use workflow_lint::paths;

/// Explicit `--project-root`, or the nearest ancestor holding the manifest
fn resolve_root(project_root: Option<&Path>) -> anyhow::Result<PathBuf> {
    match project_root {
        Some(root) => Ok(root.to_path_buf()),
        None => Ok(paths::find_project_root(&std::env::current_dir()?)),
    }
}
