//! Centralized path definitions for workflow-lint
//!
//! Every path the linter looks at is relative to the corpus root and written
//! with `/` separators.
//!
//! ## Corpus Layout
//!
//! ```text
//! root/
//! ├── CLAUDE.md                   # Root manifest (routes to everything else)
//! ├── .workflow-lint.toml         # Optional linter configuration
//! ├── .claude/
//! │   ├── agents/*.md
//! │   ├── skills/**/*.md
//! │   └── chains/*.md
//! ├── templates/**/*.md
//! ├── docs/**/*.md
//! ├── prompts/*.md
//! └── memory/
//!     ├── constitution.md
//!     └── project-context.md
//! ```

use std::path::{Path, PathBuf};

/// Root manifest filename
pub const MANIFEST_FILE: &str = "CLAUDE.md";

/// Optional configuration filename
pub const CONFIG_FILE: &str = ".workflow-lint.toml";

/// Files that must exist, with the role each plays
pub const REQUIRED_FILES: [(&str, &str); 4] = [
    (MANIFEST_FILE, "Main system configuration"),
    ("memory/constitution.md", "Project constitution"),
    ("memory/project-context.md", "Session state template"),
    (".claude/agents/orchestrator.md", "Central routing agent"),
];

/// Path to the root manifest
#[must_use]
pub fn manifest(root: &Path) -> PathBuf {
    root.join(MANIFEST_FILE)
}

/// Path to the configuration file
#[must_use]
pub fn config_file(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Join a `/`-separated relative path onto `root`
#[must_use]
pub fn join_relative(root: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|part| !part.is_empty())
        .fold(root.to_path_buf(), |path, part| path.join(part))
}

/// Render `path` relative to `root` with `/` separators
///
/// Paths outside `root` are rendered as-is.
#[must_use]
pub fn relative_to(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Find the project root by walking up from `start` to the first directory
/// holding the root manifest
///
/// Falls back to `start` when no ancestor has one.
#[must_use]
pub fn find_project_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| manifest(dir).is_file())
        .unwrap_or(start)
        .to_path_buf()
}
