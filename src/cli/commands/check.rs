//! Lint a project

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use log::debug;
use workflow_lint::lint;
use workflow_lint::output::{LintResult, OutputMode, RenderOptions};

use super::resolve_root;

/// Lint the project and render the report
///
/// Exit code 1 when the report has errors; tool failures bubble up as `Err`.
pub fn check(
    project_root: Option<&Path>,
    mode: OutputMode,
    options: RenderOptions,
) -> anyhow::Result<ExitCode> {
    let root = resolve_root(project_root)?;
    debug!("linting {}", root.display());

    let report =
        lint(&root).with_context(|| format!("could not lint project at {}", root.display()))?;

    LintResult::new(&report, &root).render(mode, options)?;

    if report.has_errors() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
