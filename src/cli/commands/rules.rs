//! List lint rules

use std::path::Path;
use std::process::ExitCode;

use serde::Serialize;
use workflow_lint::config::LintConfig;
use workflow_lint::output::OutputMode;
use workflow_lint::rules::default_rules;

use super::resolve_root;

#[derive(Debug, Serialize)]
struct RuleInfo {
    name: &'static str,
    description: &'static str,
    enabled: bool,
}

/// Print every rule in execution order, marking the ones the config disables
pub fn rules(project_root: Option<&Path>, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let root = resolve_root(project_root)?;
    let config = LintConfig::load(&root)?;

    let infos: Vec<_> = default_rules(&config.names.filter())
        .iter()
        .map(|rule| RuleInfo {
            name: rule.name(),
            description: rule.description(),
            enabled: !config.is_disabled(rule.name()),
        })
        .collect();

    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&infos)?),
        OutputMode::Human => {
            for info in &infos {
                let state = if info.enabled { "" } else { " (disabled)" };
                println!("  {:<22}{}{state}", info.name, info.description);
            }
        },
    }
    Ok(ExitCode::SUCCESS)
}
