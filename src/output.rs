//! Output formatting for human and JSON modes
//!
//! This module renders a [`Report`] either as grouped, human-readable text
//! or as machine-parseable JSON.

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Finding, Report, Severity};

const RULE: &str = "============================================================";

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// What the human renderer shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Show warnings and info findings, not just errors
    pub verbose: bool,
    /// Show a fix suggestion under each finding
    pub suggestions: bool,
}

/// Serializable summary of a lint run
#[derive(Debug, Serialize)]
pub struct LintResult<'a> {
    /// Whether the run passed (no errors)
    pub passed: bool,
    /// Project root that was linted
    pub root: String,
    /// Number of documents scanned
    pub files_checked: usize,
    /// Number of errors
    pub errors: usize,
    /// Number of warnings
    pub warnings: usize,
    /// Number of info findings
    pub infos: usize,
    /// Every finding, in report order
    pub findings: &'a [Finding],
}

impl<'a> LintResult<'a> {
    /// Summarize a report
    #[must_use]
    pub fn new(report: &'a Report, root: &Path) -> Self {
        Self {
            passed: !report.has_errors(),
            root: root.display().to_string(),
            files_checked: report.files_checked,
            errors: report.error_count(),
            warnings: report.warning_count(),
            infos: report.info_count(),
            findings: report.findings(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode, options: RenderOptions) -> serde_json::Result<()> {
        match mode {
            OutputMode::Human => println!("{}", format_human(self, options)),
            OutputMode::Json => println!("{}", format_json(self)?),
        }
        Ok(())
    }
}

/// Pretty-printed JSON for a lint result
pub fn format_json(result: &LintResult<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// Grouped text report: errors, then (when verbose) warnings and info, then a summary
#[must_use]
pub fn format_human(result: &LintResult<'_>, options: RenderOptions) -> String {
    let mut lines = vec![format!("Linting project at: {}", result.root), "-".repeat(RULE.len())];

    if result.findings.is_empty() {
        lines.push(format!("{} All checks passed!", "✓".green()));
        lines.push(format!("  Files checked: {}", result.files_checked));
        return lines.join("\n");
    }

    push_section(&mut lines, result.findings, Severity::Error, options);
    if options.verbose {
        push_section(&mut lines, result.findings, Severity::Warning, options);
        push_section(&mut lines, result.findings, Severity::Info, options);
    }

    lines.push(String::new());
    lines.push(RULE.to_string());
    lines.push("SUMMARY".bold().to_string());
    lines.push(RULE.to_string());
    lines.push(format!("  Files checked: {}", result.files_checked));
    lines.push(format!("  Errors:   {}", result.errors));
    lines.push(format!("  Warnings: {}", result.warnings));
    if !options.verbose && result.warnings > 0 {
        lines.push(String::new());
        lines.push("  Run with --verbose to see warnings".to_string());
    }
    lines.join("\n")
}

fn push_section(
    lines: &mut Vec<String>,
    findings: &[Finding],
    severity: Severity,
    options: RenderOptions,
) {
    let selected: Vec<_> = findings.iter().filter(|f| f.severity == severity).collect();
    if selected.is_empty() {
        return;
    }

    let (title, marker) = match severity {
        Severity::Error => ("ERRORS", "✗".red()),
        Severity::Warning => ("WARNINGS", "⚠".yellow()),
        Severity::Info => ("INFO", "ℹ".blue()),
    };
    let heading = format!("{title} ({})", selected.len());
    let heading = match severity {
        Severity::Error => heading.red().bold(),
        Severity::Warning => heading.yellow().bold(),
        Severity::Info => heading.blue().bold(),
    };

    lines.push(String::new());
    lines.push(RULE.to_string());
    lines.push(heading.to_string());
    lines.push(RULE.to_string());
    for finding in selected {
        lines.push(String::new());
        lines.push(format!("  {marker} {}", finding.location()));
        lines.push(format!("    {}", finding.message));
        if options.suggestions {
            if let Some(suggestion) = &finding.suggestion {
                lines.push(format!("    → {suggestion}"));
            }
        }
    }
}
