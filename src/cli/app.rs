//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use super::commands;
use workflow_lint::output::{OutputMode, RenderOptions};

/// workflow-lint - Cross-reference checks for agent workflow projects
#[derive(Parser, Debug)]
#[command(
    name = "workflow-lint",
    version,
    about = "Validate internal consistency of an agent workflow project",
    long_about = "Check that agents, skills, chains, templates and docs reference each other correctly.\n\n\
                  Broken path references are errors and fail the run.\n\
                  Unresolved bare names, doc links and missing sections are warnings."
)]
pub struct Cli {
    /// Show warnings and info messages (not just errors)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Show suggestions for how to fix issues
    #[arg(short = 'f', long, global = true)]
    pub fix_suggestions: bool,

    /// Path to the project root (default: auto-detect from CLAUDE.md)
    #[arg(short = 'p', long, global = true)]
    pub project_root: Option<PathBuf>,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lint the project (default)
    Check,

    /// List the rules and whether the config enables them
    Rules,

    /// Show version
    Version,
}

/// Run the CLI, returning the process exit code
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let options = RenderOptions {
        verbose: cli.verbose,
        suggestions: cli.fix_suggestions,
    };

    match cli.command {
        None | Some(Command::Check) => {
            commands::check(cli.project_root.as_deref(), output_mode, options)
        },
        Some(Command::Rules) => commands::rules(cli.project_root.as_deref(), output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("workflow-lint v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
