//! workflow-lint - A CLI tool that checks cross-references between agent,
//! skill, chain and template documents
//!
//! Exit codes: 0 when no errors were found, 1 when the report has errors,
//! 2 when the tool itself failed (missing root, unreadable corpus, bad config).

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

use std::process::ExitCode;

mod cli;

/// Exit status for tool-level failures, distinct from lint failures
const TOOL_FAILURE: u8 = 2;

/// Main entry point for the workflow-lint CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(TOOL_FAILURE)
        },
    }
}
