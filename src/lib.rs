//! workflow-lint - A CLI tool that checks cross-references between agent,
//! skill, chain and template documents
//!
//! This library discovers the markdown documents of a workflow project,
//! extracts every reference one document makes to another, confirms that each
//! target exists, and checks that definitions carry their recommended
//! sections. The result is an ordered, severity-classified [`Report`].
//!
//! [`Report`]: core::models::Report

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
    clippy::missing_panics_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod corpus;
pub mod linter;
pub mod output;
pub mod paths;
pub mod rules;

pub use linter::{LintError, Linter, lint};
