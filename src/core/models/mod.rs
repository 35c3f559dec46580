//! Domain models for workflow-lint
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`CollectionKind`] - The role a document plays (agent, skill, ...)
//! - [`Reference`] - "This line mentions that document"
//! - [`Finding`] - "This document has this problem"
//! - [`Report`] - All findings of one run
//! - [`Severity`] - How a finding affects the run

mod collection;
mod finding;
mod reference;
mod report;
mod severity;

pub use collection::CollectionKind;
pub use finding::{Finding, PROJECT_SCOPE};
pub use reference::{PatternKind, Reference};
pub use report::Report;
pub use severity::Severity;
