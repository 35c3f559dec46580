//! Finding severity levels
//!
//! Defines how a finding affects the outcome of a lint run.

use serde::{Deserialize, Serialize};

/// Finding severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Broken structural reference - fails the run
    Error,
    /// Heuristic or soft-reference mismatch - shown, doesn't fail
    Warning,
    /// Advisory note
    Info,
}

impl Severity {
    /// Whether findings of this severity fail the run
    #[must_use]
    pub const fn is_blocking(self) -> bool {
        matches!(self, Self::Error)
    }
}
