//! Report model
//!
//! The ordered, append-only result of one lint run.

use serde::{Deserialize, Serialize};

use super::{Finding, Severity};

/// All findings of a run plus the number of documents scanned
///
/// Findings keep insertion order (rule execution order). Nothing is ever
/// removed, reordered or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Number of documents scanned (all collections plus the manifest)
    pub files_checked: usize,
    findings: Vec<Finding>,
}

impl Report {
    /// Create an empty report for a corpus of `files_checked` documents
    #[must_use]
    pub const fn new(files_checked: usize) -> Self {
        Self {
            files_checked,
            findings: Vec::new(),
        }
    }

    /// Append one finding
    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Append findings in the order given
    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.findings.extend(findings);
    }

    /// All findings in insertion order
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Findings of one severity, in insertion order
    pub fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }

    /// Total number of findings
    #[must_use]
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Whether there are no findings at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Number of findings with the given severity
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.by_severity(severity).count()
    }

    /// Number of errors
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Number of warnings
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Number of info findings
    #[must_use]
    pub fn info_count(&self) -> usize {
        self.count(Severity::Info)
    }

    /// True iff at least one blocking (error) finding is present
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity.is_blocking())
    }
}
