//! Finding model
//!
//! A finding says: "this document has this problem, here."

use serde::{Deserialize, Serialize};

use super::Severity;

/// File identity used for findings that concern the project as a whole
pub const PROJECT_SCOPE: &str = ".";

/// One reported issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// How the finding affects the run
    pub severity: Severity,

    /// Source document, relative to the corpus root (`.` for project-level findings)
    pub file: String,

    /// 1-based line number, when the finding is tied to a line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,

    /// What is wrong
    pub message: String,

    /// How to fix it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Finding {
    /// Create a finding without a suggestion
    pub fn new(
        severity: Severity,
        file: impl Into<String>,
        line: Option<usize>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            file: file.into(),
            line,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Create an error finding
    pub fn error(file: impl Into<String>, line: Option<usize>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, file, line, message)
    }

    /// Create a warning finding
    pub fn warning(
        file: impl Into<String>,
        line: Option<usize>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Warning, file, line, message)
    }

    /// Create an info finding
    pub fn info(file: impl Into<String>, line: Option<usize>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, file, line, message)
    }

    /// Attach a remediation suggestion
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Location as `file:line`, or just `file` for file-level findings
    #[must_use]
    pub fn location(&self) -> String {
        match self.line {
            Some(line) => format!("{}:{line}", self.file),
            None => self.file.clone(),
        }
    }
}
