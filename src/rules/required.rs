//! Required-file check

use crate::core::models::{Finding, PROJECT_SCOPE};
use crate::corpus::{Corpus, CorpusError};
use crate::paths::REQUIRED_FILES;

use super::Rule;

/// Every required system file exists under the project root
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredFiles;

impl Rule for RequiredFiles {
    fn name(&self) -> &'static str {
        "required-files"
    }

    fn description(&self) -> &'static str {
        "Required system files exist"
    }

    fn check(&self, corpus: &Corpus) -> Result<Vec<Finding>, CorpusError> {
        Ok(REQUIRED_FILES
            .iter()
            .filter(|(path, _)| !corpus.exists(path))
            .map(|(path, role)| {
                Finding::error(
                    PROJECT_SCOPE,
                    None,
                    format!("Required file missing: {path} ({role})"),
                )
                .with_suggestion(format!("Create {path}"))
            })
            .collect())
    }
}
