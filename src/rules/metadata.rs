//! Metadata-presence checks for skill and agent definitions

use crate::core::models::{CollectionKind, Finding};
use crate::core::services::SectionMatcher;
use crate::core::services::sections::{AGENT_MATCHER, SKILL_MATCHER};
use crate::corpus::{Corpus, CorpusError};

use super::Rule;

/// Every non-README document of a collection carries the recommended sections
#[derive(Debug, Clone, Copy)]
pub struct MetadataRule {
    name: &'static str,
    description: &'static str,
    collection: CollectionKind,
    definition: &'static str,
    matcher: &'static SectionMatcher,
}

impl MetadataRule {
    /// Skills need Purpose, Workflow, Input and Output
    #[must_use]
    pub fn skills() -> Self {
        Self {
            name: "skill-metadata",
            description: "Skills carry Purpose, Workflow, Input and Output sections",
            collection: CollectionKind::Skills,
            definition: "skill definition",
            matcher: &SKILL_MATCHER,
        }
    }

    /// Agents need Role, Triggers and Skills
    #[must_use]
    pub fn agents() -> Self {
        Self {
            name: "agent-metadata",
            description: "Agents carry Role, Triggers and Skills sections",
            collection: CollectionKind::Agents,
            definition: "agent definition",
            matcher: &AGENT_MATCHER,
        }
    }
}

impl Rule for MetadataRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn check(&self, corpus: &Corpus) -> Result<Vec<Finding>, CorpusError> {
        let mut findings = Vec::new();

        for doc in corpus.collection(self.collection) {
            if doc.is_readme() {
                continue;
            }
            let content = doc.content()?;
            for section in self.matcher.missing(content) {
                findings.push(
                    Finding::warning(
                        doc.relative_path(),
                        None,
                        format!("Missing recommended section: {section}"),
                    )
                    .with_suggestion(format!(
                        "Add '## {section}' section to {}",
                        self.definition
                    )),
                );
            }
        }
        Ok(findings)
    }
}
