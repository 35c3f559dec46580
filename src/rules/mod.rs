//! Lint rules
//!
//! Each rule inspects the discovered corpus and returns its own findings.
//! Rules never share state; the [`Linter`](crate::linter::Linter) runs them
//! in a fixed order and concatenates their results.
//!
//! | rule | checks |
//! |------|--------|
//! | `required-files` | manifest, constitution, session state, orchestrator exist |
//! | `manifest-references` | `CLAUDE.md` → agents, skills, templates |
//! | `agent-skills` | agents → skills (paths and bare names) |
//! | `skill-templates` | skills → templates |
//! | `chain-skills` | chains → skills (paths and invoked names) |
//! | `doc-links` | docs → docs |
//! | `skill-metadata` | skills carry Purpose/Workflow/Input/Output |
//! | `agent-metadata` | agents carry Role/Triggers/Skills |

mod metadata;
mod references;
mod required;

pub use metadata::MetadataRule;
pub use references::{AgentSkills, ChainSkills, DocLinks, ManifestReferences, SkillTemplates};
pub use required::RequiredFiles;

use crate::core::models::Finding;
use crate::core::services::NameFilter;
use crate::corpus::{Corpus, CorpusError};

/// A single validation over the corpus
pub trait Rule: std::fmt::Debug {
    /// Stable name, used in configuration
    fn name(&self) -> &'static str;

    /// One-line description
    fn description(&self) -> &'static str;

    /// Run the rule; an error means the corpus could not be read
    fn check(&self, corpus: &Corpus) -> Result<Vec<Finding>, CorpusError>;
}

/// Every rule, in execution order
#[must_use]
pub fn default_rules(names: &NameFilter) -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(RequiredFiles),
        Box::new(ManifestReferences),
        Box::new(AgentSkills::new(names.clone())),
        Box::new(SkillTemplates),
        Box::new(ChainSkills::new(names.clone())),
        Box::new(DocLinks),
        Box::new(MetadataRule::skills()),
        Box::new(MetadataRule::agents()),
    ]
}
