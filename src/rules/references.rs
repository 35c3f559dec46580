//! Cross-reference rules
//!
//! Path-style references are structural: a consumer following that exact
//! path fails when it is broken, so they are errors. Bare names are
//! ambiguous and only ever produce warnings. Doc-to-doc links are navigation
//! aids, so they warn even though they are paths.

use crate::core::models::{CollectionKind, Finding, PatternKind};
use crate::core::services::{NameFilter, extract_references};
use crate::corpus::{CollectionIndex, Corpus, CorpusError, Document};

use super::Rule;

/// Path-style references of `kind` in `content` that don't resolve in `index`
///
/// Yields `(root-relative path, line)` pairs in document order.
fn broken_paths(content: &str, kind: PatternKind, index: &CollectionIndex) -> Vec<(String, usize)> {
    extract_references(content, kind)
        .into_iter()
        .filter_map(|r| {
            let path = r.resolved_path()?;
            (!index.has_path(&path)).then_some((path, r.line))
        })
        .collect()
}

/// Bare names of `kind` that pass `accept` but match no document stem
fn unknown_names(
    content: &str,
    kind: PatternKind,
    index: &CollectionIndex,
    accept: impl Fn(&str) -> bool,
) -> Vec<(String, usize)> {
    extract_references(content, kind)
        .into_iter()
        .filter(|r| accept(&r.target) && !index.has_stem(&r.target))
        .map(|r| (r.target, r.line))
        .collect()
}

fn missing_path(doc: &Document, line: usize, noun: &str, path: &str) -> Finding {
    Finding::error(doc.relative_path(), Some(line), format!("References non-existent {noun}: {path}"))
        .with_suggestion(format!("Create the {noun} file or fix the reference"))
}

fn unknown_skill_name(doc: &Document, line: usize, name: &str) -> Finding {
    Finding::warning(
        doc.relative_path(),
        Some(line),
        format!("References skill name '{name}' - verify this skill exists"),
    )
    .with_suggestion(format!("Check {}/ for matching file", CollectionKind::Skills.dir()))
}

/// The root manifest routes only to agents, skills and templates that exist
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestReferences;

impl Rule for ManifestReferences {
    fn name(&self) -> &'static str {
        "manifest-references"
    }

    fn description(&self) -> &'static str {
        "CLAUDE.md references existing agents, skills and templates"
    }

    fn check(&self, corpus: &Corpus) -> Result<Vec<Finding>, CorpusError> {
        // A missing manifest is reported by `required-files`
        let Some(manifest) = corpus.manifest() else {
            return Ok(Vec::new());
        };
        let content = manifest.content()?;

        let targets = [
            (PatternKind::AgentPath, CollectionKind::Agents, "agent"),
            (PatternKind::SkillPath, CollectionKind::Skills, "skill"),
            (PatternKind::TemplatePath, CollectionKind::Templates, "template"),
        ];

        let mut findings = Vec::new();
        for (kind, collection, noun) in targets {
            let index = corpus.index(collection);
            findings.extend(
                broken_paths(content, kind, &index)
                    .into_iter()
                    .map(|(path, line)| missing_path(manifest, line, noun, &path)),
            );
        }
        Ok(findings)
    }
}

/// Agents reference skills that exist, by path or by name
#[derive(Debug, Clone, Default)]
pub struct AgentSkills {
    names: NameFilter,
}

impl AgentSkills {
    /// Create the rule with a bare-name filter
    #[must_use]
    pub const fn new(names: NameFilter) -> Self {
        Self { names }
    }
}

impl Rule for AgentSkills {
    fn name(&self) -> &'static str {
        "agent-skills"
    }

    fn description(&self) -> &'static str {
        "Agents reference existing skills"
    }

    fn check(&self, corpus: &Corpus) -> Result<Vec<Finding>, CorpusError> {
        let skills = corpus.index(CollectionKind::Skills);
        let mut findings = Vec::new();

        for agent in corpus.collection(CollectionKind::Agents) {
            let content = agent.content()?;

            for (path, line) in broken_paths(content, PatternKind::SkillPath, &skills) {
                findings.push(missing_path(agent, line, "skill", &path));
            }

            let invoked = unknown_names(content, PatternKind::SkillName, &skills, |name| {
                self.names.accepts_invocation(name)
            });
            let styled = unknown_names(content, PatternKind::SkillNameCode, &skills, |name| {
                self.names.accepts_code_styled(name)
            });
            for (name, line) in invoked.into_iter().chain(styled) {
                findings.push(unknown_skill_name(agent, line, &name));
            }
        }
        Ok(findings)
    }
}

/// Skills reference templates that exist
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillTemplates;

impl Rule for SkillTemplates {
    fn name(&self) -> &'static str {
        "skill-templates"
    }

    fn description(&self) -> &'static str {
        "Skills reference existing templates"
    }

    fn check(&self, corpus: &Corpus) -> Result<Vec<Finding>, CorpusError> {
        let templates = corpus.index(CollectionKind::Templates);
        let mut findings = Vec::new();

        for skill in corpus.collection(CollectionKind::Skills) {
            let content = skill.content()?;
            for (path, line) in broken_paths(content, PatternKind::TemplatePath, &templates) {
                findings.push(missing_path(skill, line, "template", &path));
            }
        }
        Ok(findings)
    }
}

/// Chains only link skills that exist
#[derive(Debug, Clone, Default)]
pub struct ChainSkills {
    names: NameFilter,
}

impl ChainSkills {
    /// Create the rule with a bare-name filter
    #[must_use]
    pub const fn new(names: NameFilter) -> Self {
        Self { names }
    }
}

impl Rule for ChainSkills {
    fn name(&self) -> &'static str {
        "chain-skills"
    }

    fn description(&self) -> &'static str {
        "Chains reference existing skills"
    }

    fn check(&self, corpus: &Corpus) -> Result<Vec<Finding>, CorpusError> {
        let skills = corpus.index(CollectionKind::Skills);
        let mut findings = Vec::new();

        for chain in corpus.collection(CollectionKind::Chains) {
            let content = chain.content()?;

            for (path, line) in broken_paths(content, PatternKind::SkillPath, &skills) {
                findings.push(
                    Finding::error(
                        chain.relative_path(),
                        Some(line),
                        format!("Chain references non-existent skill: {path}"),
                    )
                    .with_suggestion("Create the skill file or remove from chain"),
                );
            }

            for (name, line) in unknown_names(content, PatternKind::SkillName, &skills, |name| {
                self.names.accepts_invocation(name)
            }) {
                findings.push(unknown_skill_name(chain, line, &name));
            }
        }
        Ok(findings)
    }
}

/// Documentation pages link to pages that exist
#[derive(Debug, Clone, Copy, Default)]
pub struct DocLinks;

impl Rule for DocLinks {
    fn name(&self) -> &'static str {
        "doc-links"
    }

    fn description(&self) -> &'static str {
        "Documentation cross-links resolve"
    }

    fn check(&self, corpus: &Corpus) -> Result<Vec<Finding>, CorpusError> {
        let docs = corpus.index(CollectionKind::Docs);
        let mut findings = Vec::new();

        for doc in corpus.collection(CollectionKind::Docs) {
            let content = doc.content()?;
            for (path, line) in broken_paths(content, PatternKind::DocPath, &docs) {
                findings.push(
                    Finding::warning(
                        doc.relative_path(),
                        Some(line),
                        format!("References non-existent doc: {path}"),
                    )
                    .with_suggestion("Create the doc file or fix the reference"),
                );
            }
        }
        Ok(findings)
    }
}
