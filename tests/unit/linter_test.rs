//! Tests for the rule runner

use workflow_lint::Linter;
use workflow_lint::config::LintConfig;
use workflow_lint::core::models::{CollectionKind, Finding};
use workflow_lint::corpus::{Corpus, CorpusError};
use workflow_lint::rules::{Rule, default_rules};
use workflow_lint::core::services::NameFilter;

use crate::common::TestCorpus;

/// Flags every prompt, to check custom rules plug in
#[derive(Debug)]
struct EveryPrompt;

impl Rule for EveryPrompt {
    fn name(&self) -> &'static str {
        "every-prompt"
    }

    fn description(&self) -> &'static str {
        "Reports each prompt"
    }

    fn check(&self, corpus: &Corpus) -> Result<Vec<Finding>, CorpusError> {
        Ok(corpus
            .collection(CollectionKind::Prompts)
            .iter()
            .map(|doc| Finding::info(doc.relative_path(), None, "prompt"))
            .collect())
    }
}

#[test]
fn test_default_rule_order() {
    let names: Vec<_> = Linter::default().rule_names().collect();

    assert_eq!(
        names,
        [
            "required-files",
            "manifest-references",
            "agent-skills",
            "skill-templates",
            "chain-skills",
            "doc-links",
            "skill-metadata",
            "agent-metadata",
        ]
    );
}

#[test]
fn test_rule_names_are_unique() {
    let rules = default_rules(&NameFilter::default());
    let mut names: Vec<_> = rules.iter().map(|r| r.name()).collect();
    names.sort_unstable();
    names.dedup();

    assert_eq!(names.len(), rules.len());
}

#[test]
fn test_custom_rules_run_in_given_order() {
    let fixture = TestCorpus::complete();
    fixture.add_file("prompts/second.md", "again\n");
    let corpus = Corpus::discover(fixture.path()).unwrap();

    let linter = Linter::with_rules(vec![Box::new(EveryPrompt)]);
    let report = linter.run(&corpus).unwrap();

    assert_eq!(report.info_count(), 2);
    assert_eq!(report.findings()[0].file, "prompts/second.md");
    assert_eq!(report.findings()[1].file, "prompts/start.md");
    assert_eq!(report.files_checked, 10);
}

#[test]
fn test_files_checked_counts_manifest_even_when_absent() {
    let fixture = TestCorpus::complete();
    fixture.remove_file("CLAUDE.md");
    let corpus = Corpus::discover(fixture.path()).unwrap();

    let report = Linter::new(&LintConfig::default()).run(&corpus).unwrap();

    assert_eq!(report.files_checked, 9);
}

#[test]
fn test_empty_rule_set_reports_nothing() {
    let fixture = TestCorpus::new();
    let corpus = Corpus::discover(fixture.path()).unwrap();

    let report = Linter::with_rules(Vec::new()).run(&corpus).unwrap();

    assert!(report.is_empty());
}
