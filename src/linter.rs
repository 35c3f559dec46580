//! Linter - runs every rule against a corpus and collects the report
//!
//! Rules run in a fixed order. Each returns its own list of findings and the
//! linter appends them to the report, so the report order is the rule order
//! followed by each rule's document order.

use std::path::Path;

use log::{debug, warn};
use thiserror::Error;

use crate::config::{ConfigError, LintConfig};
use crate::core::models::Report;
use crate::corpus::{Corpus, CorpusError};
use crate::rules::{self, Rule};

/// Tool-level failures; these abort the run instead of becoming findings
#[derive(Debug, Error)]
pub enum LintError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Corpus could not be discovered or read
    #[error(transparent)]
    Corpus(#[from] CorpusError),
}

/// An ordered set of rules
#[derive(Debug)]
pub struct Linter {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(&LintConfig::default())
    }
}

impl Linter {
    /// All default rules, minus the ones the config disables
    #[must_use]
    pub fn new(config: &LintConfig) -> Self {
        let all = rules::default_rules(&config.names.filter());

        for name in &config.rules.disabled {
            if !all.iter().any(|r| r.name() == name) {
                warn!("unknown rule '{name}' in disabled list");
            }
        }

        let rules = all
            .into_iter()
            .filter(|rule| {
                let disabled = config.is_disabled(rule.name());
                if disabled {
                    debug!("rule {} disabled by config", rule.name());
                }
                !disabled
            })
            .collect();
        Self { rules }
    }

    /// Use exactly these rules, in this order
    #[must_use]
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Names of the rules that will run, in order
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name())
    }

    /// Run every rule and collect the findings
    pub fn run(&self, corpus: &Corpus) -> Result<Report, CorpusError> {
        let mut report = Report::new(corpus.files_checked());
        for rule in &self.rules {
            let findings = rule.check(corpus)?;
            debug!("{}: {} finding(s)", rule.name(), findings.len());
            report.extend(findings);
        }
        Ok(report)
    }
}

/// Load config, discover the corpus at `root` and lint it
pub fn lint(root: &Path) -> Result<Report, LintError> {
    let config = LintConfig::load(root)?;
    let corpus = Corpus::discover(root)?;
    Ok(Linter::new(&config).run(&corpus)?)
}
