//! Reference extractor
//!
//! Runs a registry pattern over document content line by line.

use crate::core::models::{PatternKind, Reference};

use super::patterns::pattern;

/// Extract every reference of `kind` from `content`, with 1-based line numbers
///
/// Duplicates are preserved: the same reference on three lines (or three
/// times on one line) yields three references.
#[must_use]
pub fn extract_references(content: &str, kind: PatternKind) -> Vec<Reference> {
    let regex = pattern(kind);
    content
        .lines()
        .enumerate()
        .flat_map(|(idx, line)| {
            regex
                .captures_iter(line)
                .filter_map(|caps| caps.get(1))
                .map(move |m| Reference::new(m.as_str(), idx + 1, kind))
        })
        .collect()
}
