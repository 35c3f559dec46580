//! Bare-name filters
//!
//! Bare skill names found in prose are ambiguous. Each filter here is a
//! separate layer so it can be tuned (and tested) on its own:
//!
//! - length floor: very short captures are noise
//! - stop-list: common words that follow "invoke"/"call" in prose
//! - role allowlist: code-styled names only count when they look like a role

/// Names shorter than this are ignored
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Words never treated as skill names
pub const DEFAULT_STOP_WORDS: [&str; 10] =
    ["the", "a", "an", "this", "that", "skill", "agent", "with", "from", "into"];

/// Role words a code-styled name must end in (`-writer`) or equal (`writer`)
pub const DEFAULT_ROLE_SUFFIXES: [&str; 15] = [
    "writer",
    "reader",
    "validator",
    "fixer",
    "planner",
    "assessor",
    "packager",
    "reporter",
    "reviewer",
    "checker",
    "decomposer",
    "preparer",
    "analyzer",
    "search",
    "clarifier",
];

/// Layered filter for bare-name references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter {
    min_length: usize,
    stop_words: Vec<String>,
    role_suffixes: Vec<String>,
}

impl Default for NameFilter {
    fn default() -> Self {
        Self::new(
            DEFAULT_MIN_LENGTH,
            DEFAULT_STOP_WORDS.iter().map(ToString::to_string).collect(),
            DEFAULT_ROLE_SUFFIXES.iter().map(ToString::to_string).collect(),
        )
    }
}

impl NameFilter {
    /// Create a filter; stop words are compared case-insensitively
    #[must_use]
    pub fn new(min_length: usize, stop_words: Vec<String>, role_suffixes: Vec<String>) -> Self {
        Self {
            min_length,
            stop_words: stop_words.into_iter().map(|w| w.to_lowercase()).collect(),
            role_suffixes,
        }
    }

    /// Below the length floor
    #[must_use]
    pub fn is_too_short(&self, name: &str) -> bool {
        name.chars().count() < self.min_length
    }

    /// A common word rather than a name
    #[must_use]
    pub fn is_stop_word(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.stop_words.iter().any(|w| *w == lower)
    }

    /// Ends in `-<role>` or is exactly `<role>`
    #[must_use]
    pub fn has_role_suffix(&self, name: &str) -> bool {
        self.role_suffixes.iter().any(|suffix| {
            name == suffix
                || name
                    .strip_suffix(suffix.as_str())
                    .is_some_and(|rest| rest.ends_with('-'))
        })
    }

    /// Whether a keyword-triggered name should be resolved at all
    #[must_use]
    pub fn accepts_invocation(&self, name: &str) -> bool {
        !self.is_too_short(name) && !self.is_stop_word(name)
    }

    /// Whether a code-styled name should be resolved at all
    #[must_use]
    pub fn accepts_code_styled(&self, name: &str) -> bool {
        self.accepts_invocation(name) && self.has_role_suffix(name)
    }
}
