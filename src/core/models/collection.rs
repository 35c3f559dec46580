//! Document collections
//!
//! Every discovered document belongs to exactly one collection, decided by
//! the subtree it was found under.

use serde::{Deserialize, Serialize};

/// The role a document plays in the corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    /// `.claude/agents/*.md`
    Agents,
    /// `.claude/skills/**/*.md`
    Skills,
    /// `.claude/chains/*.md`
    Chains,
    /// `templates/**/*.md`
    Templates,
    /// `docs/**/*.md`
    Docs,
    /// `prompts/*.md`
    Prompts,
}

impl CollectionKind {
    /// All collections, in discovery order
    pub const ALL: [Self; 6] = [
        Self::Agents,
        Self::Skills,
        Self::Chains,
        Self::Templates,
        Self::Docs,
        Self::Prompts,
    ];

    /// Subdirectory of the corpus root holding this collection (`/`-separated)
    #[must_use]
    pub const fn dir(self) -> &'static str {
        match self {
            Self::Agents => ".claude/agents",
            Self::Skills => ".claude/skills",
            Self::Chains => ".claude/chains",
            Self::Templates => "templates",
            Self::Docs => "docs",
            Self::Prompts => "prompts",
        }
    }

    /// Whether documents are discovered in nested subdirectories too
    ///
    /// Skills, templates and docs are grouped into sub-categories; agents,
    /// chains and prompts are flat.
    #[must_use]
    pub const fn is_recursive(self) -> bool {
        matches!(self, Self::Skills | Self::Templates | Self::Docs)
    }

    /// Collection name as used in output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Agents => "agents",
            Self::Skills => "skills",
            Self::Chains => "chains",
            Self::Templates => "templates",
            Self::Docs => "docs",
            Self::Prompts => "prompts",
        }
    }
}

impl std::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
