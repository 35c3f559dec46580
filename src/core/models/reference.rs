//! Reference model
//!
//! A reference is one textual mention inside a document that names another
//! document, either by path or by bare name.

use serde::{Deserialize, Serialize};

/// Kind of reference, one per extraction pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// `.claude/skills/<path>.md`
    SkillPath,
    /// `templates/<path>.md`, optionally with a leading `/`
    TemplatePath,
    /// `.claude/agents/<name>.md`
    AgentPath,
    /// `.claude/chains/<name>.md`
    ChainPath,
    /// `invoke: name`, `calls name` and friends
    SkillName,
    /// `` `name-writer` `` and other code-styled role names
    SkillNameCode,
    /// `docs/<path>.md`, optionally with a leading `/`
    DocPath,
}

impl PatternKind {
    /// All pattern kinds
    pub const ALL: [Self; 7] = [
        Self::SkillPath,
        Self::TemplatePath,
        Self::AgentPath,
        Self::ChainPath,
        Self::SkillName,
        Self::SkillNameCode,
        Self::DocPath,
    ];

    /// Stable pattern name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SkillPath => "skill_path",
            Self::TemplatePath => "template_path",
            Self::AgentPath => "agent_path",
            Self::ChainPath => "chain_path",
            Self::SkillName => "skill_name",
            Self::SkillNameCode => "skill_name_code",
            Self::DocPath => "doc_path",
        }
    }

    /// Prefix that turns a captured fragment back into a root-relative path
    ///
    /// `None` for bare-name patterns.
    #[must_use]
    pub const fn subtree(self) -> Option<&'static str> {
        match self {
            Self::SkillPath => Some(".claude/skills/"),
            Self::TemplatePath => Some("templates/"),
            Self::AgentPath => Some(".claude/agents/"),
            Self::ChainPath => Some(".claude/chains/"),
            Self::DocPath => Some("docs/"),
            Self::SkillName | Self::SkillNameCode => None,
        }
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One extracted reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Captured identifier: a path fragment or a bare name
    pub target: String,
    /// 1-based line the reference was found on
    pub line: usize,
    /// Pattern that produced it
    pub kind: PatternKind,
}

impl Reference {
    /// Create a new reference
    pub fn new(target: impl Into<String>, line: usize, kind: PatternKind) -> Self {
        Self {
            target: target.into(),
            line,
            kind,
        }
    }

    /// Root-relative path this reference points at, for path-style references
    #[must_use]
    pub fn resolved_path(&self) -> Option<String> {
        self.kind.subtree().map(|prefix| format!("{prefix}{}", self.target))
    }
}
