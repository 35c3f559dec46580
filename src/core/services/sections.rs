//! Metadata section detection
//!
//! A logical section is present when a line starts with `## <alias>` or
//! `**<alias>**` for any of its aliases, case-insensitively.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// A logical section and the heading spellings that satisfy it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    /// Canonical section name
    pub name: &'static str,
    /// Accepted heading spellings (the canonical name included)
    pub aliases: &'static [&'static str],
}

/// Sections every skill definition should carry
pub const SKILL_SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        name: "Purpose",
        aliases: &["Purpose", "Intended Purpose"],
    },
    SectionSpec {
        name: "Workflow",
        aliases: &["Workflow", "Process", "Intended Behavior"],
    },
    SectionSpec {
        name: "Input",
        aliases: &["Input", "Planned Input", "Expected Input"],
    },
    SectionSpec {
        name: "Output",
        aliases: &["Output", "Planned Output", "Expected Output"],
    },
];

/// Sections every agent definition should carry
pub const AGENT_SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        name: "Role",
        aliases: &["Role", "Identity", "Agent Role", "Purpose", "Core Responsibilities"],
    },
    SectionSpec {
        name: "Triggers",
        aliases: &[
            "Triggers",
            "Activation",
            "When to Invoke",
            "Activation Triggers",
            "When Invoked",
            "Trigger Words",
        ],
    },
    SectionSpec {
        name: "Skills",
        aliases: &["Skills", "Available Skills", "Tools", "Capabilities", "Skills Invoked"],
    },
];

/// Compiled heading matchers for a set of sections
#[derive(Debug)]
pub struct SectionMatcher {
    sections: Vec<(&'static str, Regex)>,
}

impl SectionMatcher {
    /// Compile one heading regex per section
    pub fn new(specs: &[SectionSpec]) -> Result<Self, regex::Error> {
        let sections = specs
            .iter()
            .map(|spec| heading_regex(spec.aliases).map(|re| (spec.name, re)))
            .collect::<Result<_, _>>()?;
        Ok(Self { sections })
    }

    /// Canonical names of the sections with no matching heading, in spec order
    pub fn missing<'a>(&'a self, content: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.sections.iter().filter(move |(_, re)| !re.is_match(content)).map(|(name, _)| *name)
    }
}

fn heading_regex(aliases: &[&str]) -> Result<Regex, regex::Error> {
    let alternatives = aliases.iter().map(|a| regex::escape(a)).collect::<Vec<_>>().join("|");
    RegexBuilder::new(&format!(r"^(?:##\s*(?:{alternatives})|\*\*(?:{alternatives})\*\*)"))
        .case_insensitive(true)
        .multi_line(true)
        .build()
}

/// Matcher for [`SKILL_SECTIONS`]
pub static SKILL_MATCHER: LazyLock<SectionMatcher> = LazyLock::new(|| {
    SectionMatcher::new(SKILL_SECTIONS).unwrap_or_else(|e| panic!("invalid skill sections: {e}"))
});

/// Matcher for [`AGENT_SECTIONS`]
pub static AGENT_MATCHER: LazyLock<SectionMatcher> = LazyLock::new(|| {
    SectionMatcher::new(AGENT_SECTIONS).unwrap_or_else(|e| panic!("invalid agent sections: {e}"))
});
