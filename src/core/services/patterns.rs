//! Pattern registry - one line-oriented regex per reference kind
//!
//! Every pattern has exactly one capturing group holding the referenced
//! identifier. None of them can match across a line break, so extraction is
//! always done line by line.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::PatternKind;

fn compile(source: &str) -> Regex {
    Regex::new(source).unwrap_or_else(|e| panic!("invalid built-in pattern {source}: {e}"))
}

static SKILL_PATH: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"[`"']?\.claude/skills/([a-zA-Z0-9_\-/]+\.md)[`"']?"#));

static TEMPLATE_PATH: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"[`"']?/?templates/([a-zA-Z0-9_\-/]+\.md)[`"']?"#));

static AGENT_PATH: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"[`"']?\.claude/agents/([a-zA-Z0-9_\-]+\.md)[`"']?"#));

static CHAIN_PATH: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"[`"']?\.claude/chains/([a-zA-Z0-9_\-]+\.md)[`"']?"#));

// Only an explicit invocation keyword triggers a bare-name match.
static SKILL_NAME: LazyLock<Regex> = LazyLock::new(|| {
    compile(r#"(?i)\b(?:invoke|calls?)(?:\s*[:\-]\s*|\s+)[`"']?([a-zA-Z][a-zA-Z0-9_\-]{2,})[`"']?"#)
});

// Role-suffix filtering happens in `NameFilter`, not here.
static SKILL_NAME_CODE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"`([a-zA-Z][a-zA-Z0-9_\-]{2,})`"));

static DOC_PATH: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"[`"']?/?docs/([a-zA-Z0-9_\-/]+\.md)[`"']?"#));

/// Get the compiled regex for a pattern kind
#[must_use]
pub fn pattern(kind: PatternKind) -> &'static Regex {
    match kind {
        PatternKind::SkillPath => &SKILL_PATH,
        PatternKind::TemplatePath => &TEMPLATE_PATH,
        PatternKind::AgentPath => &AGENT_PATH,
        PatternKind::ChainPath => &CHAIN_PATH,
        PatternKind::SkillName => &SKILL_NAME,
        PatternKind::SkillNameCode => &SKILL_NAME_CODE,
        PatternKind::DocPath => &DOC_PATH,
    }
}
