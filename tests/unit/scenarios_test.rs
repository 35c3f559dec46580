//! End-to-end rule behavior on small projects

use workflow_lint::core::models::{PROJECT_SCOPE, Severity};

use crate::common::TestCorpus;
use crate::common::fixtures::skill;

// =============================================================================
// CLEAN PROJECT
// =============================================================================

#[test]
fn test_complete_project_is_clean() {
    let corpus = TestCorpus::complete();
    let report = corpus.lint();

    assert!(report.is_empty(), "unexpected findings: {:?}", report.findings());
    assert_eq!(report.files_checked, 9);
}

#[test]
fn test_lint_is_idempotent() {
    let corpus = TestCorpus::complete();
    corpus.add_file(".claude/agents/broken.md", "Uses `.claude/skills/nope.md` and invoke: ghost\n");

    assert_eq!(corpus.lint(), corpus.lint());
}

// =============================================================================
// BROKEN PATHS
// =============================================================================

#[test]
fn test_agent_with_missing_skill_path() {
    let corpus = TestCorpus::complete();
    corpus.remove_file(".claude/skills/workflow/spec-writer.md");
    corpus.add_file(
        ".claude/agents/writer.md",
        "## Role\nWrites.\n## Triggers\nAlways.\n## Skills\nUse `.claude/skills/workflow/spec-writer.md`\n",
    );

    let report = corpus.lint();
    let findings = TestCorpus::findings_for(&report, ".claude/agents/writer.md");

    assert_eq!(findings.len(), 1);
    let finding = findings[0];
    assert_eq!(finding.severity, Severity::Error);
    assert_eq!(finding.line, Some(6));
    assert_eq!(
        finding.message,
        "References non-existent skill: .claude/skills/workflow/spec-writer.md"
    );
    assert_eq!(finding.suggestion.as_deref(), Some("Create the skill file or fix the reference"));
}

#[test]
fn test_skill_template_with_leading_slash_resolves() {
    let corpus = TestCorpus::complete();
    corpus.add_file(".claude/skills/other.md", &skill("See `/templates/spec-template.md`"));

    let report = corpus.lint();

    assert!(TestCorpus::findings_for(&report, ".claude/skills/other.md").is_empty());
}

#[test]
fn test_skill_with_missing_template() {
    let corpus = TestCorpus::complete();
    corpus.add_file(".claude/skills/other.md", &skill("See `templates/nested/missing.md`"));

    let report = corpus.lint();
    let findings = TestCorpus::findings_for(&report, ".claude/skills/other.md");

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity, Severity::Error);
    assert_eq!(findings[0].message, "References non-existent template: templates/nested/missing.md");
}

#[test]
fn test_duplicate_references_each_reported() {
    let corpus = TestCorpus::complete();
    corpus.add_file(
        ".claude/chains/dup.md",
        "1. `.claude/skills/gone.md`\n2. `.claude/skills/gone.md`\n",
    );

    let report = corpus.lint();
    let findings = TestCorpus::findings_for(&report, ".claude/chains/dup.md");

    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].line, Some(1));
    assert_eq!(findings[1].line, Some(2));
    assert!(findings.iter().all(|f| f.message == "Chain references non-existent skill: .claude/skills/gone.md"));
    assert!(findings.iter().all(|f| f.suggestion.as_deref() == Some("Create the skill file or remove from chain")));
}

#[test]
fn test_manifest_with_missing_agent() {
    let corpus = TestCorpus::complete();
    corpus.add_file("CLAUDE.md", "Routes to `.claude/agents/missing.md`\n");

    let report = corpus.lint();
    let findings = TestCorpus::findings_for(&report, "CLAUDE.md");

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].message, "References non-existent agent: .claude/agents/missing.md");
    assert_eq!(findings[0].line, Some(1));
}

#[test]
fn test_broken_doc_link_is_a_warning() {
    let corpus = TestCorpus::complete();
    corpus.add_file("docs/guides/setup.md", "Next: docs/guides/missing.md\n");

    let report = corpus.lint();
    let findings = TestCorpus::findings_for(&report, "docs/guides/setup.md");

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity, Severity::Warning);
    assert_eq!(findings[0].message, "References non-existent doc: docs/guides/missing.md");
    assert!(!report.has_errors());
}

// =============================================================================
// REQUIRED FILES
// =============================================================================

#[test]
fn test_missing_manifest_is_one_error() {
    let corpus = TestCorpus::complete();
    corpus.remove_file("CLAUDE.md");

    let report = corpus.lint();

    assert_eq!(report.len(), 1);
    let finding = &report.findings()[0];
    assert_eq!(finding.severity, Severity::Error);
    assert_eq!(finding.file, PROJECT_SCOPE);
    assert_eq!(finding.line, None);
    assert!(finding.message.contains("CLAUDE.md"));
}

#[test]
fn test_empty_project_reports_every_required_file() {
    let corpus = TestCorpus::new();

    let report = corpus.lint();

    assert_eq!(report.error_count(), 4);
    assert_eq!(report.files_checked, 1);
    assert_eq!(
        report.findings()[1].message,
        "Required file missing: memory/constitution.md (Project constitution)"
    );
}

// =============================================================================
// METADATA
// =============================================================================

#[test]
fn test_skill_without_sections_gets_four_warnings() {
    let corpus = TestCorpus::complete();
    corpus.add_file(".claude/skills/bare.md", "# Bare\n\nJust text.\n");

    let report = corpus.lint();
    let findings = TestCorpus::findings_for(&report, ".claude/skills/bare.md");

    let messages: Vec<_> = findings.iter().map(|f| f.message.as_str()).collect();
    assert_eq!(
        messages,
        [
            "Missing recommended section: Purpose",
            "Missing recommended section: Workflow",
            "Missing recommended section: Input",
            "Missing recommended section: Output",
        ]
    );
    assert!(findings.iter().all(|f| f.severity == Severity::Warning && f.line.is_none()));
}

#[test]
fn test_bold_and_alias_sections_count() {
    let corpus = TestCorpus::complete();
    corpus.add_file(
        ".claude/agents/reviewer.md",
        "**Role**\nReviews.\n\n## Activation\nAfter writing.\n\n## Skills Used\nnone\n",
    );

    let report = corpus.lint();

    assert!(TestCorpus::findings_for(&report, ".claude/agents/reviewer.md").is_empty());
}

#[test]
fn test_readme_is_exempt_from_metadata() {
    let corpus = TestCorpus::complete();
    corpus.add_file(".claude/skills/README.md", "# Skills\n\nIndex of skills.\n");
    corpus.add_file(".claude/agents/readme.md", "# Agents\n");

    let report = corpus.lint();

    assert!(report.is_empty(), "unexpected findings: {:?}", report.findings());
    assert_eq!(report.files_checked, 11);
}

// =============================================================================
// BARE NAMES
// =============================================================================

#[test]
fn test_chain_invocation_of_existing_skill() {
    let corpus = TestCorpus::complete();
    corpus.add_file(".claude/chains/short.md", "this step calls spec-writer to continue\n");

    let report = corpus.lint();

    assert!(TestCorpus::findings_for(&report, ".claude/chains/short.md").is_empty());
}

#[test]
fn test_agent_invocation_of_unknown_skill() {
    let corpus = TestCorpus::complete();
    corpus.add_file(
        ".claude/agents/router.md",
        "## Role\nRoutes.\n## Triggers\nAll.\n## Skills\ninvoke: ghost-skill\n",
    );

    let report = corpus.lint();
    let findings = TestCorpus::findings_for(&report, ".claude/agents/router.md");

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity, Severity::Warning);
    assert_eq!(findings[0].line, Some(6));
    assert_eq!(findings[0].message, "References skill name 'ghost-skill' - verify this skill exists");
    assert_eq!(findings[0].suggestion.as_deref(), Some("Check .claude/skills/ for matching file"));
}

#[test]
fn test_short_and_stop_listed_names_are_ignored() {
    let corpus = TestCorpus::complete();
    corpus.add_file(
        ".claude/agents/router.md",
        "## Role\nCalls the shots.\n## Triggers\ninvoke: ab\n## Skills\nThis calls this skill.\n",
    );

    let report = corpus.lint();

    assert!(TestCorpus::findings_for(&report, ".claude/agents/router.md").is_empty());
}

#[test]
fn test_code_styled_names_need_role_suffix() {
    let corpus = TestCorpus::complete();
    corpus.add_file(
        ".claude/agents/router.md",
        "## Role\nRun `cargo` then `plan-reviewer`.\n## Triggers\nAll.\n## Skills\n`clarifier`\n",
    );

    let report = corpus.lint();
    let findings = TestCorpus::findings_for(&report, ".claude/agents/router.md");

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].message, "References skill name 'plan-reviewer' - verify this skill exists");
    assert_eq!(findings[0].line, Some(2));
}

// =============================================================================
// ORDERING
// =============================================================================

#[test]
fn test_findings_follow_rule_order() {
    let corpus = TestCorpus::complete();
    corpus.remove_file("memory/constitution.md");
    corpus.add_file(".claude/agents/router.md", "invoke: ghost-skill\n`.claude/skills/gone.md`\n");

    let report = corpus.lint();
    let messages: Vec<_> = report.findings().iter().map(|f| f.message.as_str()).collect();

    assert_eq!(
        messages,
        [
            "Required file missing: memory/constitution.md (Project constitution)",
            "References non-existent skill: .claude/skills/gone.md",
            "References skill name 'ghost-skill' - verify this skill exists",
            "Missing recommended section: Role",
            "Missing recommended section: Triggers",
            "Missing recommended section: Skills",
        ]
    );
}
