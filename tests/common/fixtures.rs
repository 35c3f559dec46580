//! Test fixtures and builders
//!
//! Provides a temporary workflow project that can be filled file by file.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use workflow_lint::core::models::{Finding, Report};

/// A temporary project directory
pub struct TestCorpus {
    dir: TempDir,
}

impl TestCorpus {
    /// Create an empty project (no manifest, no collections)
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Create a project with no findings:
    /// ```text
    /// /
    /// ├── CLAUDE.md
    /// ├── memory/
    /// │   ├── constitution.md
    /// │   └── project-context.md
    /// ├── .claude/
    /// │   ├── agents/orchestrator.md
    /// │   ├── skills/workflow/{spec-writer,clarifier}.md
    /// │   └── chains/full-pipeline.md
    /// ├── templates/spec-template.md
    /// ├── docs/{index.md, guides/setup.md}
    /// └── prompts/start.md
    /// ```
    pub fn complete() -> Self {
        let corpus = Self::new();
        corpus
            .add_file(
                "CLAUDE.md",
                "# System\n\n\
                 Route every request to `.claude/agents/orchestrator.md`.\n\
                 Specs use `.claude/skills/workflow/spec-writer.md` and `templates/spec-template.md`.\n",
            )
            .add_file("memory/constitution.md", "# Constitution\n")
            .add_file("memory/project-context.md", "# Project Context\n")
            .add_file(
                ".claude/agents/orchestrator.md",
                "# Orchestrator\n\n\
                 ## Role\nRoutes requests.\n\n\
                 ## Triggers\nAny request.\n\n\
                 ## Skills\n- `.claude/skills/workflow/spec-writer.md`\n- invoke: clarifier\n",
            )
            .add_file(".claude/skills/workflow/spec-writer.md", &skill("Fill `/templates/spec-template.md`."))
            .add_file(".claude/skills/workflow/clarifier.md", &skill("Ask questions."))
            .add_file(
                ".claude/chains/full-pipeline.md",
                "# Full pipeline\n\n1. `.claude/skills/workflow/clarifier.md`\n2. this step calls spec-writer to continue\n",
            )
            .add_file("templates/spec-template.md", "# Spec\n")
            .add_file("docs/index.md", "# Docs\n\nSee `docs/guides/setup.md`.\n")
            .add_file("docs/guides/setup.md", "# Setup\n")
            .add_file("prompts/start.md", "Start here.\n");
        corpus
    }

    /// Root of the project
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories
    pub fn add_file(&self, path: &str, content: &str) -> &Self {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
        self
    }

    /// Write raw bytes (for encoding tests)
    pub fn add_bytes(&self, path: &str, content: &[u8]) -> &Self {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
        self
    }

    /// Delete a file
    pub fn remove_file(&self, path: &str) -> &Self {
        fs::remove_file(self.dir.path().join(path)).unwrap();
        self
    }

    /// Lint the project with its own config
    pub fn lint(&self) -> Report {
        workflow_lint::lint(self.path()).expect("lint failed")
    }

    /// Findings of a report that concern one file
    pub fn findings_for<'a>(report: &'a Report, file: &str) -> Vec<&'a Finding> {
        report.findings().iter().filter(|f| f.file == file).collect()
    }
}

impl Default for TestCorpus {
    fn default() -> Self {
        Self::new()
    }
}

/// A skill definition with every recommended section
pub fn skill(workflow: &str) -> String {
    format!(
        "# Skill\n\n## Purpose\nDo one thing.\n\n## Workflow\n{workflow}\n\n## Input\nA request.\n\n## Output\nA file.\n"
    )
}
