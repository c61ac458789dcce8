//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for building data directories and running the
//! tabcheck binary against them.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the tabcheck binary
pub fn tabcheck_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tabcheck"));
    cmd.env_remove("TABCHECK_CONFIG")
        .env_remove("TABCHECK_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    cmd
}

/// Temporary project: a git root holding tabcheck.toml and table files.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Empty project with a `.git` marker so discovery stops here.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Project with the given tabcheck.toml contents.
    pub fn with_config(config: &str) -> Self {
        let project = Self::empty();
        project.file("tabcheck.toml", config);
        project
    }

    /// Write a file relative to the project root, creating parents.
    pub fn file(&self, path: &str, content: &str) -> &Self {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, path: &str) -> PathBuf {
        self.dir.path().join(path)
    }

    /// `tabcheck check <args>` run from the project root.
    pub fn check(&self, args: &[&str]) -> Command {
        let mut cmd = tabcheck_cmd();
        cmd.arg("check").args(args).current_dir(self.path());
        cmd
    }
}

/// Three declared checkers over `conf/`: Alpha, Beta, Gamma.
pub const THREE_CHECKERS: &str = r#"version = 1

[run]
dir = "data"

[[checker]]
name = "Alpha"
path = "conf/alpha"
required = ["id"]

[[checker]]
name = "Beta"
path = "conf/beta"
unique = ["id"]

[[checker]]
name = "Gamma"
path = "conf/gamma"
min_rows = 1
"#;

/// Project with [`THREE_CHECKERS`] and tables that all pass.
pub fn passing_project() -> Project {
    let project = Project::with_config(THREE_CHECKERS);
    project
        .file("data/conf/alpha.json", r#"[{"id": 1}, {"id": 2}]"#)
        .file("data/conf/beta.json", r#"[{"id": 1}, {"id": 2}]"#)
        .file("data/conf/gamma.json", r#"[{"id": 1}]"#);
    project
}

/// Parse stdout as JSON.
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("output should be valid JSON")
}
