//! Shared testing utilities for roleprompt CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated `$HOME` for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `roleprompt` binary.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("roleprompt").expect("Failed to locate roleprompt binary");
        cmd.env("HOME", self.home());
        cmd
    }

    /// Path to the prompt store blob under the emulated home.
    pub fn store_path(&self) -> PathBuf {
        self.home().join(".config").join("roleprompt").join("prompt_store.json")
    }

    /// Generate a prompt non-interactively; `industry` varies the summary so
    /// entries are distinguishable in history listings.
    pub fn build_sample(&self, industry: &str) {
        self.cli()
            .args([
                "build",
                "--domain",
                "IT技術を知りたい",
                "--detail",
                "クラウド",
                "--industry",
                industry,
            ])
            .assert()
            .success();
    }

    /// Raw store blob content.
    pub fn read_store(&self) -> String {
        fs::read_to_string(self.store_path()).expect("store blob should exist")
    }
}
