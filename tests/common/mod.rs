//! Common test utilities for Pinion CLI tests.
//!
//! Provides `TestEnv`: an isolated temp directory acting as the
//! invocation directory, plus helpers to seed the manifest/lockfile and
//! run the compiled binary.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Result of running the pinion CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated invocation directory with CLI execution helpers.
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("create temp dir"),
        }
    }

    /// Get path relative to the invocation directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Seed `components/resolved.json`
    pub fn write_manifest(&self, content: &str) {
        let path = self.path("components/resolved.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    /// Seed a pre-existing `component.json`
    pub fn write_lockfile(&self, content: &str) {
        std::fs::write(self.path("component.json"), content).unwrap();
    }

    pub fn lockfile_exists(&self) -> bool {
        self.path("component.json").exists()
    }

    pub fn read_lockfile(&self) -> String {
        std::fs::read_to_string(self.path("component.json")).expect("read component.json")
    }

    pub fn read_lockfile_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_lockfile()).expect("parse component.json")
    }

    /// Run pinion in this environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        let bin = env!("CARGO_BIN_EXE_pinion");
        let output = Command::new(bin)
            .args(args)
            .current_dir(self.root.path())
            .output()
            .expect("run pinion binary");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
