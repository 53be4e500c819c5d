//! Test support utilities for fanout integration tests.
//!
//! Provides an isolated temp project dir and command builders. No
//! process-global state is mutated; child processes use `.current_dir()`
//! and explicit env vars so tests can safely run in parallel.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Config with two targets and three global secrets, no overrides.
pub const TWO_TARGETS_THREE_SECRETS: &str = "\
source: acme/hub
secrets:
  - FANOUT_T_ALPHA
  - FANOUT_T_BETA
  - FANOUT_T_GAMMA
targets:
  - repository: acme/web
  - repository: acme/api
";

/// Test environment with an isolated temp project directory.
pub struct Test {
    pub dir: TempDir,
}

impl Test {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with a `.fanout.yml` already written.
    pub fn with_config(contents: &str) -> Self {
        let t = Self::new();
        t.write_config(contents);
        t
    }

    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.dir.path().join(".fanout.yml"), contents)
            .expect("failed to write config");
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Create a fanout command isolated from ambient GitHub credentials.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("fanout").expect("failed to find fanout binary");
        cmd.current_dir(self.dir.path());
        cmd.env_remove("GH_TOKEN");
        cmd.env_remove("GITHUB_TOKEN");
        cmd.env_remove("GITHUB_REPOSITORY");
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Command with a (fake) token so runs get past the pre-flight check.
    pub fn cmd_with_token(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.env("GH_TOKEN", "test-token");
        cmd
    }

    /// Command with a token and values for the three-secret fixture.
    pub fn cmd_with_values(&self) -> Command {
        let mut cmd = self.cmd_with_token();
        cmd.env("FANOUT_T_ALPHA", "1");
        cmd.env("FANOUT_T_BETA", "2");
        cmd.env("FANOUT_T_GAMMA", "3");
        cmd
    }
}
