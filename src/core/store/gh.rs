//! GitHub value store backed by the `gh` CLI.
//!
//! ## Requirements
//!
//! - `gh` CLI must be installed
//! - a token with access to every target repository
//!
//! The value travels over stdin so it never appears in an argument list.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::trace;

use super::SecretStore;
use crate::error::{Error, Result};

/// Environment variables consulted for the GitHub token, in order.
const TOKEN_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

/// Read the GitHub token from the environment.
pub fn token_from_env() -> Option<String> {
    TOKEN_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|t| !t.is_empty()))
}

/// `gh`-backed store. One process invocation per write.
pub struct GhStore {
    token: String,
}

impl GhStore {
    pub fn new(token: String) -> Self {
        Self { token }
    }

    fn set(&self, area: &str, repository: &str, name: &str, value: &str) -> Result<()> {
        trace!(area, repository, name, "invoking gh");

        let gh = which::which("gh")
            .map_err(|_| Error::Store("gh CLI not found on PATH".to_string()))?;

        let mut child = Command::new(gh)
            .args([area, "set", name, "--repo", repository])
            .env("GH_TOKEN", &self.token)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::Store(format!("failed to spawn gh: {e}")))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(value.as_bytes())
                .map_err(|e| Error::Store(format!("failed to write value to gh: {e}")))?;
            // Dropping stdin closes the pipe so gh sees EOF.
        }

        let output = child
            .wait_with_output()
            .map_err(|e| Error::Store(format!("failed to wait for gh: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Store(format!(
                "gh {area} set {name} on {repository} failed: {}",
                stderr.trim()
            )));
        }

        Ok(())
    }
}

impl SecretStore for GhStore {
    fn set_secret(&self, repository: &str, name: &str, value: &str) -> Result<()> {
        self.set("secret", repository, name, value)
    }

    fn set_variable(&self, repository: &str, name: &str, value: &str) -> Result<()> {
        self.set("variable", repository, name, value)
    }
}
