//! `.fanout.yml` loading and validation.
//!
//! The configuration is the whitelist: global secret and variable names,
//! and the targets they propagate to. Targets may override either list;
//! an override replaces the global list entirely, it never merges.

use std::path::Path;

use crate::core::document::{self, Node};
use crate::error::{Error, Result};

pub const CONFIG_FILE: &str = ".fanout.yml";

/// The validated whitelist, immutable for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Informational label for the authoritative side. When absent the CLI
    /// fills it from `GITHUB_REPOSITORY`; it never affects the sync itself.
    pub source: Option<String>,
    /// Global secret entries, at least one. Duplicates are kept; each
    /// occurrence becomes its own work item.
    pub secrets: Vec<String>,
    /// Global variable entries, possibly empty.
    pub vars: Vec<String>,
    pub targets: Vec<Target>,
}

/// One destination repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// `owner/name`, opaque to the core.
    pub repository: String,
    /// When present, replaces the global secret list for this target.
    pub secrets: Option<Vec<String>>,
    /// When present, replaces the global variable list for this target.
    pub vars: Option<Vec<String>>,
}

impl SyncConfig {
    /// Load and validate a configuration document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate a configuration document.
    ///
    /// Validation order is fixed, first failure wins: `secrets` must hold at
    /// least one entry, `targets` at least one entry, and every target needs
    /// a non-empty `repository`.
    pub fn parse(text: &str) -> Result<Self> {
        let doc = document::parse(text)?;

        let source = doc
            .get("source")
            .and_then(Node::as_str)
            .map(str::to_string)
            .filter(|s| !s.is_empty());

        let secrets = match doc.get("secrets") {
            Some(node) => string_list("secrets", node)?,
            None => Vec::new(),
        };
        if secrets.is_empty() {
            return Err(Error::MissingField("secrets".to_string()));
        }

        let vars = match doc.get("vars") {
            Some(node) => string_list("vars", node)?,
            None => Vec::new(),
        };

        let target_nodes = doc
            .get("targets")
            .and_then(Node::as_list)
            .unwrap_or_default();
        if target_nodes.is_empty() {
            return Err(Error::MissingField("targets".to_string()));
        }
        let targets = target_nodes
            .iter()
            .enumerate()
            .map(|(index, node)| Target::from_node(index, node))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            source,
            secrets,
            vars,
            targets,
        })
    }
}

impl Target {
    fn from_node(index: usize, node: &Node) -> Result<Self> {
        let repository = node
            .get("repository")
            .and_then(Node::as_str)
            .unwrap_or("")
            .trim()
            .to_string();
        if repository.is_empty() {
            return Err(Error::MissingField(format!("targets[{index}].repository")));
        }

        let secrets = node
            .get("secrets")
            .map(|n| string_list("secrets", n))
            .transpose()?;
        let vars = node.get("vars").map(|n| string_list("vars", n)).transpose()?;

        Ok(Self {
            repository,
            secrets,
            vars,
        })
    }
}

/// Read a list of plain names. A dangling `key:` parses as an empty scalar
/// and counts as an empty list.
fn string_list(field: &str, node: &Node) -> Result<Vec<String>> {
    let Some(items) = node.as_list() else {
        if matches!(node, Node::Scalar(s) if s.is_empty()) {
            return Ok(Vec::new());
        }
        return Err(Error::InvalidConfig(format!("`{field}` must be a list")));
    };
    items
        .iter()
        .map(|item| match item {
            Node::Scalar(s) => Ok(s.clone()),
            _ => Err(Error::InvalidConfig(format!(
                "`{field}` entries must be plain names"
            ))),
        })
        .collect()
}
