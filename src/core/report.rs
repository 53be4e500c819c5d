//! Outcome and report types.
//!
//! The report is the single artifact a run produces. Field names in the
//! serialized form are stable: downstream renderers key on them.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Kind of value being propagated. Same transport path, different store
/// operation; secrets are additionally never logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Secret,
    Var,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::Secret => f.write_str("secret"),
            ItemKind::Var => f.write_str("var"),
        }
    }
}

/// Result of attempting one work item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    /// Write-side name, the one reporting cares about.
    pub name: String,
    pub target_identifier: String,
    pub kind: ItemKind,
    pub succeeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl Outcome {
    pub fn success(name: String, target: &str, kind: ItemKind) -> Self {
        Self {
            name,
            target_identifier: target.to_string(),
            kind,
            succeeded: true,
            error_detail: None,
        }
    }

    pub fn failure(name: String, target: &str, kind: ItemKind, detail: impl Into<String>) -> Self {
        Self {
            name,
            target_identifier: target.to_string(),
            kind,
            succeeded: false,
            error_detail: Some(detail.into()),
        }
    }
}

/// Aggregate of one run, in attempt order: target-major, secrets before
/// vars, list order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub timestamp: DateTime<Utc>,
    pub total_count: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub outcomes: Vec<Outcome>,
}

impl SyncReport {
    pub fn new(outcomes: Vec<Outcome>) -> Self {
        let total_count = outcomes.len();
        let failure_count = outcomes.iter().filter(|o| !o.succeeded).count();
        Self {
            timestamp: Utc::now(),
            total_count,
            success_count: total_count - failure_count,
            failure_count,
            outcomes,
        }
    }

    /// Whether every attempted item succeeded.
    pub fn is_clean(&self) -> bool {
        self.failure_count == 0
    }
}
