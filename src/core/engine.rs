//! Sync orchestration.
//!
//! Resolves, per target, which whitelist entries to transfer and under what
//! name, attempts each one exactly once, and aggregates the outcomes into a
//! deterministic report. Items run strictly sequentially: target-major,
//! secrets before vars, list order. A failing item never stops the run;
//! reordering targets only reorders the report.

use tracing::{debug, info, warn};

use crate::core::config::SyncConfig;
use crate::core::env::ValueSource;
use crate::core::mapping::NameMapping;
use crate::core::report::{ItemKind, Outcome, SyncReport};
use crate::core::store::SecretStore;
use crate::error::Error;

/// Per-run behavior switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Resolve and report without writing to the store.
    pub dry_run: bool,
    /// Log each item at info level instead of debug.
    pub verbose: bool,
}

/// Run one sync over the whole whitelist.
///
/// Holds no state between runs; re-running with unchanged config and
/// environment produces equivalent outcomes (store writes overwrite).
pub fn run(
    config: &SyncConfig,
    store: &dyn SecretStore,
    values: &dyn ValueSource,
    options: &SyncOptions,
) -> SyncReport {
    let mut outcomes = Vec::new();

    for target in &config.targets {
        // An override replaces the global list entirely.
        let secrets = target.secrets.as_deref().unwrap_or(&config.secrets);
        let vars = target.vars.as_deref().unwrap_or(&config.vars);

        for (kind, entries) in [(ItemKind::Secret, secrets), (ItemKind::Var, vars)] {
            for entry in entries {
                let outcome = apply(store, values, options, &target.repository, kind, entry);
                if let Some(detail) = &outcome.error_detail {
                    warn!(
                        repo = %outcome.target_identifier,
                        name = %outcome.name,
                        %kind,
                        %detail,
                        "item failed"
                    );
                } else if options.verbose {
                    info!(
                        repo = %outcome.target_identifier,
                        name = %outcome.name,
                        %kind,
                        dry_run = options.dry_run,
                        "item synced"
                    );
                } else {
                    debug!(
                        repo = %outcome.target_identifier,
                        name = %outcome.name,
                        %kind,
                        "item synced"
                    );
                }
                outcomes.push(outcome);
            }
        }
    }

    SyncReport::new(outcomes)
}

/// Attempt one work item. Never logs the value.
fn apply(
    store: &dyn SecretStore,
    values: &dyn ValueSource,
    options: &SyncOptions,
    repository: &str,
    kind: ItemKind,
    entry: &str,
) -> Outcome {
    let mapping = NameMapping::parse(entry);

    let Some(value) = values.get(&mapping.read_as) else {
        let detail = Error::ValueNotFound(mapping.read_as).to_string();
        return Outcome::failure(mapping.write_as, repository, kind, detail);
    };

    if options.dry_run {
        return Outcome::success(mapping.write_as, repository, kind);
    }

    let result = match kind {
        ItemKind::Secret => store.set_secret(repository, &mapping.write_as, &value),
        ItemKind::Var => store.set_variable(repository, &mapping.write_as, &value),
    };

    match result {
        Ok(()) => Outcome::success(mapping.write_as, repository, kind),
        Err(e) => Outcome::failure(mapping.write_as, repository, kind, e.to_string()),
    }
}
