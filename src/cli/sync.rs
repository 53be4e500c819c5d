//! The sync run: load the config, pre-flight, orchestrate, report.

use tracing::info;

use crate::cli::{output, Cli};
use crate::core::config::{SyncConfig, CONFIG_FILE};
use crate::core::engine::{self, SyncOptions};
use crate::core::env::Environment;
use crate::core::report::SyncReport;
use crate::core::status;
use crate::core::store::gh::{self, GhStore};
use crate::error::{Error, Result};

pub fn execute(cli: &Cli) -> Result<()> {
    let path = cli.config.clone().unwrap_or_else(|| CONFIG_FILE.into());
    let config = SyncConfig::load(&path)?;

    // Advisory: names the authoritative side in the report header.
    let source = config
        .source
        .clone()
        .or_else(|| std::env::var("GITHUB_REPOSITORY").ok());

    // Fatal pre-flight: no partial work without a credential.
    let token = gh::token_from_env().ok_or(Error::MissingToken)?;

    let values = match &cli.env_file {
        Some(p) => Environment::with_env_file(p)?,
        None => Environment::new(),
    };
    let store = GhStore::new(token);

    let options = SyncOptions {
        dry_run: cli.dry_run,
        verbose: cli.verbose,
    };
    info!(
        config = %path.display(),
        dry_run = options.dry_run,
        targets = config.targets.len(),
        "starting sync"
    );

    let report = engine::run(&config, &store, &values, &options);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, source.as_deref(), options.dry_run);
    }

    // The status artifact only ever reflects a clean live run.
    if let Some(status_path) = &cli.status_file {
        if !options.dry_run && report.is_clean() {
            status::update_file(status_path, &report)?;
            output::dimmed(&format!("status written to {}", status_path.display()));
        }
    }

    if !report.is_clean() {
        return Err(Error::SyncFailed {
            failed: report.failure_count,
            total: report.total_count,
        });
    }

    Ok(())
}

fn print_report(report: &SyncReport, source: Option<&str>, dry_run: bool) {
    let title = if dry_run { "fanout sync (dry run)" } else { "fanout sync" };
    output::section(title);
    if let Some(label) = source {
        output::kv("from", label);
    }
    if dry_run {
        output::warn("dry run: nothing will be written");
    }
    println!();

    for outcome in &report.outcomes {
        let line = format!(
            "{}  {} ({})",
            outcome.target_identifier, outcome.name, outcome.kind
        );
        match outcome.error_detail.as_deref() {
            None => output::item_ok(&line),
            Some(detail) => output::item_failed(&line, detail),
        }
    }

    println!();
    if report.is_clean() {
        let suffix = if dry_run { ", nothing written" } else { "" };
        output::success(&format!(
            "{} of {} items synced{suffix}",
            report.success_count, report.total_count
        ));
    } else {
        output::error(&format!(
            "{} of {} items failed",
            report.failure_count, report.total_count
        ));
    }
}
