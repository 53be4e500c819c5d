//! CLI integration tests.
//!
//! Live store writes are never exercised here; runs either use --dry-run or
//! fail before any item reaches the store.

mod support;
use support::{Test, TWO_TARGETS_THREE_SECRETS};

use predicates::prelude::*;

// --- surface ---

#[test]
fn test_help_short_circuits() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_version() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fanout"));
}

#[test]
fn test_unknown_trailing_arguments_ignored() {
    let t = Test::with_config(TWO_TARGETS_THREE_SECRETS);

    t.cmd_with_values()
        .args(["--dry-run", "--frobnicate", "extra"])
        .assert()
        .success();
}

#[test]
fn test_unknown_flag_does_not_disable_later_flags() {
    // An unknown flag ahead of --dry-run must not turn the run live.
    let t = Test::with_config(TWO_TARGETS_THREE_SECRETS);

    t.cmd_with_values()
        .args(["--frobnicate", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing will be written"));
}

// --- pre-flight failures ---

#[test]
fn test_missing_config_exits_nonzero() {
    let t = Test::new();

    t.cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_config_without_secrets_exits_nonzero() {
    let t = Test::with_config("targets:\n  - repository: acme/web\n");

    t.cmd_with_token()
        .assert()
        .failure()
        .stderr(predicate::str::contains("secrets"));
}

#[test]
fn test_parse_error_reports_line() {
    let t = Test::with_config("secrets:\n  - A\nnot a pair\n");

    t.cmd_with_token()
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn test_missing_token_aborts_before_any_work() {
    let t = Test::with_config(TWO_TARGETS_THREE_SECRETS);

    t.cmd()
        .env("FANOUT_T_ALPHA", "1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GH_TOKEN"));
}

#[test]
fn test_custom_config_path() {
    let t = Test::new();
    std::fs::write(t.path("other.yml"), TWO_TARGETS_THREE_SECRETS).unwrap();

    t.cmd_with_values()
        .args(["--dry-run", "--config", "other.yml"])
        .assert()
        .success();
}

// --- dry run ---

#[test]
fn test_dry_run_full_success() {
    let t = Test::with_config(TWO_TARGETS_THREE_SECRETS);

    t.cmd_with_values()
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("6 of 6 items synced"))
        .stdout(predicate::str::contains("acme/hub"));
}

#[test]
fn test_dry_run_json_report() {
    let t = Test::with_config(TWO_TARGETS_THREE_SECRETS);

    let output = t
        .cmd_with_values()
        .args(["--dry-run", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["totalCount"], 6);
    assert_eq!(report["successCount"], 6);
    assert_eq!(report["failureCount"], 0);

    let outcomes = report["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 6);
    assert_eq!(outcomes[0]["targetIdentifier"], "acme/web");
    assert_eq!(outcomes[0]["name"], "FANOUT_T_ALPHA");
    assert_eq!(outcomes[0]["kind"], "secret");
    assert_eq!(outcomes[3]["targetIdentifier"], "acme/api");
}

#[test]
fn test_rename_reported_under_write_name() {
    let t = Test::with_config(
        "secrets:\n  - FANOUT_T_ALPHA:RENAMED\ntargets:\n  - repository: acme/web\n",
    );

    let output = t
        .cmd_with_values()
        .args(["--dry-run", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["outcomes"][0]["name"], "RENAMED");
    assert_eq!(report["outcomes"][0]["succeeded"], true);
}

#[test]
fn test_dry_run_missing_value_fails_that_item_only() {
    let t = Test::with_config(TWO_TARGETS_THREE_SECRETS);

    let output = t
        .cmd_with_token()
        .env("FANOUT_T_ALPHA", "1")
        .env("FANOUT_T_BETA", "2")
        .args(["--dry-run", "--json"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    // stdout must be pure JSON; failure logs belong on stderr.
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("item failed"), "{stderr}");

    assert_eq!(report["failureCount"], 2);
    assert_eq!(report["successCount"], 4);

    let gamma = &report["outcomes"][2];
    assert_eq!(gamma["name"], "FANOUT_T_GAMMA");
    assert_eq!(gamma["succeeded"], false);
    assert!(gamma["errorDetail"]
        .as_str()
        .unwrap()
        .contains("no value found in environment"));
}

// --- env file ---

#[test]
fn test_env_file_supplies_values() {
    let t = Test::with_config(
        "secrets:\n  - FANOUT_T_FILE_ONLY\ntargets:\n  - repository: acme/web\n",
    );
    std::fs::write(t.path("values.env"), "FANOUT_T_FILE_ONLY=from-file\n").unwrap();

    t.cmd_with_token()
        .args(["--dry-run", "--env-file", "values.env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 1 items synced"));
}

#[test]
fn test_missing_env_file_is_fatal() {
    let t = Test::with_config(TWO_TARGETS_THREE_SECRETS);

    t.cmd_with_values()
        .args(["--dry-run", "--env-file", "nope.env"])
        .assert()
        .failure();
}

// --- status artifact suppression ---

#[test]
fn test_status_file_not_written_on_dry_run() {
    let t = Test::with_config(TWO_TARGETS_THREE_SECRETS);

    t.cmd_with_values()
        .args(["--dry-run", "--status-file", "STATUS.md"])
        .assert()
        .success();

    assert!(!t.path("STATUS.md").exists());
}

#[test]
fn test_status_file_not_written_on_failure() {
    // Every value is missing, so the live run fails before touching the
    // store and the status artifact must stay untouched.
    let t = Test::with_config(TWO_TARGETS_THREE_SECRETS);

    t.cmd_with_token()
        .args(["--status-file", "STATUS.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("items failed"));

    assert!(!t.path("STATUS.md").exists());
}
