//! Shared test utilities for ids-triage integration tests.
//!
//! Provides common helpers used across CLI test files to eliminate
//! boilerplate around building classify/triage commands and asserting
//! results.

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static TEST_CONFIG_HOME: OnceLock<PathBuf> = OnceLock::new();

/// An empty config home shared by all tests in this binary.
///
/// Keeps the binary from picking up a real `ids-triage/config.toml`,
/// whose `fail_on_alert`/`min_severity` overrides would flip the exit
/// codes and output asserted below.
#[allow(dead_code, deprecated)]
pub fn isolated_config_home() -> &'static Path {
    TEST_CONFIG_HOME.get_or_init(|| tempfile::TempDir::new().unwrap().into_path())
}

/// Returns a `Command` configured to run the `ids-triage` binary
/// against an isolated config home.
#[allow(dead_code, deprecated)]
pub fn ids_triage_cmd() -> Command {
    let config_home = isolated_config_home();
    let mut cmd = Command::cargo_bin("ids-triage").unwrap();
    // Cover both the XDG lookup and the HOME-derived fallback
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd.env("HOME", config_home);
    cmd
}

/// Builds a classify command for one outcome, executes it, and returns
/// the `Assert`.
#[allow(dead_code)]
pub fn classify(confidence: &str, attack_type: &str, result: &str) -> Assert {
    ids_triage_cmd()
        .arg("classify")
        .arg("--confidence")
        .arg(confidence)
        .arg("--attack-type")
        .arg(attack_type)
        .arg("--result")
        .arg(result)
        .assert()
}

/// Builds a triage command that reads JSON lines from stdin.
#[allow(dead_code)]
pub fn triage_stdin(input: &str) -> Assert {
    ids_triage_cmd()
        .arg("triage")
        .write_stdin(input.to_string())
        .assert()
}

/// Asserts that classifying the outcome prints the given severity label.
#[allow(dead_code)]
pub fn assert_severity(confidence: &str, attack_type: &str, result: &str, expected: &str) {
    classify(confidence, attack_type, result)
        .stdout(predicate::str::contains(expected));
}
