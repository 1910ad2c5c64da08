//! Integration tests for the golden-util binary.
//!
//! These tests exercise the actual compiled binary using assert_cmd.

use assert_cmd::Command;
use golden_test_utils::GoldenTree;
use predicates::prelude::*;

/// Get a Command for the golden-util binary
fn golden_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("golden-util"));
    cmd.env("NO_COLOR", "1")
        .env_remove("GOLDEN_MANIFEST")
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Usage
// ============================================================================

#[test]
fn test_help_output() {
    golden_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--manifest"))
        .stdout(predicate::str::contains("--regen"));
}

#[test]
fn test_missing_manifest_flag_is_usage_error() {
    golden_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--manifest"));
}

#[test]
fn test_manifest_from_environment() {
    let mut tree = GoldenTree::new();
    tree.add("a.golden", "hello\n");
    tree.write_golden("a.golden", "hello\n");
    tree.write_ledger("a.golden\n");
    let manifest = tree.write_manifest();

    golden_cmd()
        .env("GOLDEN_MANIFEST", &manifest)
        .assert()
        .success()
        .stdout("=== TEST: a.golden\n--- PASS: a.golden\nPASS\n");
}

// ============================================================================
// Test mode
// ============================================================================

#[test]
fn test_single_entry_passes_with_exit_zero() {
    let mut tree = GoldenTree::new();
    tree.add("a.golden", "hello\n");
    tree.write_golden("a.golden", "hello\n");
    tree.write_ledger("a.golden\n");
    let manifest = tree.write_manifest();

    golden_cmd()
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .code(0)
        .stdout("=== TEST: a.golden\n--- PASS: a.golden\nPASS\n");
}

#[test]
fn test_failure_exits_one_with_regen_hint() {
    let mut tree = GoldenTree::new();
    tree.add("a.golden", "new\n");
    tree.write_golden("a.golden", "old\n");
    tree.write_ledger("a.golden\n");
    let manifest = tree.write_manifest();

    golden_cmd()
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("--- FAIL: a.golden"))
        .stdout(predicate::str::contains("-old\n+new\n"))
        .stdout(predicate::str::contains("FAIL\n"))
        .stdout(predicate::str::contains(
            "Run the test again with the --regen flag to regenerate goldens",
        ));
}

#[test]
fn test_malformed_manifest_is_single_line_error() {
    let tree = GoldenTree::new();
    let manifest = tree.write_raw_manifest("{\"entries\": [");

    golden_cmd()
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::starts_with("error: "))
        .stderr(predicate::str::contains("manifest.json"))
        .stderr(predicate::function(|s: &str| s.lines().count() == 1));
}

#[test]
fn test_invalid_manifest_reports_violation() {
    let mut tree = GoldenTree::new();
    tree.add("a.txt", "hello\n");
    let manifest = tree.write_manifest();

    golden_cmd()
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("a.txt: expected .golden extension"));
}

#[test]
fn test_missing_ledger_is_fatal() {
    let mut tree = GoldenTree::new();
    tree.add("a.golden", "hello\n");
    tree.remove_ledger();
    let manifest = tree.write_manifest();

    golden_cmd()
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("goldens.txt"));
}

// ============================================================================
// Regen mode
// ============================================================================

#[test]
fn test_regen_then_test() {
    let mut tree = GoldenTree::new();
    tree.add("x/a.golden", "hello\n");
    let manifest = tree.write_manifest();

    golden_cmd()
        .arg("--manifest")
        .arg(&manifest)
        .arg("--regen")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Regenerating goldens in "))
        .stdout(predicate::str::contains("Writing x/a.golden\n"));

    tree.assert_golden("x/a.golden", "hello\n");
    tree.assert_ledger("x/a.golden\n");

    golden_cmd()
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::ends_with("PASS\n"));
}

#[test]
fn test_regen_removes_stale_golden() {
    let mut tree = GoldenTree::new();
    tree.add("a.golden", "a\n");
    tree.write_golden("stale/b.golden", "b\n");
    tree.write_ledger("a.golden\nstale/b.golden\n");
    let manifest = tree.write_manifest();

    golden_cmd()
        .args(["--regen", "--manifest"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Removing stale/b.golden\n"));

    tree.assert_not_exists("stale");
    tree.assert_ledger("a.golden\n");
}
