//! Error handling integration tests for the safecp CLI.
//!
//! These tests verify usage errors and precondition failures:
//! - Wrong positional arity prints usage and exits non-zero
//! - Directory sources are rejected
//! - Diagnostics name the failing operation

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_no_arguments_is_usage_error() {
    let mut cmd = cargo_bin_cmd!("safecp");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_one_argument_is_usage_error() {
    let src = TempDir::new().unwrap();
    fs::write(src.path().join("only.txt"), "content").unwrap();

    let mut cmd = cargo_bin_cmd!("safecp");
    cmd.arg(src.path().join("only.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

/// Three positional arguments must fail before any filesystem access:
/// even a valid copy pair is rejected and the destination is not created.
#[test]
fn test_three_arguments_is_usage_error() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("a.txt"), "content").unwrap();

    let mut cmd = cargo_bin_cmd!("safecp");
    cmd.arg(src.path().join("a.txt"))
        .arg(dst.path().join("b.txt"))
        .arg(dst.path().join("c.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));

    assert!(!dst.path().join("b.txt").exists());
    assert!(!dst.path().join("c.txt").exists());
}

#[test]
fn test_directory_source_is_rejected() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::create_dir(src.path().join("subdir")).unwrap();

    let mut cmd = cargo_bin_cmd!("safecp");
    cmd.arg(src.path().join("subdir"))
        .arg(dst.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a directory"));

    assert!(!dst.path().join("out").exists());
}

/// Fatal diagnostics go to stderr prefixed with the program name and
/// carry the OS-level cause.
#[test]
fn test_diagnostic_names_cause() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("safecp");
    cmd.arg(src.path().join("missing.bin"))
        .arg(dst.path().join("out.bin"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("safecp:")
                .and(predicate::str::contains("No such file").or(predicate::str::contains("os error"))),
        );
}
