//! E2E tests for grading runs where the fixture cannot be written
//! The report contract must hold even when the working directory fights back

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const CLI_BINARY: &str = "target/debug/rubric-cli";

fn run_in(dir: &Path) -> Output {
    Command::new(CLI_BINARY)
        .args(["--dir", dir.to_str().unwrap()])
        .output()
        .unwrap_or_else(|_| panic!("Failed to execute {CLI_BINARY}"))
}

#[test]
fn test_missing_directory_still_emits_report() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does_not_exist");

    let output = run_in(&missing);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error creating test file:"));
    assert!(!stdout.contains("Manual verification checklist:"));
    assert!(stdout.ends_with(
        "{\"_presentation\": \"semantic\"}\n{\"scores\": {\"grep_basic\": 0}}\n"
    ));
}

#[cfg(unix)]
#[test]
fn test_read_only_directory_still_emits_report() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    let output = run_in(&locked);

    // Unlock before asserting so cleanup works even on failure.
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(output.status.success());
    assert!(!locked.join("grep_test_file.txt").exists());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error creating test file:"));
    assert!(stdout.ends_with(
        "{\"_presentation\": \"semantic\"}\n{\"scores\": {\"grep_basic\": 0}}\n"
    ));
}

#[test]
fn test_failure_and_success_reports_are_identical() {
    let writable = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does_not_exist");

    let ok = run_in(writable.path());
    let failed = run_in(&missing);

    let tail = |output: &Output| {
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        stdout.lines().rev().take(2).map(String::from).collect::<Vec<_>>()
    };
    assert_eq!(tail(&ok), tail(&failed));
}
