//! End-to-end tests for the `cmt` binary.
//!
//! Interactive flows need a terminal, so these tests stick to the paths that
//! fail (or print) before any prompt is shown.

use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

fn cmt() -> Command {
    Command::cargo_bin("cmt").unwrap()
}

#[test]
fn help_lists_all_commands() {
    let output = cmt().arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["init", "commit", "update"] {
        assert!(stdout.contains(command), "help should mention {command}");
    }
}

#[test]
fn version_matches_manifest() {
    let output = cmt().arg("--version").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn commit_with_unknown_convention_fails_fast() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".cmtrc.json"),
        r#"{ "convention": "bogus", "uppercase": false }"#,
    )
    .unwrap();

    let output = cmt()
        .current_dir(temp_dir.path())
        .arg("commit")
        .output()
        .unwrap();

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unsupported convention type: bogus"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn commit_with_malformed_preferences_fails_fast() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".cmtrc.json"), "{ not json").unwrap();

    let output = cmt()
        .current_dir(temp_dir.path())
        .arg("commit")
        .output()
        .unwrap();

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid configuration format"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn commit_outside_a_repository_without_preferences_fails() {
    // No preference file and no git history to fall back on
    let temp_dir = TempDir::new().unwrap();

    let output = cmt()
        .current_dir(temp_dir.path())
        .arg("commit")
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn unknown_subcommand_is_rejected() {
    let output = cmt().arg("yolo").output().unwrap();
    assert!(!output.status.success());
}
