//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn lingograde() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("lingograde").unwrap()
}

#[test]
fn help_output() {
    lingograde()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("translation grading"));
}

#[test]
fn version_output() {
    lingograde()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lingograde"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    lingograde()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created lingograde.toml"))
        .stdout(predicate::str::contains("Next steps"));

    assert!(dir.path().join("lingograde.toml").exists());
    let content = std::fs::read_to_string(dir.path().join("lingograde.toml")).unwrap();
    assert!(content.contains("${OPENAI_API_KEY}"));
    assert!(content.contains("spreadsheet_id"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    // First init
    lingograde()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    // Second init should skip
    lingograde()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn try_without_config_fails() {
    let dir = TempDir::new().unwrap();

    lingograde()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .args(["try", "Le chat s'est assis sur le tapis."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no configuration found"));
}

#[test]
fn try_rejects_empty_translation() {
    lingograde()
        .args(["try", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("translation must not be empty"));
}

#[test]
fn run_without_config_fails() {
    let dir = TempDir::new().unwrap();

    lingograde()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn missing_explicit_config_fails() {
    lingograde()
        .args(["run", "--config", "/nonexistent/lingograde.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
