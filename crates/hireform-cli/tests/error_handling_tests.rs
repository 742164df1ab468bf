//! Tests for error handling, exit codes and suggestions.

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hireform(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hireform").unwrap();
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn missing_script_is_not_found() {
    let home = TempDir::new().unwrap();
    hireform(home.path())
        .args(["replay", "nope.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Event source failed"));
}

#[test]
fn missing_snapshot_is_not_found() {
    let home = TempDir::new().unwrap();
    hireform(home.path())
        .args(["validate", "missing.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Cannot read form snapshot"))
        .stderr(predicate::str::contains("Event source failed").not());
}

#[test]
fn yaml_script_is_unsupported() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("s.yaml"), "step: []").unwrap();

    hireform(home.path())
        .args(["replay", "s.yaml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported file format 'yaml'"))
        .stderr(predicate::str::contains("Use a .toml or .json file"));
}

#[test]
fn unknown_skill_names_the_step_and_choices() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("s.toml"),
        "[[step]]\naction = \"check\"\nvalue = \"Rust\"\n",
    )
    .unwrap();

    hireform(home.path())
        .args(["replay", "s.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("step 1: unknown skill 'Rust'"));
}

#[test]
fn unknown_position_in_snapshot_suggests_choices() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("a.json"), r#"{"position":"Chef"}"#).unwrap();

    hireform(home.path())
        .args(["validate", "a.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid form snapshot"))
        .stderr(predicate::str::contains("Developer, Designer or Manager"));
}

#[test]
fn unknown_config_key_is_configuration_error() {
    let home = TempDir::new().unwrap();
    hireform(home.path())
        .args(["config", "get", "form.colour"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn explicit_missing_config_file_is_configuration_error() {
    let home = TempDir::new().unwrap();
    hireform(home.path())
        .args(["--config", "missing.toml", "config", "list"])
        .assert()
        .code(4);
}

#[test]
fn fill_without_terminal_points_to_replay() {
    let home = TempDir::new().unwrap();
    hireform(home.path())
        .arg("fill")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("replay").or(predicate::str::contains("interactive")));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let home = TempDir::new().unwrap();
    hireform(home.path()).arg("frobnicate").assert().code(2);
}
