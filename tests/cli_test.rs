//! Integration tests for the peridot binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("peridot.yml"), config).unwrap();
    temp
}

fn peridot(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("peridot"));
    cmd.current_dir(dir.path())
        .env_remove("PERIDOT_AUTO")
        .env_remove("PERIDOT_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

const ALL_PRESENT: &str = r#"
dependencies: []
custom:
  - name: Shell
    check:
      type: command_succeeds
      command: "true"
"#;

const ONE_MISSING: &str = r#"
dependencies: []
custom:
  - name: Shell
    check:
      type: command_succeeds
      command: "true"
  - name: Frobnicator
    check:
      type: command
      command: peridot-test-frobnicator-404
    website: https://frob.example.org/
    website_comments: any release after 2.0
"#;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("peridot"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("platform"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("peridot"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[cfg(unix)]
#[test]
fn check_all_present_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(ALL_PRESENT);
    peridot(&temp)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking for required software..."))
        .stdout(predicate::str::contains(" * Shell... found"))
        .stdout(predicate::str::contains("Installation instructions").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn check_missing_in_auto_mode_prints_instructions() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(ONE_MISSING);
    peridot(&temp)
        .args(["check", "--auto", "--no-color"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(" * Frobnicator... not found"))
        .stdout(predicate::str::contains(
            "Please download it from https://frob.example.org/",
        ))
        .stdout(predicate::str::contains("(any release after 2.0)"))
        .stdout(predicate::str::contains("To install Shell").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn check_missing_continues_after_enter() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(ONE_MISSING);
    peridot(&temp)
        .args(["check", "--no-color"])
        .write_stdin("\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Press Enter to continue, or Ctrl-C to abort.",
        ))
        .stdout(predicate::str::contains(
            "Installation instructions for required software",
        ));
    Ok(())
}

#[cfg(unix)]
#[test]
fn check_missing_with_closed_stdin_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(ONE_MISSING);
    peridot(&temp)
        .args(["check", "--no-color"])
        .write_stdin("")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Installation instructions").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn auto_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(ONE_MISSING);
    peridot(&temp)
        .args(["check", "--no-color"])
        .env("PERIDOT_AUTO", "true")
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Please download it from"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn check_named_subset() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(ONE_MISSING);
    peridot(&temp)
        .args(["check", "Shell", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Frobnicator").not());
    Ok(())
}

#[test]
fn check_unknown_dependency_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(ALL_PRESENT);
    peridot(&temp)
        .args(["check", "cobol", "--no-color"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Unknown dependency: cobol"));
    Ok(())
}

#[test]
fn explicit_missing_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    peridot(&temp)
        .args(["--config", "nope.yml", "list", "--no-color"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("nope.yml"));
    Ok(())
}

#[test]
fn invalid_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("dependencies: [cobol]\n");
    peridot(&temp)
        .args(["list", "--no-color"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("cobol"));
    Ok(())
}

#[test]
fn list_shows_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    peridot(&temp)
        .args(["list", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GNU Automake"))
        .stdout(predicate::str::contains("OpenSSL headers"));
    Ok(())
}

#[test]
fn platform_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = peridot(&temp).args(["platform", "--json"]).output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let expected = if cfg!(target_os = "macos") { "bundle" } else { "so" };
    assert_eq!(json["library_extension"], expected);
    if cfg!(target_os = "linux") {
        assert!(json["linux_distro"].is_string());
    } else {
        assert!(json["linux_distro"].is_null());
    }
    Ok(())
}

#[test]
fn debug_logs_go_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    peridot(&temp)
        .args(["platform", "--json", "--debug"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Peridot starting"))
        .stdout(predicate::str::starts_with("{"));
    Ok(())
}
