//! CLI integration tests
//!
//! Every vault operation prompts for the master password on a real
//! terminal, so these tests drive the non-interactive surface:
//! argument parsing, help output, the config report, and the guard
//! that rejects piped input.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn keystash() -> Command {
    Command::cargo_bin("keystash").unwrap()
}

#[test]
fn test_help_lists_every_subcommand() {
    keystash()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("save"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version_flag_prints_package_version() {
    keystash()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_bare_invocation_prints_usage_hints() {
    keystash()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "keystash - a secure CLI password manager",
        ))
        .stdout(predicate::str::contains(
            "Run 'keystash --help' for usage information.",
        ));
}

#[test]
fn test_config_reports_paths_and_unset_master_password() {
    let dir = TempDir::new().unwrap();

    keystash()
        .env("KEYSTASH_DATA_DIR", dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("keystash configuration"))
        .stdout(predicate::str::contains(dir.path().to_str().unwrap()))
        .stdout(predicate::str::contains("credentials.json"))
        .stdout(predicate::str::contains("Master password: not set"));
}

#[test]
fn test_config_reports_set_master_password_when_record_exists() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("master.envelope"), "armored-record").unwrap();

    keystash()
        .env("KEYSTASH_DATA_DIR", dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Master password: set"));
}

#[test]
fn test_vault_commands_refuse_piped_input() {
    let dir = TempDir::new().unwrap();

    // Supplying the password on stdin must not bypass the prompt.
    keystash()
        .env("KEYSTASH_DATA_DIR", dir.path())
        .arg("list")
        .write_stdin("hunter2\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not running in a terminal"));

    // The aborted attempt must not leave a verification record behind.
    assert!(!dir.path().join("master.envelope").exists());
}

#[test]
fn test_unknown_subcommand_is_rejected() {
    keystash()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_save_requires_a_name_argument() {
    keystash()
        .arg("save")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<NAME>"));
}
