use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

// A bogus gitfile makes `git rev-list` fail even inside an enclosing checkout.
fn detached_package() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".git"), "not a gitdir\n").unwrap();
    dir
}

fn cli(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_git_versioning"));
    cmd.arg("--dir").arg(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_git_versioning"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("git_versioning"));
}

#[test]
fn dev_version_without_history() {
    let pkg = detached_package();
    cli(pkg.path())
        .args(["--major", "0", "--minor", "1", "--dev"])
        .assert()
        .success()
        .stdout("0.1dev\n");
}

#[test]
fn dev_version_from_record() {
    let pkg = detached_package();
    fs::write(pkg.path().join("GIT_VERSION"), "21 123acf1\n").unwrap();
    cli(pkg.path())
        .args(["--major", "0", "--minor", "1", "--dev", "show"])
        .assert()
        .success()
        .stdout("0.1dev-r21-123acf1\n");
}

#[test]
fn release_version_ignores_record() {
    let pkg = detached_package();
    fs::write(pkg.path().join("GIT_VERSION"), "21 123acf1\n").unwrap();
    cli(pkg.path())
        .args(["--major", "0", "--minor", "5"])
        .assert()
        .success()
        .stdout("0.5\n");
    cli(pkg.path())
        .args(["git", "--major", "0", "--minor", "5"])
        .assert()
        .success()
        .stdout("0.5-r21-123acf1\n");
}

#[test]
fn malformed_record_is_ignored() {
    let pkg = detached_package();
    fs::write(pkg.path().join("GIT_VERSION"), "revs=None; sha=None").unwrap();
    cli(pkg.path())
        .args(["--major", "1", "--dev"])
        .assert()
        .success()
        .stdout("1dev\n");
}

#[test]
fn info_reads_config_file() {
    let pkg = detached_package();
    let config = pkg.path().join("version.json");
    fs::write(&config, r#"{"major": 0, "minor": 5, "dev": true}"#).unwrap();
    fs::write(pkg.path().join("GIT_VERSION"), "190 423abc1\n").unwrap();

    let out = cli(pkg.path())
        .args(["info", "--format", "json", "--config"])
        .arg(&config)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["version"], "0.5dev-r190-423abc1");
    assert_eq!(report["semantic_version"], "0.5dev");
    assert_eq!(report["git_revs"], 190);
    assert_eq!(report["git_sha"], "423abc1");
}

#[test]
fn write_without_history_leaves_empty_record() {
    let pkg = detached_package();
    cli(pkg.path())
        .args(["write", "--major", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GIT_VERSION"));
    assert_eq!(fs::read_to_string(pkg.path().join("GIT_VERSION")).unwrap(), "");
}

#[test]
fn write_into_missing_directory_fails() {
    let pkg = detached_package();
    cli(&pkg.path().join("gone"))
        .args(["write", "--major", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("writing revision record"));
}
