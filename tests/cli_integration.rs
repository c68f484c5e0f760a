use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn global_gradle_clean() -> Command {
    Command::cargo_bin("global-gradle-clean").unwrap()
}

#[test]
fn shows_help() {
    global_gradle_clean()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("gradlew clean"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn shows_version() {
    global_gradle_clean()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_directory_fails_with_message() {
    let tmp = TempDir::new().unwrap();

    global_gradle_clean()
        .arg(tmp.path().join("does-not-exist"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "The specified file/directory does not exist",
        ));
}

#[test]
fn empty_directory_finds_nothing() {
    let tmp = TempDir::new().unwrap();

    global_gradle_clean()
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("0 projects found to be cleaned\n"));
}

#[test]
fn defaults_to_current_directory() {
    let tmp = TempDir::new().unwrap();

    global_gradle_clean()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0 projects found to be cleaned"));
}

#[test]
fn json_requires_dry_run() {
    global_gradle_clean()
        .arg("--json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--dry-run"));
}

#[test]
fn generates_completions() {
    global_gradle_clean()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("global-gradle-clean"));
}
