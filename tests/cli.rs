use assert_cmd::Command;
use predicates::str::contains;
use std::path::PathBuf;

const BINARY_NAME: &str = "ecostar";

/// Helper to get a temporary home directory
fn temp_home() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get the database path in the temp dir
fn database_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("data").join("ecostar_pro.db")
}

/// A command isolated from the real home directory and database.
fn ecostar(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", dir.path())
        .env("ECOSTAR_DB", database_path(dir))
        .current_dir(dir.path());
    cmd
}

fn register_alice(dir: &tempfile::TempDir) {
    ecostar(dir)
        .args(["register-user", "--username", "alice", "--password", "pw1"])
        .args(["--name", "Alice", "--email", "a@x.com"])
        .assert()
        .success()
        .stdout(contains("Account created successfully!"));
}

#[test]
/// Help command should list the subcommands.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("register-user"))
        .stdout(contains("summary"));
}

#[test]
fn register_user_creates_database() {
    let tmp = temp_home();
    assert!(!database_path(&tmp).exists());
    register_alice(&tmp);
    assert!(database_path(&tmp).exists());
}

#[test]
fn duplicate_username_fails() {
    let tmp = temp_home();
    register_alice(&tmp);
    ecostar(&tmp)
        .args(["register-user", "--username", "alice", "--password", "other"])
        .assert()
        .failure()
        .stdout(contains("already exists"));
}

#[test]
fn record_then_summary() {
    let tmp = temp_home();
    register_alice(&tmp);

    ecostar(&tmp)
        .args(["record", "--username", "alice", "--password", "pw1"])
        .args(["--utility", "electricity", "--value", "123.5"])
        .assert()
        .success()
        .stdout(contains("Electricity data added!"));
    ecostar(&tmp)
        .args(["record", "--username", "alice", "--password", "pw1"])
        .args(["--utility", "CNG", "--value", " 2 "])
        .assert()
        .success();

    ecostar(&tmp)
        .args(["summary", "--username", "alice", "--password", "pw1"])
        .args(["--period", "all"])
        .assert()
        .success()
        .stdout(contains("Electricity: 123.5 kWh, Water: 0 L, Gas: 0 m3"))
        .stdout(contains("CNG"));
}

#[test]
fn invalid_reading_is_rejected() {
    let tmp = temp_home();
    register_alice(&tmp);
    ecostar(&tmp)
        .args(["record", "--username", "alice", "--password", "pw1"])
        .args(["--utility", "gas", "--value", "abc"])
        .assert()
        .failure()
        .stdout(contains("Invalid input"));
}

#[test]
fn wrong_password_is_rejected() {
    let tmp = temp_home();
    register_alice(&tmp);
    ecostar(&tmp)
        .args(["summary", "--username", "alice", "--password", "nope"])
        .assert()
        .failure()
        .stdout(contains("Invalid username or password."))
        .stderr(contains("InvalidCredentials"));
}

#[test]
fn unknown_user_is_rejected_like_wrong_password() {
    let tmp = temp_home();
    register_alice(&tmp);
    ecostar(&tmp)
        .args(["record", "--username", "mallory", "--password", "pw1"])
        .args(["--utility", "gas", "--value", "1"])
        .assert()
        .failure()
        .stdout(contains("Invalid username or password."))
        .stderr(contains("InvalidCredentials"));
}

#[test]
fn watch_requires_an_existing_directory() {
    let tmp = temp_home();
    ecostar(&tmp)
        .args(["watch", "--dir", "missing", "--debounce-ms", "10", "--", "true"])
        .assert()
        .failure();
}

#[test]
fn unknown_utility_is_a_usage_error() {
    let tmp = temp_home();
    ecostar(&tmp)
        .args(["record", "--username", "alice", "--password", "pw1"])
        .args(["--utility", "coal", "--value", "1"])
        .assert()
        .failure();
}
