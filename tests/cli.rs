use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use rusqlite::Connection;
use tempfile::TempDir;

fn padsweep_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_padsweep"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn create_launchpad_db(root: &Path) -> std::path::PathBuf {
    let db_path = root.join("q1/abc/0/com.apple.dock.launchpad/db/db");
    fs::create_dir_all(db_path.parent().unwrap()).unwrap();
    Connection::open(&db_path)
        .unwrap()
        .execute_batch("CREATE TABLE apps (item_id INTEGER PRIMARY KEY, title VARCHAR);")
        .unwrap();
    db_path
}

#[test]
fn missing_database_exits_with_error() {
    let tmp = TempDir::new().unwrap();

    padsweep_cmd()
        .arg("--root")
        .arg(tmp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Could not find the database file"));
}

#[test]
fn fatal_error_is_logged_at_default_level() {
    let tmp = TempDir::new().unwrap();

    padsweep_cmd()
        .arg("--root")
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("ERROR"))
        .stderr(predicate::str::contains("DatabaseNotFound"));
}

#[test]
fn missing_root_exits_with_error() {
    let tmp = TempDir::new().unwrap();

    padsweep_cmd()
        .arg("--root")
        .arg(tmp.path().join("nowhere"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to search"));
}

#[test]
fn empty_launchpad_finishes_without_prompting() {
    let tmp = TempDir::new().unwrap();
    create_launchpad_db(tmp.path());

    padsweep_cmd()
        .arg("--root")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No launcher entries found"));
}

#[test]
fn explicit_database_must_exist() {
    let tmp = TempDir::new().unwrap();

    padsweep_cmd()
        .arg("--database")
        .arg(tmp.path().join("db"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open database"));
}

// /private/var/folders does not exist on Linux, so a run without --root
// must fail on the fixed root even when the environment names another one
#[cfg(target_os = "linux")]
#[test]
fn environment_does_not_override_search_root() {
    let with_db = TempDir::new().unwrap();
    create_launchpad_db(with_db.path());

    padsweep_cmd()
        .env("PADSWEEP_ROOT", with_db.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("/private/var/folders"));
}

#[test]
fn help_lists_options() {
    padsweep_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--root"))
        .stdout(predicate::str::contains("--no-restart"));
}
