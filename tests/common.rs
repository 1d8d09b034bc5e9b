#![allow(dead_code)]
use assert_cmd::{cargo_bin_cmd, Command};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ttk() -> Command {
    cargo_bin_cmd!("tokentally")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tokentally.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the database schema for a test
pub fn init_db(db_path: &str) {
    ttk()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Register a staff member via the CLI
pub fn register_staff(db_path: &str, id: &str, name: &str, tag: &str, email: &str, lab: &str) {
    ttk()
        .args([
            "--db", db_path, "--test", "register", "--id", id, "--name", name, "--tag", tag,
            "--email", email, "--lab", lab,
        ])
        .assert()
        .success();
}

/// Record a collection for a staff member on a given date/time via the CLI
pub fn collect(db_path: &str, staff: &str, date: &str, time: &str) {
    ttk()
        .args([
            "--db", db_path, "--test", "collect", "--staff", staff, "--date", date, "--time", time,
        ])
        .assert()
        .success();
}

/// Small fixed roster used by several dashboard tests
pub fn seed_alice_and_bob(db_path: &str) {
    register_staff(db_path, "1", "Alice", "10", "alice@example.com", "X");
    register_staff(db_path, "2", "Bob", "20", "bob@example.com", "Y");
}
