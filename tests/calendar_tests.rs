use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::env;

mod common;
use common::{collect, init_db, register_staff, setup_test_db, ttk};

/// Unique HOME per test so the session file never leaks between tests.
fn setup_test_home(name: &str) -> String {
    let mut path = env::temp_dir();
    path.push(format!("{}_tokentally_home", name));
    std::fs::remove_dir_all(&path).ok();
    std::fs::create_dir_all(&path).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_calendar_marks_collection_days() {
    let db_path = setup_test_db("calendar_marks");
    init_db(&db_path);
    register_staff(&db_path, "1", "Alice", "10", "alice@example.com", "X");

    collect(&db_path, "1", "2024-03-15", "09:30");
    collect(&db_path, "1", "2024-03-20", "10:00");

    ttk()
        .args([
            "--db", &db_path, "--test", "calendar", "--staff", "1", "--month", "2024-03",
        ])
        .assert()
        .success()
        .stdout(contains("Collection calendar — March 2024 — Alice (tag 10)"))
        .stdout(contains("[15]"))
        .stdout(contains("[20]"));
}

#[test]
fn test_calendar_day_with_events_shows_times() {
    let db_path = setup_test_db("calendar_day_hit");
    init_db(&db_path);
    register_staff(&db_path, "1", "Alice", "10", "alice@example.com", "X");

    collect(&db_path, "1", "2024-03-15", "09:30");

    ttk()
        .args([
            "--db", &db_path, "--test", "calendar", "--staff", "1", "--month", "2024-03",
            "--day", "15",
        ])
        .assert()
        .success()
        .stdout(contains("March 15, 2024"))
        .stdout(contains("Check-in  09:30:00"));
}

#[test]
fn test_calendar_day_without_events_is_noop() {
    let db_path = setup_test_db("calendar_day_miss");
    init_db(&db_path);
    register_staff(&db_path, "1", "Alice", "10", "alice@example.com", "X");

    collect(&db_path, "1", "2024-03-15", "09:30");

    // March 10 has no collection: no detail panel, just the notice
    ttk()
        .args([
            "--db", &db_path, "--test", "calendar", "--staff", "1", "--month", "2024-03",
            "--day", "10",
        ])
        .assert()
        .success()
        .stdout(contains("No collection on 2024-03-10"))
        .stdout(contains("Check-in ").not());
}

#[test]
fn test_calendar_unknown_staff_fails() {
    let db_path = setup_test_db("calendar_unknown");
    init_db(&db_path);

    ttk()
        .args(["--db", &db_path, "--test", "calendar", "--staff", "404"])
        .assert()
        .failure()
        .stderr(contains("Staff member 404 not found"));
}

#[test]
fn test_calendar_without_session_requires_login() {
    let db_path = setup_test_db("calendar_no_session");
    let home = setup_test_home("calendar_no_session");
    init_db(&db_path);

    ttk()
        .env("HOME", &home)
        .args(["--db", &db_path, "--test", "calendar"])
        .assert()
        .failure()
        .stderr(contains("No user is logged in"));
}

#[test]
fn test_login_enables_calendar_and_logout_clears_it() {
    let db_path = setup_test_db("login_logout");
    let home = setup_test_home("login_logout");
    init_db(&db_path);
    register_staff(&db_path, "1", "Alice", "10", "alice@example.com", "X");
    collect(&db_path, "1", "2024-03-15", "09:30");

    ttk()
        .env("HOME", &home)
        .args(["--db", &db_path, "--test", "login", "--staff", "1"])
        .assert()
        .success()
        .stdout(contains("Logged in as Alice"));

    // Calendar now defaults to the session user
    ttk()
        .env("HOME", &home)
        .args(["--db", &db_path, "--test", "calendar", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("[15]"));

    ttk()
        .env("HOME", &home)
        .args(["--db", &db_path, "--test", "logout"])
        .assert()
        .success()
        .stdout(contains("Logged out."));

    ttk()
        .env("HOME", &home)
        .args(["--db", &db_path, "--test", "calendar"])
        .assert()
        .failure()
        .stderr(contains("No user is logged in"));
}

#[test]
fn test_login_unknown_staff_fails() {
    let db_path = setup_test_db("login_unknown");
    let home = setup_test_home("login_unknown");
    init_db(&db_path);

    ttk()
        .env("HOME", &home)
        .args(["--db", &db_path, "--test", "login", "--staff", "404"])
        .assert()
        .failure()
        .stderr(contains("Staff member 404 not found"));
}
