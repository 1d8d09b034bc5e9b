//! Tests for the polling insert watcher. These drive the watcher against a
//! real on-disk database and a second writer connection, the same shape the
//! `dashboard --watch` loop uses.

use std::sync::mpsc;
use std::time::Duration;

mod common;
use common::{init_db, setup_test_db};

use tokentally::db::watch::CollectionWatcher;

const POLL: Duration = Duration::from_millis(100);
// Generous so a loaded CI box never flakes
const WAIT: Duration = Duration::from_secs(10);

#[test]
fn test_watcher_fires_on_collection_insert() {
    let db_path = setup_test_db("watch_fires");
    init_db(&db_path);

    let (tx, rx) = mpsc::channel();
    let mut watcher = CollectionWatcher::spawn(&db_path, POLL, move || {
        tx.send(()).ok();
    })
    .expect("spawn watcher");

    let writer = rusqlite::Connection::open(&db_path).expect("open writer");
    writer
        .execute(
            "INSERT INTO food_collections (id, staffid, tag, time_collected)
             VALUES ('evt-w1', 1, 10, '2024-03-15T09:30:00Z')",
            [],
        )
        .unwrap();

    rx.recv_timeout(WAIT).expect("watcher callback");
    watcher.stop();
}

#[test]
fn test_watcher_ignores_non_collection_writes() {
    let db_path = setup_test_db("watch_ignores");
    init_db(&db_path);

    let (tx, rx) = mpsc::channel();
    let mut watcher = CollectionWatcher::spawn(&db_path, POLL, move || {
        tx.send(()).ok();
    })
    .expect("spawn watcher");

    // A staff insert bumps data_version but leaves the collection count alone
    let writer = rusqlite::Connection::open(&db_path).expect("open writer");
    writer
        .execute(
            "INSERT INTO staff (staffid, staffname, tag, email, lab)
             VALUES (1, 'Alice', 10, 'alice@example.com', 'X')",
            [],
        )
        .unwrap();

    assert!(rx.recv_timeout(Duration::from_secs(1)).is_err());

    // And a real collection insert afterwards is still seen
    writer
        .execute(
            "INSERT INTO food_collections (id, staffid, tag, time_collected)
             VALUES ('evt-w2', 1, 10, '2024-03-15T09:30:00Z')",
            [],
        )
        .unwrap();
    rx.recv_timeout(WAIT).expect("watcher callback");

    watcher.stop();
}

#[test]
fn test_watcher_stop_joins_cleanly() {
    let db_path = setup_test_db("watch_stop");
    init_db(&db_path);

    let mut watcher = CollectionWatcher::spawn(&db_path, POLL, || {}).expect("spawn watcher");
    watcher.stop();
    // Idempotent: a second stop (and the eventual Drop) must not hang
    watcher.stop();
}
