//! Insert-notification subscription over the collections table.
//!
//! SQLite has no push channel, so this is a polling watcher: a background
//! thread re-checks `PRAGMA data_version` (which moves when another
//! connection commits) and fires the callback when the collections row
//! count has grown. Delivery is at-least-once and carries no payload;
//! consumers respond with a full window refetch, which is idempotent.

use crate::errors::AppResult;
use rusqlite::Connection;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct CollectionWatcher {
    cancel: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl CollectionWatcher {
    /// Start watching the database at `db_path`. The callback runs on the
    /// watcher thread, once per detected insert batch.
    pub fn spawn<F>(db_path: &str, interval: Duration, mut callback: F) -> AppResult<Self>
    where
        F: FnMut() + Send + 'static,
    {
        let conn = Connection::open(db_path)?;
        let cancel = Arc::new(AtomicBool::new(false));
        let cancel_flag = Arc::clone(&cancel);

        let mut last_version = data_version(&conn)?;
        let mut last_count = collection_count(&conn)?;

        let handle = thread::spawn(move || {
            // Sleep in short slices so stop() stays responsive.
            let slice = Duration::from_millis(50).min(interval);

            while !cancel_flag.load(Ordering::Relaxed) {
                let mut slept = Duration::ZERO;
                while slept < interval && !cancel_flag.load(Ordering::Relaxed) {
                    thread::sleep(slice);
                    slept += slice;
                }
                if cancel_flag.load(Ordering::Relaxed) {
                    break;
                }

                let version = match data_version(&conn) {
                    Ok(v) => v,
                    Err(_) => continue, // transient; retry next tick
                };
                if version == last_version {
                    continue;
                }
                last_version = version;

                let count = match collection_count(&conn) {
                    Ok(c) => c,
                    Err(_) => continue,
                };
                if count > last_count {
                    last_count = count;
                    callback();
                } else {
                    last_count = count;
                }
            }
        });

        Ok(Self {
            cancel,
            handle: Some(handle),
        })
    }

    /// Cancel the subscription and wait for the watcher thread to exit.
    pub fn stop(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for CollectionWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

fn data_version(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("PRAGMA data_version", [], |row| row.get(0))
}

fn collection_count(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM food_collections", [], |row| row.get(0))
}
