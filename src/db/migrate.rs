use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the three application tables with the canonical schema.
///
/// `time_collected` and `created_at` hold UTC timestamps in the fixed
/// "%Y-%m-%dT%H:%M:%SZ" format, so TEXT comparison is chronological.
fn create_base_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS staff (
            staffid    INTEGER PRIMARY KEY,
            staffname  TEXT NOT NULL,
            tag        INTEGER NOT NULL,
            email      TEXT NOT NULL,
            lab        TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS food_collections (
            id             TEXT PRIMARY KEY,
            staffid        INTEGER NOT NULL,
            tag            INTEGER NOT NULL,
            time_collected TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS control (
            id         TEXT PRIMARY KEY,
            mode       TEXT NOT NULL CHECK(mode IN ('register')),
            staffid    INTEGER NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_collections_time
            ON food_collections(time_collected);
        CREATE INDEX IF NOT EXISTS idx_collections_staff_time
            ON food_collections(staffid, time_collected);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut stmt = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(stmt.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_migration_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// One collection per staff member per calendar day, enforced in the store.
///
/// The first 10 characters of the canonical timestamp are the UTC date, so
/// the expression index is equivalent to a per-day uniqueness constraint.
/// Pre-existing duplicate rows would make the index creation fail; in that
/// case the constraint stays unenforced and the application-level check in
/// `repo::insert_collection` is the only guard.
fn migrate_unique_daily_collection(conn: &Connection) -> Result<()> {
    let version = "20240406_0001_unique_daily_collection";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    match conn.execute_batch(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_collections_staff_day
            ON food_collections(staffid, substr(time_collected, 1, 10));
        "#,
    ) {
        Ok(()) => {
            mark_migration_applied(conn, version, "Unique (staffid, day) index on food_collections")?;
            success(format!(
                "Migration applied: {} → one collection per staff per day",
                version
            ));
            Ok(())
        }
        Err(e) => {
            crate::ui::messages::warning(format!(
                "Could not enforce per-day uniqueness (existing duplicate rows?): {}",
                e
            ));
            Ok(())
        }
    }
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_base_tables(conn)?;
    migrate_unique_daily_collection(conn)?;
    Ok(())
}

/// `PRAGMA integrity_check` wrapper used by `db --check`.
pub fn check_integrity(conn: &Connection) -> Result<String> {
    conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))
}
