//! Record Repository Client: typed queries over the three application
//! tables. All other components treat the returned rows as immutable
//! value snapshots.

use crate::errors::{AppError, AppResult};
use crate::models::collection::CollectionEvent;
use crate::models::control::ControlCommand;
use crate::models::staff::Staff;
use crate::utils::date::{format_ts, parse_ts};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Result, Row};

pub fn map_staff_row(row: &Row) -> Result<Staff> {
    Ok(Staff {
        staff_id: row.get("staffid")?,
        staff_name: row.get("staffname")?,
        tag: row.get("tag")?,
        email: row.get("email")?,
        lab: row.get("lab")?,
    })
}

pub fn map_collection_row(row: &Row) -> Result<CollectionEvent> {
    let ts_str: String = row.get("time_collected")?;

    let time_collected = parse_ts(&ts_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(ts_str.clone())),
        )
    })?;

    Ok(CollectionEvent {
        id: row.get("id")?,
        staff_id: row.get("staffid")?,
        tag: row.get("tag")?,
        time_collected,
    })
}

/// Full roster, ordered by staff name ascending.
pub fn list_staff(conn: &Connection) -> AppResult<Vec<Staff>> {
    let mut stmt = conn.prepare(
        "SELECT staffid, staffname, tag, email, lab
         FROM staff
         ORDER BY staffname ASC",
    )?;

    let rows = stmt.query_map([], map_staff_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_staff(conn: &Connection, staff_id: i64) -> AppResult<Option<Staff>> {
    let mut stmt = conn.prepare(
        "SELECT staffid, staffname, tag, email, lab
         FROM staff
         WHERE staffid = ?1",
    )?;

    let mut rows = stmt.query_map([staff_id], map_staff_row)?;
    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

/// Batch lookup used to hydrate the events-to-staff join.
pub fn find_staff_by_ids(conn: &Connection, ids: &[i64]) -> AppResult<Vec<Staff>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["?"; ids.len()].join(",");
    let sql = format!(
        "SELECT staffid, staffname, tag, email, lab
         FROM staff
         WHERE staffid IN ({})
         ORDER BY staffname ASC",
        placeholders
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(ids.iter()), map_staff_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Collection events with `start <= time_collected <= end` (inclusive both
/// ends), newest first.
pub fn list_collections(
    conn: &Connection,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> AppResult<Vec<CollectionEvent>> {
    let mut stmt = conn.prepare(
        "SELECT id, staffid, tag, time_collected
         FROM food_collections
         WHERE time_collected >= ?1 AND time_collected <= ?2
         ORDER BY time_collected DESC",
    )?;

    let rows = stmt.query_map([format_ts(start), format_ts(end)], map_collection_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Same window query restricted to one staff member (monthly profile view).
pub fn list_collections_for_staff(
    conn: &Connection,
    staff_id: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> AppResult<Vec<CollectionEvent>> {
    let mut stmt = conn.prepare(
        "SELECT id, staffid, tag, time_collected
         FROM food_collections
         WHERE staffid = ?1
           AND time_collected >= ?2 AND time_collected <= ?3
         ORDER BY time_collected DESC",
    )?;

    let rows = stmt.query_map(
        params![staff_id, format_ts(start), format_ts(end)],
        map_collection_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a new staff member. The staff id is caller-assigned; a duplicate
/// id is a conflict, not an upsert.
pub fn insert_staff(conn: &Connection, staff: &Staff) -> AppResult<()> {
    if find_staff(conn, staff.staff_id)?.is_some() {
        return Err(AppError::Conflict(format!(
            "staff id {} already exists",
            staff.staff_id
        )));
    }

    conn.execute(
        "INSERT INTO staff (staffid, staffname, tag, email, lab)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            staff.staff_id,
            staff.staff_name,
            staff.tag,
            staff.email,
            staff.lab
        ],
    )?;
    Ok(())
}

/// Write the registration side-channel row. Its consumer is the external
/// fingerprint-capture process; nothing here reads it back.
pub fn insert_control(conn: &Connection, cmd: &ControlCommand) -> AppResult<()> {
    conn.execute(
        "INSERT INTO control (id, mode, staffid, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            cmd.id,
            cmd.mode.to_db_str(),
            cmd.staff_id,
            format_ts(cmd.created_at)
        ],
    )?;
    Ok(())
}

/// Insert a collection event, enforcing one collection per staff member
/// per UTC calendar day.
pub fn insert_collection(conn: &Connection, event: &CollectionEvent) -> AppResult<()> {
    let day = event.date_str();

    let mut stmt = conn.prepare(
        "SELECT 1 FROM food_collections
         WHERE staffid = ?1 AND substr(time_collected, 1, 10) = ?2
         LIMIT 1",
    )?;
    if stmt.exists(params![event.staff_id, day])? {
        return Err(AppError::Conflict(format!(
            "staff {} already collected a token on {}",
            event.staff_id, day
        )));
    }

    conn.execute(
        "INSERT INTO food_collections (id, staffid, tag, time_collected)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            event.id,
            event.staff_id,
            event.tag,
            format_ts(event.time_collected)
        ],
    )?;
    Ok(())
}
