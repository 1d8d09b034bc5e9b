use crate::db::repo;
use crate::errors::AppResult;
use crate::models::collection::CollectionEvent;
use crate::utils::date::{days_in_month, end_of_month, falls_on, start_of_month};
use chrono::NaiveDate;
use rusqlite::Connection;

/// One cell of the month grid.
#[derive(Debug, Clone, Copy)]
pub struct DayCell {
    pub date: NaiveDate,
    pub collected: bool,
}

/// One staff member's collection history for a calendar month.
#[derive(Debug)]
pub struct MonthModel {
    pub staff_id: i64,
    /// First day of the month this model covers.
    pub month: NaiveDate,
    pub days: Vec<DayCell>,
    /// The month's events, newest first.
    pub events: Vec<CollectionEvent>,
}

/// Fetch one month of collections for a staff member and bucket them into
/// calendar cells.
pub fn build_month(conn: &Connection, staff_id: i64, month: NaiveDate) -> AppResult<MonthModel> {
    let events =
        repo::list_collections_for_staff(conn, staff_id, start_of_month(month), end_of_month(month))?;

    let days = days_in_month(month)
        .into_iter()
        .map(|date| DayCell {
            date,
            collected: events.iter().any(|e| falls_on(e.time_collected, date)),
        })
        .collect();

    Ok(MonthModel {
        staff_id,
        month: crate::utils::date::first_day_of_month(month),
        days,
        events,
    })
}

impl MonthModel {
    /// Events of one calendar day, or `None` when the day has none.
    ///
    /// Selecting an empty day is a no-op: the caller keeps whatever
    /// selection it had rather than switching to an empty panel.
    pub fn select_day(&self, day: NaiveDate) -> Option<Vec<&CollectionEvent>> {
        let hits: Vec<&CollectionEvent> = self
            .events
            .iter()
            .filter(|e| falls_on(e.time_collected, day))
            .collect();

        if hits.is_empty() {
            None
        } else {
            Some(hits)
        }
    }

    pub fn has_collection(&self, day: NaiveDate) -> bool {
        self.days.iter().any(|c| c.date == day && c.collected)
    }
}
