use crate::core::filter::filter_staff;
use crate::core::join::{join_events_with_staff, JoinedEvent};
use crate::core::summary::{build_summary, checked_in_set};
use crate::errors::AppResult;
use crate::models::filter::StaffFilter;
use crate::models::staff::Staff;
use crate::models::summary::Summary;
use crate::utils::date::{end_of_day, start_of_day};
use crate::{db::repo, models::collection::CollectionEvent};
use chrono::NaiveDate;
use rusqlite::Connection;
use std::collections::HashSet;

/// Everything the dashboard renders for one day.
#[derive(Debug)]
pub struct DashboardModel {
    pub date: NaiveDate,
    pub summary: Summary,
    /// Full roster after filter predicates, roster order preserved.
    pub staff: Vec<Staff>,
    /// Staff ids with a collection in the day window.
    pub checked_in: HashSet<i64>,
    /// The day's events joined to staff, newest first.
    pub checkins: Vec<JoinedEvent>,
}

/// Assemble the dashboard for the given day.
///
/// Fetch order follows the view: the day's events, then a batch staff
/// lookup for the distinct staff ids present, then the full roster. All
/// fetches are sequential on one connection, so there is no stale-response
/// interleaving to guard against; a watch cycle rebuilds this model from
/// scratch instead of merging increments.
pub fn build_dashboard(
    conn: &Connection,
    date: NaiveDate,
    filter: &StaffFilter,
) -> AppResult<DashboardModel> {
    let events = repo::list_collections(conn, start_of_day(date), end_of_day(date))?;

    let event_staff = repo::find_staff_by_ids(conn, &distinct_staff_ids(&events))?;
    let checkins = join_events_with_staff(&events, &event_staff);

    let roster = repo::list_staff(conn)?;
    let checked_in = checked_in_set(&events);
    let summary = build_summary(roster.len(), &events);
    let staff = filter_staff(&roster, filter, &checked_in);

    Ok(DashboardModel {
        date,
        summary,
        staff,
        checked_in,
        checkins,
    })
}

fn distinct_staff_ids(events: &[CollectionEvent]) -> Vec<i64> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for e in events {
        if seen.insert(e.staff_id) {
            out.push(e.staff_id);
        }
    }
    out
}
