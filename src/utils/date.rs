//! Calendar window utilities.
//!
//! Single timezone policy for the whole application: timestamps are stored
//! and compared in UTC, formatted as `%Y-%m-%dT%H:%M:%SZ` so lexicographic
//! order in SQL equals chronological order. Anything local-time happens at
//! the presentation boundary only.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Canonical on-disk timestamp format.
pub const TS_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn format_ts(ts: DateTime<Utc>) -> String {
    ts.format(TS_FORMAT).to_string()
}

pub fn parse_ts(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse "YYYY-MM" into the first day of that month.
pub fn parse_month(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").ok()
}

/// Inclusive lower bound of the calendar day containing `d` (00:00:00 UTC).
pub fn start_of_day(d: NaiveDate) -> DateTime<Utc> {
    d.and_hms_opt(0, 0, 0).unwrap().and_utc()
}

/// Inclusive upper bound of the calendar day containing `d` (23:59:59 UTC).
pub fn end_of_day(d: NaiveDate) -> DateTime<Utc> {
    d.and_hms_opt(23, 59, 59).unwrap().and_utc()
}

/// Inclusive lower bound of the calendar month containing `d`.
pub fn start_of_month(d: NaiveDate) -> DateTime<Utc> {
    start_of_day(first_day_of_month(d))
}

/// Inclusive upper bound of the calendar month containing `d`.
pub fn end_of_month(d: NaiveDate) -> DateTime<Utc> {
    end_of_day(last_day_of_month(d))
}

pub fn first_day_of_month(d: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(d.year(), d.month(), 1).unwrap()
}

pub fn last_day_of_month(d: NaiveDate) -> NaiveDate {
    *days_in_month(d).last().unwrap()
}

/// Every day of the month containing `d`, 1st through last, in order.
pub fn days_in_month(d: NaiveDate) -> Vec<NaiveDate> {
    let month = d.month();
    let mut out = Vec::new();
    let mut cur = NaiveDate::from_ymd_opt(d.year(), month, 1).unwrap();

    while cur.month() == month {
        out.push(cur);
        cur = cur.succ_opt().unwrap();
    }

    out
}

/// True iff both instants fall on the same UTC calendar day.
pub fn is_same_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}

/// True iff the instant falls on the given UTC calendar day.
pub fn falls_on(ts: DateTime<Utc>, day: NaiveDate) -> bool {
    ts.date_naive() == day
}

/// Move to the same day of the previous/next month, clamping the day
/// number to the target month length (Jan 31 -> Feb 28/29).
pub fn shift_month(d: NaiveDate, delta: i32) -> NaiveDate {
    let zero_based = d.year() * 12 + d.month() as i32 - 1 + delta;
    let year = zero_based.div_euclid(12);
    let month = zero_based.rem_euclid(12) as u32 + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let last = last_day_of_month(first);
    NaiveDate::from_ymd_opt(year, month, d.day().min(last.day())).unwrap()
}
