use crate::models::collection::CollectionEvent;
use crate::models::summary::Summary;
use std::collections::HashSet;

/// Distinct staff ids with at least one collection event in the window.
/// Two events for the same member on the same day count once.
pub fn checked_in_set(events: &[CollectionEvent]) -> HashSet<i64> {
    events.iter().map(|e| e.staff_id).collect()
}

/// Headline counters for a day's events.
///
/// `not_collected = total_staff - collected` and is deliberately not
/// floored at zero: a negative value means events reference staff ids
/// absent from the roster, and masking that would hide the data problem.
pub fn build_summary(total_staff: usize, events: &[CollectionEvent]) -> Summary {
    let collected = checked_in_set(events).len() as i64;
    let total_staff = total_staff as i64;

    Summary {
        total_staff,
        collected,
        not_collected: total_staff - collected,
    }
}
