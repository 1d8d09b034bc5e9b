//! Library-API tests for the aggregation engine: join totality, checked-in
//! deduplication, summary arithmetic, and roster filtering.

use chrono::{TimeZone, Utc};
use std::collections::HashSet;

use tokentally::core::filter::filter_staff;
use tokentally::core::join::join_events_with_staff;
use tokentally::core::summary::{build_summary, checked_in_set};
use tokentally::models::collection::CollectionEvent;
use tokentally::models::filter::{CheckStatus, StaffFilter};
use tokentally::models::staff::Staff;

fn staff(id: i64, name: &str, tag: i64, lab: &str) -> Staff {
    Staff {
        staff_id: id,
        staff_name: name.to_string(),
        tag,
        email: format!("{}@example.com", name.to_lowercase()),
        lab: lab.to_string(),
    }
}

fn event(staff_id: i64, tag: i64, hour: u32) -> CollectionEvent {
    CollectionEvent::new(
        staff_id,
        tag,
        Utc.with_ymd_and_hms(2024, 3, 15, hour, 0, 0).unwrap(),
    )
}

#[test]
fn join_is_total_and_keeps_unmatched_events() {
    let roster = vec![staff(1, "Alice", 10, "X")];
    let events = vec![event(1, 10, 9), event(2, 20, 10)];

    let joined = join_events_with_staff(&events, &roster);

    assert_eq!(joined.len(), events.len());
    assert_eq!(joined[0].staff.as_ref().unwrap().staff_name, "Alice");
    assert!(joined[1].staff.is_none());
    assert_eq!(joined[1].event.staff_id, 2);
}

#[test]
fn join_first_match_wins_on_duplicate_roster_ids() {
    // Degenerate roster: two entries with the same staff id
    let roster = vec![staff(1, "Alice", 10, "X"), staff(1, "Impostor", 11, "Y")];
    let events = vec![event(1, 10, 9)];

    let joined = join_events_with_staff(&events, &roster);

    assert_eq!(joined[0].staff.as_ref().unwrap().staff_name, "Alice");
}

#[test]
fn checked_in_set_dedups_by_staff_id() {
    // Two events for the same member on the same day count once
    let events = vec![event(1, 10, 9), event(1, 10, 12), event(2, 20, 10)];

    let set = checked_in_set(&events);

    assert_eq!(set.len(), 2);
    assert!(set.len() <= events.len());
    assert!(set.contains(&1) && set.contains(&2));
}

#[test]
fn summary_counts_add_up_when_roster_covers_events() {
    let events = vec![event(1, 10, 9)];
    let summary = build_summary(2, &events);

    assert_eq!(summary.total_staff, 2);
    assert_eq!(summary.collected, 1);
    assert_eq!(summary.not_collected, 1);
    assert_eq!(summary.collected + summary.not_collected, summary.total_staff);
}

#[test]
fn summary_goes_negative_on_dangling_staff_ids() {
    // One roster member, two distinct collectors: the mismatch is surfaced,
    // not floored away
    let events = vec![event(1, 10, 9), event(99, 42, 10)];
    let summary = build_summary(1, &events);

    assert_eq!(summary.collected, 2);
    assert_eq!(summary.not_collected, -1);
}

#[test]
fn empty_filter_returns_roster_unchanged() {
    let roster = vec![
        staff(2, "Bob", 20, "Y"),
        staff(1, "Alice", 10, "X"),
        staff(3, "Carol", 30, "X"),
    ];
    let filter = StaffFilter::default();
    assert!(filter.is_empty());

    let out = filter_staff(&roster, &filter, &HashSet::new());

    assert_eq!(out.len(), roster.len());
    let names: Vec<&str> = out.iter().map(|s| s.staff_name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Alice", "Carol"]); // order preserved
}

#[test]
fn status_filter_splits_alice_and_bob() {
    let roster = vec![staff(1, "Alice", 10, "X"), staff(2, "Bob", 20, "Y")];
    let events = vec![event(1, 10, 9)];
    let checked_in = checked_in_set(&events);

    let collected = filter_staff(
        &roster,
        &StaffFilter {
            status: Some(CheckStatus::Collected),
            ..Default::default()
        },
        &checked_in,
    );
    let pending = filter_staff(
        &roster,
        &StaffFilter {
            status: Some(CheckStatus::Pending),
            ..Default::default()
        },
        &checked_in,
    );

    assert_eq!(collected.len(), 1);
    assert_eq!(collected[0].staff_name, "Alice");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].staff_name, "Bob");
}

#[test]
fn filter_predicates_are_and_combined() {
    let roster = vec![
        staff(1, "Alice", 10, "X"),
        staff(2, "Alina", 110, "Y"),
        staff(3, "Bob", 10, "X"),
    ];

    // search matches Alice and Alina; lab narrows to Alice
    let out = filter_staff(
        &roster,
        &StaffFilter {
            search: Some("ali".to_string()),
            lab: Some("x".to_string()),
            ..Default::default()
        },
        &HashSet::new(),
    );
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].staff_name, "Alice");

    // tag "10" is a substring match: 10 and 110 qualify
    let out = filter_staff(
        &roster,
        &StaffFilter {
            tag: Some("10".to_string()),
            ..Default::default()
        },
        &HashSet::new(),
    );
    assert_eq!(out.len(), 3);

    let out = filter_staff(
        &roster,
        &StaffFilter {
            tag: Some("110".to_string()),
            ..Default::default()
        },
        &HashSet::new(),
    );
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].staff_name, "Alina");
}

#[test]
fn search_matches_email_too() {
    let roster = vec![staff(1, "Alice", 10, "X"), staff(2, "Bob", 20, "Y")];

    let out = filter_staff(
        &roster,
        &StaffFilter {
            search: Some("BOB@EXAMPLE".to_string()),
            ..Default::default()
        },
        &HashSet::new(),
    );

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].staff_name, "Bob");
}
