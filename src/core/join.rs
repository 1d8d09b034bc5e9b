use crate::models::collection::CollectionEvent;
use crate::models::staff::Staff;
use std::collections::HashMap;

/// A collection event paired with its staff record, when one exists.
#[derive(Debug, Clone)]
pub struct JoinedEvent {
    pub event: CollectionEvent,
    pub staff: Option<Staff>,
}

/// Join each event to the roster entry with the matching staff id.
///
/// Total: every input event produces exactly one output row. An event whose
/// staff id is missing from the roster keeps an empty staff slot so partial
/// data still renders. Should the roster degenerately contain duplicate
/// staff ids, the first occurrence wins.
pub fn join_events_with_staff(events: &[CollectionEvent], roster: &[Staff]) -> Vec<JoinedEvent> {
    let mut by_id: HashMap<i64, &Staff> = HashMap::with_capacity(roster.len());
    for member in roster {
        by_id.entry(member.staff_id).or_insert(member);
    }

    events
        .iter()
        .map(|event| JoinedEvent {
            event: event.clone(),
            staff: by_id.get(&event.staff_id).map(|s| (*s).clone()),
        })
        .collect()
}
