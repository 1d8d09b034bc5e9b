use chrono::{DateTime, Utc};
use serde::Serialize;

/// One food-token collection event ("check-in").
///
/// Immutable once created. `tag` is captured at event time so a check-in
/// row stays meaningful even when the staff roster join fails.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionEvent {
    pub id: String, // ⇔ food_collections.id (uuid v4)
    pub staff_id: i64, // ⇔ food_collections.staffid
    pub tag: i64,   // ⇔ food_collections.tag
    pub time_collected: DateTime<Utc>, // ⇔ food_collections.time_collected
}

impl CollectionEvent {
    pub fn new(staff_id: i64, tag: i64, time_collected: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            staff_id,
            tag,
            time_collected,
        }
    }

    /// Clock time for presentation ("09:31:07").
    pub fn time_str(&self) -> String {
        self.time_collected.format("%H:%M:%S").to_string()
    }

    /// Calendar date for presentation ("2024-03-15").
    pub fn date_str(&self) -> String {
        self.time_collected.format("%Y-%m-%d").to_string()
    }
}
