use serde::{Deserialize, Serialize};

/// A registered staff member, entitled to one token collection per day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub staff_id: i64,   // ⇔ staff.staffid (INTEGER PK, caller-assigned)
    pub staff_name: String, // ⇔ staff.staffname
    pub tag: i64,        // ⇔ staff.tag (short code, not unique)
    pub email: String,   // ⇔ staff.email
    pub lab: String,     // ⇔ staff.lab (group/department label)
}

impl Staff {
    /// Initials used in compact listings ("Ada Lovelace" -> "AL").
    pub fn initials(&self) -> String {
        self.staff_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .collect::<String>()
            .to_uppercase()
    }
}
