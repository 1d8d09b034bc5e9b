/// Collection status of a staff member within the queried window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Collected,
    Pending,
}

impl CheckStatus {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "collected" | "checked-in" => Some(CheckStatus::Collected),
            "pending" | "not-checked-in" => Some(CheckStatus::Pending),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CheckStatus::Collected => "Collected",
            CheckStatus::Pending => "Pending",
        }
    }
}

/// Roster filter predicates. All present predicates are AND-combined;
/// an absent predicate matches everything.
#[derive(Debug, Clone, Default)]
pub struct StaffFilter {
    /// Case-insensitive substring match against name and email.
    pub search: Option<String>,
    /// Case-insensitive exact match against the lab label.
    pub lab: Option<String>,
    /// Substring match against the tag rendered as a string.
    pub tag: Option<String>,
    /// Match against checked-in set membership.
    pub status: Option<CheckStatus>,
}

impl StaffFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.lab.is_none() && self.tag.is_none() && self.status.is_none()
    }
}
