use crate::models::filter::{CheckStatus, StaffFilter};
use crate::models::staff::Staff;
use std::collections::HashSet;

/// Apply the AND-combined filter predicates to the roster, preserving its
/// order. An empty filter returns the roster unchanged.
pub fn filter_staff(
    roster: &[Staff],
    filter: &StaffFilter,
    checked_in: &HashSet<i64>,
) -> Vec<Staff> {
    roster
        .iter()
        .filter(|member| matches(member, filter, checked_in))
        .cloned()
        .collect()
}

fn matches(member: &Staff, filter: &StaffFilter, checked_in: &HashSet<i64>) -> bool {
    if let Some(search) = &filter.search {
        let needle = search.to_lowercase();
        let in_name = member.staff_name.to_lowercase().contains(&needle);
        let in_email = member.email.to_lowercase().contains(&needle);
        if !in_name && !in_email {
            return false;
        }
    }

    if let Some(lab) = &filter.lab {
        if !member.lab.eq_ignore_ascii_case(lab) {
            return false;
        }
    }

    if let Some(tag) = &filter.tag {
        if !member.tag.to_string().contains(tag.as_str()) {
            return false;
        }
    }

    if let Some(status) = filter.status {
        let collected = checked_in.contains(&member.staff_id);
        match status {
            CheckStatus::Collected if !collected => return false,
            CheckStatus::Pending if collected => return false,
            _ => {}
        }
    }

    true
}
