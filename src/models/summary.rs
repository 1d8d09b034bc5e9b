/// Headline counters shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total_staff: i64,
    pub collected: i64,
    /// May be negative when events reference staff ids missing from the
    /// roster; see `core::summary::build_summary`.
    pub not_collected: i64,
}
