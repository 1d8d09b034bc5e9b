/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Status cell for the staff table: green when the member collected a
/// token in the window, grey otherwise.
pub fn colorize_status(label: &str, collected: bool) -> String {
    if collected {
        format!("{GREEN}{label}{RESET}")
    } else {
        format!("{GREY}{label}{RESET}")
    }
}

/// "Not collected" counter: anything above zero deserves attention,
/// a negative value signals dangling staff ids in the events.
pub fn color_for_pending(value: i64) -> &'static str {
    if value < 0 {
        RED
    } else if value > 0 {
        YELLOW
    } else {
        GREEN
    }
}
