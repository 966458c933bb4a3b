//! Raw ANSI escapes for inline coloring of report output.

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Green for time gained, red for time owed, plain for dead even.
pub fn color_for_delta(value: i64) -> &'static str {
    match value.signum() {
        1 => GREEN,
        -1 => RED,
        _ => RESET,
    }
}
