//! Date and time utility functions
//!
//! Creation times are stored as RFC 3339 UTC strings; these helpers turn them
//! into short local-time labels for the task list.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate};

/// Default format for creation times
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Check that a chrono format string contains no invalid specifiers
pub fn is_valid_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Parse a stored creation time into local time
pub fn parse_created_at(created_at: &str) -> Option<DateTime<Local>> {
    DateTime::parse_from_rfc3339(created_at)
        .ok()
        .map(|dt| dt.with_timezone(&Local))
}

/// Format a stored creation time relative to `today`
///
/// # Arguments
/// * `created_at` - RFC 3339 timestamp as stored with the task
/// * `format` - chrono format used for dates other than today and yesterday
/// * `today` - local date the label is relative to
///
/// # Returns
/// * `String` - "today 14:30", "yesterday 09:05", or `format` applied.
///   Unparseable input is returned unchanged.
pub fn format_created_at(created_at: &str, format: &str, today: NaiveDate) -> String {
    let Some(local) = parse_created_at(created_at) else {
        return created_at.to_string();
    };

    let time = local.format("%H:%M");
    match (today - local.date_naive()).num_days() {
        0 => format!("today {}", time),
        1 => format!("yesterday {}", time),
        _ => local.format(format).to_string(),
    }
}

/// Format a stored creation time relative to the current local date
pub fn format_created_at_now(created_at: &str, format: &str) -> String {
    format_created_at(created_at, format, Local::now().date_naive())
}
