//! Timestamp formatting utilities
//!
//! Log lines carry local wall-clock time at second resolution:
//! `2025-01-08 10:30:45`. There is no sub-second part and no offset.

use chrono::{DateTime, Local};

/// strftime pattern used for every log line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a local datetime the way log lines carry it
///
/// # Examples
///
/// ```
/// use chrono::{Local, TimeZone};
/// use loggerlib::core::timestamp::format_timestamp;
///
/// let dt = Local.with_ymd_and_hms(2025, 1, 8, 9, 5, 3).single().unwrap();
/// assert_eq!(format_timestamp(&dt), "2025-01-08 09:05:03");
/// ```
#[must_use]
pub fn format_timestamp(datetime: &DateTime<Local>) -> String {
    datetime.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time, formatted as `YYYY-MM-DD HH:MM:SS`
#[must_use]
pub fn current_timestamp() -> String {
    format_timestamp(&Local::now())
}
