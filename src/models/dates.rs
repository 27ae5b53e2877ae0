//! Creation date formatting for result rows.

use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};

/// Display format for question creation dates.
pub const CREATION_DATE_FORMAT: &str = "%d/%m/%Y";

/// Format epoch seconds as `dd/mm/yyyy` in the local time zone.
pub fn format_creation_date(epoch_secs: i64) -> String {
    match DateTime::<Utc>::from_timestamp(epoch_secs, 0) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format(CREATION_DATE_FORMAT)
            .to_string(),
        None => String::new(),
    }
}

/// Format epoch seconds as `dd/mm/yyyy` at a fixed UTC offset.
///
/// Returns an empty string for timestamps chrono cannot represent.
pub fn format_creation_date_in(epoch_secs: i64, offset: FixedOffset) -> String {
    match offset.timestamp_opt(epoch_secs, 0).single() {
        Some(dt) => dt.format(CREATION_DATE_FORMAT).to_string(),
        None => String::new(),
    }
}
