//! Date key parsing

use chrono::NaiveDate;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date key into a calendar date.
///
/// Returns `None` for anything that is not a valid calendar date, so callers
/// can drop malformed keys instead of failing.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}

/// Format a calendar date as a date key
pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}
