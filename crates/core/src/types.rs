use chrono::{Duration, NaiveDate, NaiveDateTime};

/// All entity identifiers are opaque strings.
pub type EntityId = String;

/// Wall-clock timestamps. The dashboard is single-locale, so no zone is kept.
pub type Timestamp = NaiveDateTime;

/// Calendar-date keys are formatted as `YYYY-MM-DD`.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a `YYYY-MM-DD` calendar date. Returns `None` for anything else.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_KEY_FORMAT).ok()
}

/// Parse a date-time such as `2025-03-10T10:30:00` or `2025-03-10 10:30:00.250`.
pub fn parse_timestamp(value: &str) -> Option<Timestamp> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Format a date as its `YYYY-MM-DD` key.
pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Format a timestamp the way it is stored on comments.
pub fn format_timestamp(ts: Timestamp) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Midnight at the start of `date`.
pub fn start_of_day(date: NaiveDate) -> Option<Timestamp> {
    date.and_hms_opt(0, 0, 0)
}

/// The last representable millisecond of `date` (23:59:59.999).
pub fn end_of_day(date: NaiveDate) -> Option<Timestamp> {
    date.and_hms_milli_opt(23, 59, 59, 999)
}

/// Offset a date by a signed number of days.
pub(crate) fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
}
