//! Accepted date and date-time input formats.

use chrono::{NaiveDate, NaiveDateTime};
use survey_model::value::DATETIME_FORMAT;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

const DATETIME_FORMATS: &[&str] = &[
    DATETIME_FORMAT,
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parses a date-time string in any accepted format.
pub fn try_parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
}

/// Parses a date, also accepting a date-time and keeping its date part.
pub fn try_parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .or_else(|| try_parse_datetime(trimmed).map(|dt| dt.date()))
}

/// True when `value` is exactly in the canonical `YYYY-MM-DD HH:MM:SS` shape.
pub fn is_canonical_datetime(value: &str) -> bool {
    value.len() == 19 && NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).is_ok()
}
