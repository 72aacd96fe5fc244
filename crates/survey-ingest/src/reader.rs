//! Survey export reading.

use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta};
use polars::prelude::*;
use survey_model::value::DATE_FORMAT;
use survey_model::{RawRecord, RawValue};

use crate::error::{IngestError, Result};

/// Rows used for schema inference.
pub const INFER_SCHEMA_ROWS: usize = 100;

/// A survey export: column names in file order plus one raw record per row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurveyTable {
    pub headers: Vec<String>,
    pub records: Vec<RawRecord>,
}

impl SurveyTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Reads a survey export into raw records.
///
/// Column types are inferred from the first rows and date-like columns are
/// parsed, so a column mixes the same value kinds the upstream export does.
/// Nulls become [`RawValue::Missing`].
pub fn read_survey_csv(path: &Path) -> Result<SurveyTable> {
    std::fs::metadata(path).map_err(|e| IngestError::open(path.to_path_buf(), e))?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .map_parse_options(|options| options.with_try_parse_dates(true))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let table = dataframe_to_table(&df)?;
    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.headers.len(),
        "loaded survey export"
    );
    Ok(table)
}

/// Converts every row of `df` into a [`RawRecord`].
pub fn dataframe_to_table(df: &DataFrame) -> Result<SurveyTable> {
    let headers: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|name| clean_header(name.as_str()))
        .collect();

    let mut records = Vec::with_capacity(df.height());
    for row_idx in 0..df.height() {
        let mut record = RawRecord::new();
        for (header, col) in headers.iter().zip(df.get_columns()) {
            let value = col.get(row_idx)?;
            record.insert(header.clone(), any_to_raw(value));
        }
        records.push(record);
    }
    Ok(SurveyTable { headers, records })
}

fn clean_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}

/// Converts a Polars `AnyValue` to a [`RawValue`].
///
/// Dates keep their `YYYY-MM-DD` text form; date-times become
/// [`RawValue::DateTime`]. Unsupported types fall back to their string form.
pub fn any_to_raw(value: AnyValue<'_>) -> RawValue {
    match value {
        AnyValue::Null => RawValue::Missing,
        AnyValue::Boolean(b) => RawValue::Bool(b),
        AnyValue::Int8(v) => RawValue::Int(i64::from(v)),
        AnyValue::Int16(v) => RawValue::Int(i64::from(v)),
        AnyValue::Int32(v) => RawValue::Int(i64::from(v)),
        AnyValue::Int64(v) => RawValue::Int(v),
        AnyValue::UInt8(v) => RawValue::Int(i64::from(v)),
        AnyValue::UInt16(v) => RawValue::Int(i64::from(v)),
        AnyValue::UInt32(v) => RawValue::Int(i64::from(v)),
        AnyValue::UInt64(v) => match i64::try_from(v) {
            Ok(v) => RawValue::Int(v),
            Err(_) => RawValue::Float(v as f64),
        },
        AnyValue::Float32(v) => RawValue::Float(f64::from(v)),
        AnyValue::Float64(v) => RawValue::Float(v),
        AnyValue::String(s) => RawValue::text(s),
        AnyValue::StringOwned(s) => RawValue::text(s.as_str()),
        AnyValue::Date(days) => match epoch_date(days) {
            Some(date) => RawValue::Text(date.format(DATE_FORMAT).to_string()),
            None => RawValue::Missing,
        },
        AnyValue::Datetime(v, unit, _) | AnyValue::DatetimeOwned(v, unit, _) => {
            timestamp(v, unit).map_or(RawValue::Missing, RawValue::DateTime)
        }
        other => RawValue::Text(other.str_value().into_owned()),
    }
}

fn epoch_date(days: i32) -> Option<NaiveDate> {
    DateTime::UNIX_EPOCH
        .date_naive()
        .checked_add_signed(TimeDelta::days(i64::from(days)))
}

fn timestamp(value: i64, unit: TimeUnit) -> Option<NaiveDateTime> {
    let utc = match unit {
        TimeUnit::Nanoseconds => Some(DateTime::from_timestamp_nanos(value)),
        TimeUnit::Microseconds => DateTime::from_timestamp_micros(value),
        TimeUnit::Milliseconds => DateTime::from_timestamp_millis(value),
    };
    utc.map(|dt| dt.naive_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_raw_scalars() {
        assert_eq!(any_to_raw(AnyValue::Null), RawValue::Missing);
        assert_eq!(any_to_raw(AnyValue::Int32(7)), RawValue::Int(7));
        assert_eq!(any_to_raw(AnyValue::Float64(2.5)), RawValue::Float(2.5));
        assert_eq!(any_to_raw(AnyValue::Boolean(true)), RawValue::Bool(true));
        assert_eq!(any_to_raw(AnyValue::String("DEN")), RawValue::text("DEN"));
    }

    #[test]
    fn test_any_to_raw_temporal() {
        // 2024-11-27 is day 20054 after the epoch.
        assert_eq!(
            any_to_raw(AnyValue::Date(20054)),
            RawValue::text("2024-11-27")
        );
        let micros = 1_710_000_000_000_000;
        let RawValue::DateTime(dt) =
            any_to_raw(AnyValue::Datetime(micros, TimeUnit::Microseconds, None))
        else {
            panic!("expected a date-time");
        };
        assert_eq!(dt.and_utc().timestamp_micros(), micros);
    }

    #[test]
    fn test_clean_header_strips_bom() {
        assert_eq!(clean_header("\u{feff} respondent_id "), "respondent_id");
        assert_eq!(clean_header("\u{feff}respondent_id"), "respondent_id");
        assert_eq!(clean_header("  age\t"), "age");
    }
}
