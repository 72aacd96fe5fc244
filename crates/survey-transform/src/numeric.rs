//! Numeric normalization utilities.

use std::sync::LazyLock;

use regex::Regex;
use survey_model::FieldValue;

/// First signed decimal in free text, e.g. `$12.50` or `about -3`.
static NUMERIC_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-+]?\d*\.?\d+").expect("Invalid numeric token regex"));

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parses an integer, accepting integral decimals such as `2.0`.
pub fn parse_integral(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| parse_f64(trimmed).and_then(integral))
}

/// Integer value of `v` if it has no fractional part.
pub fn integral(v: f64) -> Option<i64> {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 9.0e15 {
        Some(v as i64)
    } else {
        None
    }
}

/// Extracts the first signed-decimal token from `text`.
pub fn first_numeric_token(text: &str) -> Option<f64> {
    NUMERIC_TOKEN
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Numeric projection of a free-numeric field.
///
/// Numbers pass through unchanged; text yields its first numeric token or
/// missing when there is none.
pub fn numeric_projection(value: Option<&FieldValue>) -> FieldValue {
    match value {
        Some(FieldValue::Int(v)) => FieldValue::Int(*v),
        Some(FieldValue::Float(v)) => FieldValue::Float(*v),
        Some(FieldValue::Text(text)) => {
            first_numeric_token(text).map_or(FieldValue::Missing, FieldValue::Float)
        }
        _ => FieldValue::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_token() {
        assert_eq!(first_numeric_token("$12.50 per day"), Some(12.5));
        assert_eq!(first_numeric_token("about -3 dollars"), Some(-3.0));
        assert_eq!(first_numeric_token(".5 hours"), Some(0.5));
        assert_eq!(first_numeric_token("2024-11-26 08:15:00"), Some(2024.0));
        assert_eq!(first_numeric_token("free"), None);
    }

    #[test]
    fn projection_passes_numbers_through() {
        assert_eq!(
            numeric_projection(Some(&FieldValue::Int(20))),
            FieldValue::Int(20)
        );
        assert_eq!(
            numeric_projection(Some(&FieldValue::Text("twenty".into()))),
            FieldValue::Missing
        );
        assert_eq!(numeric_projection(None), FieldValue::Missing);
    }

    #[test]
    fn integral_parsing() {
        assert_eq!(parse_integral("2.0"), Some(2));
        assert_eq!(parse_integral(" 7 "), Some(7));
        assert_eq!(parse_integral("2.5"), None);
        assert_eq!(parse_integral(""), None);
    }
}
