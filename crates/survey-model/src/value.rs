//! Raw input values and typed field values.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::vocabulary::Vocabulary;

/// Canonical text form for date-time values.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Canonical text form for dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A flat input record: field name to raw value.
pub type RawRecord = BTreeMap<String, RawValue>;

/// A value as delivered by upstream survey-export tooling.
///
/// Exports mix numbers, text, booleans, and date-times in the same column,
/// and encode missing answers as NaN or sentinel strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawValue {
    /// Explicit null.
    Missing,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    DateTime(NaiveDateTime),
}

impl RawValue {
    /// Builds a text value.
    pub fn text(value: impl Into<String>) -> Self {
        RawValue::Text(value.into())
    }

    /// Short name of the value's type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Missing => "missing",
            RawValue::Bool(_) => "boolean",
            RawValue::Int(_) => "integer",
            RawValue::Float(_) => "float",
            RawValue::Text(_) => "text",
            RawValue::DateTime(_) => "date-time",
        }
    }

    /// Renders the value for output files. Missing and NaN render empty.
    pub fn render(&self) -> String {
        match self {
            RawValue::Missing => String::new(),
            RawValue::Bool(b) => if *b { "True" } else { "False" }.to_string(),
            RawValue::Int(v) => v.to_string(),
            RawValue::Float(v) if v.is_nan() => String::new(),
            RawValue::Float(v) => format_float(*v),
            RawValue::Text(s) => s.clone(),
            RawValue::DateTime(dt) => dt.format(DATETIME_FORMAT).to_string(),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Missing => f.write_str("<missing>"),
            RawValue::Text(s) => write!(f, "{s:?}"),
            RawValue::Float(v) if v.is_nan() => f.write_str("NaN"),
            other => f.write_str(&other.render()),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Int(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<NaiveDateTime> for RawValue {
    fn from(value: NaiveDateTime) -> Self {
        RawValue::DateTime(value)
    }
}

/// A coerced, typed field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Missing,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    /// A member of a code list.
    Code { vocabulary: Vocabulary, code: i64 },
    /// A multi-select answer; members are codes or free text.
    List(Vec<FieldValue>),
}

impl FieldValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer payload of integer and coded values.
    pub fn as_code(&self) -> Option<i64> {
        match self {
            FieldValue::Code { code, .. } => Some(*code),
            FieldValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(v) => Some(*v),
            FieldValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Label of a coded value.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            FieldValue::Code { vocabulary, code } => vocabulary.label(*code),
            _ => None,
        }
    }

    /// Label column text: the code label, or a list's member labels joined
    /// with commas (free-text members keep their text).
    pub fn label_text(&self) -> Option<String> {
        match self {
            FieldValue::List(items) => {
                let labels: Vec<String> = items
                    .iter()
                    .filter_map(|item| {
                        item.label()
                            .map(str::to_string)
                            .or_else(|| item.rule_token())
                    })
                    .collect();
                Some(labels.join(","))
            }
            other => other.label().map(str::to_string),
        }
    }

    /// Members of a list value; a scalar value is its own single member.
    pub fn members(&self) -> &[FieldValue] {
        match self {
            FieldValue::List(items) => items,
            FieldValue::Missing => &[],
            other => std::slice::from_ref(other),
        }
    }

    /// String form used when comparing against rule-table values.
    ///
    /// Booleans render as `True`/`False`, codes as their integer, floats keep a
    /// fractional part (`3.0`). Missing values have no token.
    pub fn rule_token(&self) -> Option<String> {
        match self {
            FieldValue::Missing => None,
            FieldValue::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
            FieldValue::Int(v) => Some(v.to_string()),
            FieldValue::Float(v) if v.fract() == 0.0 && v.is_finite() => Some(format!("{v:.1}")),
            FieldValue::Float(v) => Some(v.to_string()),
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Date(d) => Some(d.format(DATE_FORMAT).to_string()),
            FieldValue::Code { code, .. } => Some(code.to_string()),
            FieldValue::List(items) => Some(
                items
                    .iter()
                    .filter_map(FieldValue::rule_token)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
        }
    }

    /// Returns true if this value equals the rule-table `token`.
    ///
    /// Comparison is on the trimmed string form; booleans also accept the
    /// common spellings `true`/`false`/`1`/`0` in any case. A list matches when
    /// its joined form or any one member matches.
    pub fn matches_token(&self, token: &str) -> bool {
        let token = token.trim();
        match self {
            FieldValue::Missing => false,
            FieldValue::Bool(b) => {
                let lowered = token.to_ascii_lowercase();
                if *b {
                    matches!(lowered.as_str(), "true" | "1")
                } else {
                    matches!(lowered.as_str(), "false" | "0")
                }
            }
            FieldValue::List(items) => {
                items.iter().any(|item| item.matches_token(token))
                    || self.rule_token().is_some_and(|own| own == token)
            }
            other => other.rule_token().is_some_and(|own| own == token),
        }
    }

    /// Renders the value for output files. Missing renders empty.
    pub fn render(&self) -> String {
        match self {
            FieldValue::Missing => String::new(),
            FieldValue::Float(v) => format_float(*v),
            other => other.rule_token().unwrap_or_default(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Missing => f.write_str("<missing>"),
            other => f.write_str(&other.render()),
        }
    }
}

/// Formats a float without trailing zeros (`2.50` becomes `2.5`, `3.0` becomes `3`).
pub fn format_float(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_tokens() {
        assert_eq!(FieldValue::Bool(true).rule_token().as_deref(), Some("True"));
        assert_eq!(FieldValue::Float(3.0).rule_token().as_deref(), Some("3.0"));
        assert_eq!(FieldValue::Float(2.5).rule_token().as_deref(), Some("2.5"));
        let code = FieldValue::Code {
            vocabulary: Vocabulary::ParkingReimbursement,
            code: 4,
        };
        assert_eq!(code.rule_token().as_deref(), Some("4"));
        assert_eq!(FieldValue::Missing.rule_token(), None);
    }

    #[test]
    fn boolean_tokens_accept_common_spellings() {
        assert!(FieldValue::Bool(true).matches_token("TRUE"));
        assert!(FieldValue::Bool(true).matches_token("1"));
        assert!(FieldValue::Bool(false).matches_token(" False "));
        assert!(!FieldValue::Bool(false).matches_token("True"));
    }

    #[test]
    fn list_tokens_join_members() {
        let list = FieldValue::List(vec![
            FieldValue::Code {
                vocabulary: Vocabulary::TravelMode,
                code: 1,
            },
            FieldValue::Text("pedicab".to_string()),
        ]);
        assert_eq!(list.render(), "1,pedicab");
        assert!(list.matches_token("1"));
        assert!(list.matches_token("1,pedicab"));
        assert!(!list.matches_token("2"));
        assert_eq!(list.members().len(), 2);
        assert_eq!(FieldValue::Missing.members().len(), 0);
    }

    #[test]
    fn raw_render() {
        assert_eq!(RawValue::Float(f64::NAN).render(), "");
        assert_eq!(RawValue::Float(12.50).render(), "12.5");
        assert_eq!(RawValue::Int(7).render(), "7");
        assert_eq!(RawValue::Bool(false).render(), "False");
    }

    #[test]
    fn format_float_keeps_integers_intact() {
        assert_eq!(format_float(100.0), "100");
        assert_eq!(format_float(0.25), "0.25");
    }
}
