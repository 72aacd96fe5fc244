//! Per-field coercion of raw values.
//!
//! Missing answers arrive as NaN, blank text, or sentinel strings; all of them
//! become [`FieldValue::Missing`] before the declared kind is applied.

use survey_model::value::DATETIME_FORMAT;
use survey_model::{
    FieldError, FieldKind, FieldValue, RawValue, Severity, Violation, ViolationSource, Vocabulary,
};

use crate::datetime::{is_canonical_datetime, try_parse_date};
use crate::numeric::{integral, parse_f64, parse_integral};

const MISSING_SENTINELS: &[&str] = &["nan", "none", "null", "na"];

/// A coerced value plus any non-fatal note raised while coercing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Coerced {
    pub value: FieldValue,
    pub note: Option<Violation>,
}

impl Coerced {
    fn value(value: FieldValue) -> Self {
        Self { value, note: None }
    }
}

/// Returns true if `raw` encodes a missing answer.
///
/// A float that is not equal to itself (NaN) is missing, as is blank text and
/// the usual textual spellings of NaN or null.
pub fn is_missing_sentinel(raw: &RawValue) -> bool {
    match raw {
        RawValue::Missing => true,
        RawValue::Float(v) => v.is_nan(),
        RawValue::Text(s) => {
            let trimmed = s.trim();
            trimmed.is_empty()
                || MISSING_SENTINELS
                    .iter()
                    .any(|sentinel| trimmed.eq_ignore_ascii_case(sentinel))
        }
        _ => false,
    }
}

/// Coerces one raw value to the declared `kind` of `field`.
///
/// Failures are logged with the field, value, and expected kind before they
/// are returned.
pub fn coerce_field(field: &str, kind: FieldKind, raw: &RawValue) -> Result<Coerced, FieldError> {
    coerce_inner(field, kind, raw).inspect_err(|err| {
        tracing::warn!(
            field,
            value = %raw,
            expected = %kind,
            error = %err,
            "field coercion failed"
        );
    })
}

fn coerce_inner(field: &str, kind: FieldKind, raw: &RawValue) -> Result<Coerced, FieldError> {
    if is_missing_sentinel(raw) {
        return Ok(Coerced::value(FieldValue::Missing));
    }
    if let RawValue::Float(v) = raw
        && v.is_infinite()
    {
        return Err(FieldError::Coercion {
            field: field.to_string(),
            value: raw.to_string(),
            expected: kind,
        });
    }

    let type_error = || FieldError::Type {
        field: field.to_string(),
        value: raw.to_string(),
        expected: kind,
    };

    let value = match kind {
        FieldKind::Integer => FieldValue::Int(as_integer(raw).ok_or_else(type_error)?),
        FieldKind::Float => {
            let v = as_float(raw).ok_or_else(type_error)?;
            if v.is_infinite() {
                return Err(FieldError::Coercion {
                    field: field.to_string(),
                    value: raw.to_string(),
                    expected: kind,
                });
            }
            FieldValue::Float(v)
        }
        FieldKind::Text => FieldValue::Text(raw.render().trim().to_string()),
        FieldKind::Boolean => FieldValue::Bool(as_bool(raw).ok_or_else(type_error)?),
        FieldKind::Date => FieldValue::Date(match raw {
            RawValue::DateTime(dt) => dt.date(),
            RawValue::Text(s) => try_parse_date(s).ok_or_else(type_error)?,
            _ => return Err(type_error()),
        }),
        FieldKind::Coded(vocabulary) => {
            let code = as_code(raw, vocabulary).ok_or_else(type_error)?;
            coded(field, vocabulary, code)?
        }
        FieldKind::CodedOrText(vocabulary) => match as_code(raw, vocabulary) {
            Some(code) => coded(field, vocabulary, code)?,
            None => match raw {
                RawValue::Text(s) => FieldValue::Text(s.trim().to_string()),
                _ => return Err(type_error()),
            },
        },
        FieldKind::CodedList(vocabulary) => coded_list(field, raw, vocabulary, false)?,
        FieldKind::CodedOrTextList(vocabulary) => coded_list(field, raw, vocabulary, true)?,
        FieldKind::FreeNumeric => return free_numeric(field, raw).ok_or_else(type_error),
    };
    Ok(Coerced::value(value))
}

fn coded(field: &str, vocabulary: Vocabulary, code: i64) -> Result<FieldValue, FieldError> {
    if vocabulary.contains(code) {
        Ok(FieldValue::Code { vocabulary, code })
    } else {
        Err(FieldError::Domain {
            field: field.to_string(),
            code,
            vocabulary,
        })
    }
}

/// Multi-select answer: a single number, or comma-separated members with
/// optional surrounding brackets. Blank and sentinel members are skipped.
fn coded_list(
    field: &str,
    raw: &RawValue,
    vocabulary: Vocabulary,
    allow_text: bool,
) -> Result<FieldValue, FieldError> {
    let kind = if allow_text {
        FieldKind::CodedOrTextList(vocabulary)
    } else {
        FieldKind::CodedList(vocabulary)
    };
    let type_error = |member: &str| FieldError::Type {
        field: field.to_string(),
        value: format!("{member:?}"),
        expected: kind,
    };

    let text = match raw {
        RawValue::Text(s) => s.trim(),
        RawValue::Int(_) | RawValue::Float(_) => {
            let code = as_integer(raw).ok_or_else(|| type_error(&raw.render()))?;
            return Ok(FieldValue::List(vec![coded(field, vocabulary, code)?]));
        }
        _ => return Err(type_error(&raw.render())),
    };
    let inner = text
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(text);

    let mut members = Vec::new();
    for member in inner.split(',') {
        let member = member.trim().trim_matches(|c: char| c == '\'' || c == '"').trim();
        if is_missing_sentinel(&RawValue::text(member)) {
            continue;
        }
        match parse_integral(member).or_else(|| vocabulary.code_for(member)) {
            Some(code) => members.push(coded(field, vocabulary, code)?),
            None if allow_text => members.push(FieldValue::Text(member.to_string())),
            None => return Err(type_error(member)),
        }
    }
    if members.is_empty() {
        Ok(FieldValue::Missing)
    } else {
        Ok(FieldValue::List(members))
    }
}

fn as_integer(raw: &RawValue) -> Option<i64> {
    match raw {
        RawValue::Int(v) => Some(*v),
        RawValue::Float(v) => integral(*v),
        RawValue::Text(s) => parse_integral(s),
        _ => None,
    }
}

fn as_float(raw: &RawValue) -> Option<f64> {
    match raw {
        RawValue::Int(v) => Some(*v as f64),
        RawValue::Float(v) => Some(*v),
        RawValue::Text(s) => parse_f64(s),
        _ => None,
    }
}

fn as_bool(raw: &RawValue) -> Option<bool> {
    match raw {
        RawValue::Bool(b) => Some(*b),
        RawValue::Int(0) => Some(false),
        RawValue::Int(1) => Some(true),
        RawValue::Float(v) if *v == 0.0 => Some(false),
        RawValue::Float(v) if *v == 1.0 => Some(true),
        RawValue::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "1" | "1.0" => Some(true),
            "false" | "f" | "no" | "n" | "0" | "0.0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Integer code of a raw value: numeric forms or a label of `vocabulary`.
///
/// Returns `None` for text that is neither, and for non-integral numbers.
fn as_code(raw: &RawValue, vocabulary: Vocabulary) -> Option<i64> {
    match raw {
        RawValue::Text(s) => parse_integral(s).or_else(|| vocabulary.code_for(s)),
        other => as_integer(other),
    }
}

fn free_numeric(field: &str, raw: &RawValue) -> Option<Coerced> {
    match raw {
        RawValue::Int(v) => Some(Coerced::value(FieldValue::Int(*v))),
        RawValue::Float(v) => Some(Coerced::value(FieldValue::Float(*v))),
        RawValue::DateTime(dt) => {
            let text = dt.format(DATETIME_FORMAT).to_string();
            Some(rewritten_datetime(field, text))
        }
        RawValue::Text(s) => {
            let text = s.trim().to_string();
            if is_canonical_datetime(&text) {
                Some(rewritten_datetime(field, text))
            } else {
                Some(Coerced::value(FieldValue::Text(text)))
            }
        }
        RawValue::Bool(_) | RawValue::Missing => None,
    }
}

fn rewritten_datetime(field: &str, text: String) -> Coerced {
    tracing::debug!(field, value = %text, "date-time rewritten in numeric field");
    let note = Violation::new(
        vec![field.to_string()],
        Severity::NonCritical,
        ViolationSource::Coercion,
        format!("{field}: date-time value rewritten to \"{text}\""),
    );
    Coerced {
        value: FieldValue::Text(text),
        note: Some(note),
    }
}
