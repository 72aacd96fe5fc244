use thiserror::Error;

use crate::schema::FieldKind;
use crate::variant::Variant;
use crate::vocabulary::Vocabulary;

/// Failure to turn one raw value into its declared field value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The value cannot be classified as missing or present for its kind.
    #[error("field {field}: value {value} is not comparable as {expected}")]
    Coercion {
        field: String,
        value: String,
        expected: FieldKind,
    },

    #[error("field {field}: cannot coerce {value} to {expected}")]
    Type {
        field: String,
        value: String,
        expected: FieldKind,
    },

    #[error("field {field}: code {code} is not in {vocabulary}")]
    Domain {
        field: String,
        code: i64,
        vocabulary: Vocabulary,
    },

    #[error("field {field}: required field is absent")]
    Absent { field: String },
}

impl FieldError {
    pub fn field(&self) -> &str {
        match self {
            FieldError::Coercion { field, .. }
            | FieldError::Type { field, .. }
            | FieldError::Domain { field, .. }
            | FieldError::Absent { field } => field,
        }
    }

    /// Offending raw value, when there is one.
    pub fn value(&self) -> Option<String> {
        match self {
            FieldError::Coercion { value, .. } | FieldError::Type { value, .. } => {
                Some(value.clone())
            }
            FieldError::Domain { code, .. } => Some(code.to_string()),
            FieldError::Absent { .. } => None,
        }
    }
}

/// A record that could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot construct {variant} record (respondent {}): {source}", display_id(.respondent_id))]
pub struct RecordError {
    pub variant: Variant,
    pub respondent_id: Option<i64>,
    #[source]
    pub source: FieldError,
}

fn display_id(id: &Option<i64>) -> String {
    id.map_or_else(|| "unknown".to_string(), |id| id.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantError {
    #[error("unknown variant: {0}")]
    Unknown(String),

    #[error(
        "cannot resolve variant (market_segment={}, passenger_type={}, resident_visitor_general={})",
        display_code(.market_segment),
        display_code(.passenger_type),
        display_code(.residency)
    )]
    Unresolved {
        market_segment: Option<i64>,
        passenger_type: Option<i64>,
        residency: Option<i64>,
    },
}

fn display_code(code: &Option<i64>) -> String {
    code.map_or_else(|| "missing".to_string(), |c| c.to_string())
}
