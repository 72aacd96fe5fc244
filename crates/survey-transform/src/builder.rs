//! Typed record construction from a flat raw mapping.

use survey_model::{
    FieldError, Presence, RawRecord, RawValue, RecordError, SurveyRecord, Variant, VariantSchema,
};

use crate::coerce::coerce_field;
use crate::derive::derive_fields;
use crate::numeric::{integral, parse_integral};

static ABSENT: RawValue = RawValue::Missing;

/// Builds a typed `variant` record from `raw`.
///
/// Every declared field is coerced; undeclared keys are ignored. Derived
/// fields are computed once all declared fields are in place. The first
/// field that fails coercion aborts construction.
pub fn build_record(raw: &RawRecord, variant: Variant) -> Result<SurveyRecord, RecordError> {
    let schema = VariantSchema::for_variant(variant);
    let respondent_id = raw_respondent_id(raw);
    let fail = |source: FieldError| RecordError {
        variant,
        respondent_id,
        source,
    };

    let mut record = SurveyRecord::new(variant);
    for field in schema.fields() {
        let name = field.name();
        let value = match raw.get(name) {
            Some(value) => value,
            None if field.descriptor.presence == Presence::Required => {
                tracing::warn!(field = name, %variant, "required field is absent");
                return Err(fail(FieldError::Absent {
                    field: name.to_string(),
                }));
            }
            None => &ABSENT,
        };
        let coerced = coerce_field(name, field.kind(), value).map_err(fail)?;
        if let Some(note) = coerced.note {
            record.notes.push(note);
        }
        record.insert(field.owner, name, coerced.value);
    }

    derive_fields(&mut record);
    tracing::trace!(
        %variant,
        respondent_id,
        notes = record.notes.len(),
        "constructed record"
    );
    Ok(record)
}

/// Best-effort respondent id of a raw record, for error context.
pub fn raw_respondent_id(raw: &RawRecord) -> Option<i64> {
    match raw.get("respondent_id")? {
        RawValue::Int(v) => Some(*v),
        RawValue::Float(v) => integral(*v),
        RawValue::Text(s) => parse_integral(s),
        _ => None,
    }
}
