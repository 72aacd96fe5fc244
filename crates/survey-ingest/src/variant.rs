//! Variant resolution from raw screener answers.

use survey_model::{FieldKind, FieldValue, RawRecord, Variant, VariantError, Vocabulary};
use survey_transform::coerce_field;

/// Picks the variant of a raw record from its screener answers.
///
/// Answers that are absent or fail to coerce count as unanswered.
pub fn resolve_variant(raw: &RawRecord) -> Result<Variant, VariantError> {
    let code = |field: &str, vocabulary: Vocabulary| {
        screener(raw, field, FieldKind::Coded(vocabulary)).and_then(|value| value.as_code())
    };
    let followup =
        screener(raw, "resident_visitor_followup", FieldKind::Boolean).and_then(|v| v.as_bool());

    Variant::resolve(
        code("market_segment", Vocabulary::MarketSegment),
        code("passenger_type", Vocabulary::PassengerType),
        code("resident_visitor_general", Vocabulary::ResidentVisitorGeneral),
        followup,
    )
}

fn screener(raw: &RawRecord, field: &str, kind: FieldKind) -> Option<FieldValue> {
    let value = raw.get(field)?;
    coerce_field(field, kind, value).ok().map(|coerced| coerced.value)
}

#[cfg(test)]
mod tests {
    use survey_model::RawValue;

    use super::*;

    fn raw(pairs: &[(&str, RawValue)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_employee_ignores_passenger_answers() {
        let record = raw(&[
            ("market_segment", RawValue::Float(2.0)),
            ("passenger_type", RawValue::Int(1)),
        ]);
        assert_eq!(resolve_variant(&record).unwrap(), Variant::Employee);
    }

    #[test]
    fn test_passenger_from_text_codes() {
        let record = raw(&[
            ("market_segment", RawValue::text("1")),
            ("passenger_type", RawValue::text("ARRIVING")),
            ("resident_visitor_general", RawValue::Int(3)),
            ("resident_visitor_followup", RawValue::text("True")),
        ]);
        assert_eq!(
            resolve_variant(&record).unwrap(),
            Variant::ArrivingPassengerVisitor
        );
    }

    #[test]
    fn test_missing_residency_yields_partial_variant() {
        let record = raw(&[
            ("market_segment", RawValue::Int(1)),
            ("passenger_type", RawValue::Int(1)),
            ("resident_visitor_general", RawValue::Float(f64::NAN)),
        ]);
        assert_eq!(
            resolve_variant(&record).unwrap(),
            Variant::DepartingAirPassenger
        );
    }

    #[test]
    fn test_unresolved_reports_codes() {
        let record = raw(&[("market_segment", RawValue::Int(98))]);
        let err = resolve_variant(&record).unwrap_err();
        assert!(matches!(
            err,
            VariantError::Unresolved {
                market_segment: Some(98),
                passenger_type: None,
                residency: None,
            }
        ));
    }
}
