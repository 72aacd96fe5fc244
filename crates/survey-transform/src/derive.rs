//! Derived fields.
//!
//! Derivations run once, right after coercion, in this order:
//! 1. `<field>_numeric` for the free-numeric fields
//! 2. `non_airport_activity_type`
//! 3. `airport_terminal`
//! 4. `thanksgiving_week_flag`
//! 5. `flight_endpoint` and `is_same_flight_endpoint`

use chrono::NaiveDate;
use survey_model::vocabulary::known;
use survey_model::{Direction, FieldValue, Owner, SurveyRecord, Vocabulary};

use crate::numeric::numeric_projection;

/// Free-numeric fields that carry a `_numeric` projection.
pub const FREE_NUMERIC_FIELDS: &[&str] = &["taxi_fhv_fare", "taxi_fhv_wait", "parking_cost"];

/// First day of Thanksgiving week in the survey period.
pub const THANKSGIVING_WEEK_START: NaiveDate = match NaiveDate::from_ymd_opt(2024, 11, 25) {
    Some(date) => date,
    None => panic!("invalid Thanksgiving week date"),
};

/// Terminal served by an airline code, if the carrier has a fixed terminal.
pub fn terminal_for_airline(airline: i64) -> Option<i64> {
    match airline {
        // Southwest, Frontier, Spirit, JetBlue, Allegiant, Sun Country
        15 | 14 | 16 | 10 | 3 | 17 => Some(known::TERMINAL_1),
        // Alaska, American, Delta, United, Air Canada, British Airways,
        // Hawaiian, Japan Airlines, Lufthansa, WestJet, Breeze
        2 | 4 | 7 | 12 | 1 | 6 | 8 | 9 | 11 | 13 | 5 => Some(known::TERMINAL_2),
        _ => None,
    }
}

fn terminal_for_interview_location(location: i64) -> Option<i64> {
    match location {
        1 => Some(known::TERMINAL_1),
        2 | 3 => Some(known::TERMINAL_2),
        _ => None,
    }
}

/// Computes every derived field of `record`.
pub fn derive_fields(record: &mut SurveyRecord) {
    for field in FREE_NUMERIC_FIELDS {
        let projected = numeric_projection(record.get(field));
        record.insert(Owner::Trip, format!("{field}_numeric"), projected);
    }

    let activity_source = if record.code("inbound_or_outbound") == Some(known::INBOUND_TO_AIRPORT) {
        "origin_activity_type"
    } else {
        "destination_activity_type"
    };
    let activity = record
        .get(activity_source)
        .cloned()
        .unwrap_or(FieldValue::Missing);
    record.insert(Owner::Respondent, "non_airport_activity_type", activity);

    let terminal = record
        .code("interview_location")
        .and_then(terminal_for_interview_location)
        .or_else(|| record.code("airline").and_then(terminal_for_airline))
        .unwrap_or(known::TERMINAL_UNKNOWN);
    record.insert(
        Owner::Respondent,
        "airport_terminal",
        FieldValue::Code {
            vocabulary: Vocabulary::Terminal,
            code: terminal,
        },
    );

    let thanksgiving = record
        .get("date_completed")
        .and_then(FieldValue::as_date)
        .is_some_and(|date| date >= THANKSGIVING_WEEK_START);
    record.insert(
        Owner::Respondent,
        "thanksgiving_week_flag",
        FieldValue::Bool(thanksgiving),
    );

    let (endpoint, same) = flight_endpoint(record);
    record.insert(Owner::Respondent, "flight_endpoint", endpoint);
    record.insert(Owner::Respondent, "is_same_flight_endpoint", same);
}

/// Endpoint of the connecting flight and whether it is the journey's end.
///
/// Only set when the recorded passenger type matches the variant's direction.
fn flight_endpoint(record: &SurveyRecord) -> (FieldValue, FieldValue) {
    let Some(direction) = record.variant.direction() else {
        return (FieldValue::Missing, FieldValue::Missing);
    };
    if record.code("passenger_type") != Some(direction.passenger_type_code()) {
        return (FieldValue::Missing, FieldValue::Missing);
    }
    let (endpoint, same) = match direction {
        Direction::Arriving => ("previous_flight_origin", "is_original_origin"),
        Direction::Departing => ("next_flight_destination", "is_final_destination"),
    };
    let value = |name: &str| record.get(name).cloned().unwrap_or(FieldValue::Missing);
    (value(endpoint), value(same))
}

#[cfg(test)]
mod tests {
    use survey_model::Variant;

    use super::*;

    fn code(vocabulary: Vocabulary, code: i64) -> FieldValue {
        FieldValue::Code { vocabulary, code }
    }

    #[test]
    fn terminal_prefers_interview_location() {
        let mut record = SurveyRecord::new(Variant::DepartingAirPassenger);
        record.insert(
            Owner::Respondent,
            "interview_location",
            code(Vocabulary::InterviewLocation, 3),
        );
        record.insert(Owner::Respondent, "airline", code(Vocabulary::Airline, 15));
        derive_fields(&mut record);
        assert_eq!(record.code("airport_terminal"), Some(known::TERMINAL_2));
    }

    #[test]
    fn terminal_falls_back_to_airline_then_unknown() {
        let mut record = SurveyRecord::new(Variant::DepartingAirPassenger);
        record.insert(
            Owner::Respondent,
            "interview_location",
            code(Vocabulary::InterviewLocation, 4),
        );
        record.insert(Owner::Respondent, "airline", code(Vocabulary::Airline, 15));
        derive_fields(&mut record);
        assert_eq!(record.code("airport_terminal"), Some(known::TERMINAL_1));

        let mut record = SurveyRecord::new(Variant::Employee);
        derive_fields(&mut record);
        assert_eq!(record.code("airport_terminal"), Some(known::TERMINAL_UNKNOWN));
    }

    #[test]
    fn non_airport_activity_follows_direction() {
        let mut record = SurveyRecord::new(Variant::Employee);
        record.insert(Owner::Trip, "inbound_or_outbound", code(Vocabulary::InboundOutbound, 1));
        record.insert(Owner::Trip, "origin_activity_type", code(Vocabulary::ActivityType, 2));
        record.insert(Owner::Trip, "destination_activity_type", code(Vocabulary::ActivityType, 3));
        derive_fields(&mut record);
        assert_eq!(record.code("non_airport_activity_type"), Some(2));

        record.insert(Owner::Trip, "inbound_or_outbound", code(Vocabulary::InboundOutbound, 2));
        derive_fields(&mut record);
        assert_eq!(record.code("non_airport_activity_type"), Some(3));
    }

    #[test]
    fn thanksgiving_flag() {
        let mut record = SurveyRecord::new(Variant::Employee);
        derive_fields(&mut record);
        assert_eq!(record.flag("thanksgiving_week_flag"), Some(false));

        record.insert(
            Owner::Respondent,
            "date_completed",
            FieldValue::Date(THANKSGIVING_WEEK_START),
        );
        derive_fields(&mut record);
        assert_eq!(record.flag("thanksgiving_week_flag"), Some(true));

        record.insert(
            Owner::Respondent,
            "date_completed",
            FieldValue::Date(NaiveDate::from_ymd_opt(2024, 11, 24).unwrap()),
        );
        derive_fields(&mut record);
        assert_eq!(record.flag("thanksgiving_week_flag"), Some(false));
    }

    #[test]
    fn flight_endpoint_is_gated_on_passenger_type() {
        let mut record = SurveyRecord::new(Variant::ArrivingPassengerVisitor);
        record.insert(Owner::Respondent, "previous_flight_origin", FieldValue::Text("JFK".into()));
        record.insert(Owner::Respondent, "is_original_origin", FieldValue::Bool(true));
        record.insert(Owner::Respondent, "passenger_type", code(Vocabulary::PassengerType, 1));
        derive_fields(&mut record);
        assert!(record.is_missing("flight_endpoint"));

        record.insert(Owner::Respondent, "passenger_type", code(Vocabulary::PassengerType, 2));
        derive_fields(&mut record);
        assert_eq!(record.get("flight_endpoint"), Some(&FieldValue::Text("JFK".into())));
        assert_eq!(record.flag("is_same_flight_endpoint"), Some(true));
    }

    #[test]
    fn numeric_projection_of_cost_fields() {
        let mut record = SurveyRecord::new(Variant::Employee);
        record.insert(Owner::Trip, "parking_cost", FieldValue::Text("$12.50/day".into()));
        derive_fields(&mut record);
        assert_eq!(record.get("parking_cost_numeric"), Some(&FieldValue::Float(12.5)));
        assert!(record.is_missing("taxi_fhv_fare_numeric"));
    }
}
