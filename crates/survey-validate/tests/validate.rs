//! End-to-end validation tests.

use std::sync::Arc;

use chrono::NaiveDate;
use proptest::prelude::*;
use survey_model::{
    CheckKind, RawRecord, RawValue, RuleCondition, Severity, SkipLogicRule, Variant,
    ViolationSource,
};
use survey_standards::RuleSet;
use survey_validate::{
    OutputRow, VALIDATION_ERROR, VALIDATION_NUM_ERRORS, VALIDATION_SEVERITY, Validator,
};

fn raw(pairs: &[(&str, RawValue)]) -> RawRecord {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}

fn rule(
    class: &str,
    check: CheckKind,
    variables: &[&str],
    values: &[&str],
    severity: Severity,
) -> SkipLogicRule {
    SkipLogicRule {
        class: class.to_string(),
        condition: None,
        check,
        check_variables: variables.iter().map(|v| (*v).to_string()).collect(),
        check_values: values.iter().map(|v| (*v).to_string()).collect(),
        severity,
    }
}

fn validator(rules: Vec<SkipLogicRule>) -> Validator {
    Validator::new(Arc::new(RuleSet::new(rules)))
}

fn bundled() -> Validator {
    Validator::new(Arc::new(RuleSet::load_default().unwrap()))
}

fn employee() -> RawRecord {
    raw(&[
        ("respondent_id", RawValue::Int(17)),
        ("market_segment", RawValue::Int(2)),
        ("gender", RawValue::Int(1)),
        ("age", RawValue::Float(f64::NAN)),
        ("reimbursement", RawValue::Int(4)),
    ])
}

fn departing_resident() -> RawRecord {
    raw(&[
        ("respondent_id", RawValue::Int(1001)),
        ("market_segment", RawValue::Int(1)),
        ("passenger_type", RawValue::Float(1.0)),
        ("resident_visitor_general", RawValue::Int(2)),
        ("is_qualified_age", RawValue::text("True")),
        ("is_qualified_not_connecting", RawValue::Bool(true)),
        ("interview_location", RawValue::Int(1)),
        ("airline", RawValue::text("SOUTHWEST_AIRLINES")),
        ("next_flight_destination", RawValue::text("DEN")),
        ("flight_purpose", RawValue::Int(2)),
        ("nights_away", RawValue::Int(4)),
        ("general_use_transit_resident", RawValue::Int(1)),
        ("car_availability", RawValue::Int(1)),
        ("inbound_or_outbound", RawValue::Int(1)),
        ("main_mode", RawValue::Int(1)),
        ("origin_activity_type", RawValue::Int(1)),
        ("origin_lat", RawValue::Float(32.71)),
        ("origin_lon", RawValue::Float(-117.16)),
        ("date_completed", RawValue::text("2024-11-27")),
        ("race_unknown", RawValue::Bool(true)),
        ("race_white", RawValue::Int(1)),
        ("parking_cost", RawValue::text("$12.50")),
        ("age", RawValue::Int(3)),
        ("gender", RawValue::text("nan")),
    ])
}

/// Re-reads an output row the way a text file would deliver it.
fn reread(row: &OutputRow) -> RawRecord {
    row.iter()
        .map(|(name, value)| (name.to_string(), RawValue::text(value)))
        .collect()
}

// ============================================================================
// Rule checks
// ============================================================================

#[test]
fn critical_rule_reports_all_listed_fields() {
    let validator = validator(vec![rule(
        "Employee",
        CheckKind::Critical,
        &["age", "gender"],
        &[],
        Severity::Critical,
    )]);
    let validated = validator.validate(&employee(), Variant::Employee).unwrap();

    assert_eq!(validated.result.num_errors, 1);
    assert_eq!(validated.result.severity, Severity::Critical);
    assert_eq!(
        validated.result.messages(),
        vec!["critical check failed: age, gender (Critical)"]
    );
    assert_eq!(validated.result.violations[0].fields, vec!["age", "gender"]);
}

#[test]
fn missing_rule_applies_only_when_condition_matches() {
    let mut missing = rule(
        "Employee",
        CheckKind::Missing,
        &["passenger_type"],
        &[],
        Severity::NonCritical,
    );
    missing.condition = Some(RuleCondition {
        variable: "market_segment".into(),
        values: vec!["1".into(), "2".into()],
    });
    let validator = validator(vec![missing]);

    let matching = validator.validate(&employee(), Variant::Employee).unwrap();
    assert_eq!(matching.result.num_errors, 1);
    assert_eq!(matching.result.severity, Severity::NonCritical);

    let mut other = employee();
    other.insert("market_segment".into(), RawValue::Int(1));
    let mut narrow_rule = rule(
        "Employee",
        CheckKind::Missing,
        &["passenger_type"],
        &[],
        Severity::NonCritical,
    );
    narrow_rule.condition = Some(RuleCondition {
        variable: "market_segment".into(),
        values: vec!["2".into()],
    });
    let narrow = Validator::new(Arc::new(RuleSet::new(vec![narrow_rule])));
    let skipped = narrow.validate(&other, Variant::Employee).unwrap();
    assert!(skipped.result.is_clean());
    assert_eq!(skipped.result.severity, Severity::None);
}

#[test]
fn value_rule_without_condition_checks_accepted_values() {
    let validator = validator(vec![rule(
        "Employee",
        CheckKind::Value,
        &["reimbursement"],
        &["1", "2", "3"],
        Severity::NonCritical,
    )]);
    let validated = validator.validate(&employee(), Variant::Employee).unwrap();
    assert_eq!(validated.result.num_errors, 1);
    assert_eq!(
        validated.result.violations[0].source,
        ViolationSource::Rule {
            class: "Employee".into(),
            index: 0
        }
    );
}

#[test]
fn rules_for_other_classes_never_apply() {
    let validator = validator(vec![rule(
        "ArrivingAirPassenger",
        CheckKind::Critical,
        &["age"],
        &[],
        Severity::Critical,
    )]);
    let validated = validator.validate(&employee(), Variant::Employee).unwrap();
    assert!(validated.result.is_clean());
}

// ============================================================================
// Invariants and notes
// ============================================================================

#[test]
fn race_conflict_is_added_to_table_violations() {
    let validator = validator(vec![rule(
        "DepartingPassengerResident",
        CheckKind::Critical,
        &["gender"],
        &[],
        Severity::Critical,
    )]);
    let validated = validator
        .validate(&departing_resident(), Variant::DepartingPassengerResident)
        .unwrap();

    let sources: Vec<&ViolationSource> = validated
        .result
        .violations
        .iter()
        .map(|v| &v.source)
        .collect();
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0], &ViolationSource::Invariant);
    assert!(matches!(sources[1], ViolationSource::Rule { .. }));
    assert_eq!(validated.result.violations[0].severity, Severity::NonCritical);
    assert_eq!(validated.result.severity, Severity::Critical);
}

#[test]
fn datetime_parking_cost_is_noted_first() {
    let when = NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_opt(7, 45, 0)
        .unwrap();
    let mut input = departing_resident();
    input.insert("race_white".into(), RawValue::Bool(false));
    input.insert("parking_cost".into(), RawValue::DateTime(when));

    let validated = validator(Vec::new())
        .validate(&input, Variant::DepartingPassengerResident)
        .unwrap();
    assert_eq!(validated.result.num_errors, 1);
    assert_eq!(validated.result.severity, Severity::NonCritical);
    assert_eq!(validated.result.violations[0].source, ViolationSource::Coercion);

    let row = validated.to_output_row(&input);
    assert_eq!(row.get("parking_cost"), Some("2024-03-09 07:45:00"));
    assert_eq!(row.get("parking_cost_numeric"), Some("2024"));
}

#[test]
fn construction_failure_becomes_a_critical_row() {
    let mut input = employee();
    input.insert("gender".into(), RawValue::Int(42));
    let err = bundled().validate(&input, Variant::Employee).unwrap_err();
    assert_eq!(err.respondent_id, Some(17));

    let row = OutputRow::construction_failure(&input, &err);
    assert_eq!(row.get(VALIDATION_SEVERITY), Some("Critical"));
    assert_eq!(row.get(VALIDATION_NUM_ERRORS), Some("1"));
    assert!(row.get(VALIDATION_ERROR).unwrap().contains("gender"));
    assert_eq!(row.get("respondent_id"), Some("17"));
}

// ============================================================================
// Output rows
// ============================================================================

#[test]
fn output_row_layout() {
    let input = departing_resident();
    let validated = bundled()
        .validate(&input, Variant::DepartingPassengerResident)
        .unwrap();
    let row = validated.to_output_row(&input);

    let columns: Vec<&str> = row.columns().collect();
    assert_eq!(columns[0], "age");
    assert_eq!(
        &columns[columns.len() - 3..],
        &[VALIDATION_ERROR, VALIDATION_SEVERITY, VALIDATION_NUM_ERRORS]
    );
    assert_eq!(row.get("airport_terminal"), Some("1"));
    assert_eq!(row.get("airport_terminal_label"), Some("TERMINAL_1"));
    assert_eq!(row.get("thanksgiving_week_flag"), Some("True"));
    assert_eq!(row.get("parking_cost_numeric"), Some("12.5"));
    assert_eq!(row.get("gender_label"), Some(""));
    assert_eq!(
        row.get(VALIDATION_NUM_ERRORS),
        Some(validated.result.num_errors.to_string().as_str())
    );
    assert_eq!(row.severity(), Some(validated.result.severity));
}

#[test]
fn multi_select_fields_get_joined_labels() {
    let mut input = employee();
    input.insert("past_commute_modes".into(), RawValue::text("1,3"));
    let validator = bundled();
    let validated = validator.validate(&input, Variant::Employee).unwrap();
    let row = validated.to_output_row(&input);
    assert_eq!(row.get("past_commute_modes"), Some("1,3"));
    assert_eq!(
        row.get("past_commute_modes_label"),
        Some("WALK,ELECTRIC_BIKESHARE")
    );

    let again = validator.validate(&reread(&row), Variant::Employee).unwrap();
    assert_eq!(again.result, validated.result);
}

#[test]
fn error_column_is_a_json_list_snapshot() {
    let input = departing_resident();
    let validated = bundled()
        .validate(&input, Variant::DepartingPassengerResident)
        .unwrap();
    let row = validated.to_output_row(&input);
    let errors: Vec<String> = serde_json::from_str(row.get(VALIDATION_ERROR).unwrap()).unwrap();
    insta::assert_json_snapshot!(errors, @r#"
    [
      "race_unknown combined with race_white (Non-Critical)",
      "critical check failed: age, gender (Non-Critical)"
    ]
    "#);
}

#[test]
fn revalidating_output_is_idempotent() {
    let validator = bundled();
    for (input, variant) in [
        (departing_resident(), Variant::DepartingPassengerResident),
        (employee(), Variant::Employee),
    ] {
        let first = validator.validate(&input, variant).unwrap();
        let row = first.to_output_row(&input);
        let second = validator.validate(&reread(&row), variant).unwrap();
        assert_eq!(first.result, second.result);
        let again = second.to_output_row(&reread(&row));
        for (column, value) in row.iter() {
            assert_eq!(again.get(column), Some(value), "column {column}");
        }
    }
}

// ============================================================================
// Batches
// ============================================================================

#[test]
fn batch_preserves_order_and_isolates_failures() {
    let mut broken = employee();
    broken.insert("reimbursement".into(), RawValue::Int(99));
    let batch = vec![
        (employee(), Variant::Employee),
        (broken, Variant::Employee),
        (departing_resident(), Variant::DepartingPassengerResident),
    ];
    let validator = bundled();
    let results = validator.validate_batch(&batch);

    assert_eq!(results.len(), 3);
    assert!(results[1].is_err());
    for (index, result) in [0, 2].into_iter().map(|i| (i, &results[i])) {
        let (input, variant) = &batch[index];
        let alone = validator.validate(input, *variant).unwrap();
        assert_eq!(result.as_ref().unwrap(), &alone);
    }
}

const ISOLATED_FIELDS: [&str; 6] = [
    "race_aian",
    "race_asian",
    "race_black",
    "race_hispanic",
    "is_pilot",
    "is_completed",
];

proptest! {
    #[test]
    fn each_violated_rule_reports_exactly_once(present in prop::collection::vec(any::<bool>(), 6)) {
        let rules = ISOLATED_FIELDS
            .iter()
            .map(|field| rule("Employee", CheckKind::Critical, &[*field], &[], Severity::NonCritical))
            .collect();
        let mut input = employee();
        for (field, present) in ISOLATED_FIELDS.iter().zip(&present) {
            if *present {
                input.insert((*field).to_string(), RawValue::Bool(true));
            }
        }

        let validated = validator(rules).validate(&input, Variant::Employee).unwrap();
        let fired: Vec<usize> = validated
            .result
            .violations
            .iter()
            .filter_map(|v| match v.source {
                ViolationSource::Rule { index, .. } => Some(index),
                _ => None,
            })
            .collect();
        let expected: Vec<usize> = present
            .iter()
            .enumerate()
            .filter(|(_, present)| !**present)
            .map(|(index, _)| index)
            .collect();
        prop_assert_eq!(fired, expected);
    }

    #[test]
    fn error_count_and_severity_follow_violations(
        age in prop::option::of(1i64..=7),
        gender in prop::option::of(1i64..=3),
        unknown in any::<bool>(),
        white in any::<bool>(),
    ) {
        let mut input = departing_resident();
        input.insert("age".into(), age.map_or(RawValue::Missing, RawValue::Int));
        input.insert("gender".into(), gender.map_or(RawValue::Missing, RawValue::Int));
        input.insert("race_unknown".into(), RawValue::Bool(unknown));
        input.insert("race_white".into(), RawValue::Bool(white));

        let validated = bundled().validate(&input, Variant::DepartingPassengerResident).unwrap();
        let result = &validated.result;
        prop_assert_eq!(result.num_errors, result.violations.len());
        prop_assert_eq!(result.severity, Severity::aggregate(result.counts()));

        let race_conflicts = result
            .violations
            .iter()
            .filter(|v| v.source == ViolationSource::Invariant)
            .count();
        prop_assert_eq!(race_conflicts, usize::from(unknown && white));
    }

    #[test]
    fn records_validate_independently(ids in prop::collection::vec(1i64..10_000, 1..8)) {
        let validator = bundled();
        let batch: Vec<(RawRecord, Variant)> = ids
            .iter()
            .map(|id| {
                let mut input = employee();
                input.insert("respondent_id".into(), RawValue::Int(*id));
                (input, Variant::Employee)
            })
            .collect();
        let results = validator.validate_batch(&batch);
        for ((_, validated), id) in batch.iter().zip(&results).zip(&ids) {
            let validated = validated.as_ref().unwrap();
            prop_assert_eq!(validated.record.respondent_id(), Some(*id));
            prop_assert_eq!(&validated.result, &results[0].as_ref().unwrap().result);
        }
    }
}
