//! File-backed tests for rule loading and the rule-table doctor.

use std::fs;
use std::path::Path;

use survey_model::{CheckKind, Severity, Variant};
use survey_standards::{FindingKind, RuleSet, StandardsError};

const HEADER: &str =
    "class,condition_variable,condition_value,check_type,check_variables,check_values,severity\n";

fn write_rules(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("skip_logic_rules.csv");
    fs::write(&path, format!("{HEADER}{body}")).unwrap();
    path
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn loads_rules_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_rules(
        dir.path(),
        "Employee,,,critical,\"age, gender\",,Critical\n\
         Employee,marketsegment,\"1,2\",missing,passenger_type,,Critical\n\
         Visitor,,,value,reimbursement,\"1,2,3\",Non-Critical\n",
    );

    let rules = RuleSet::load(&path).unwrap();
    assert_eq!(rules.len(), 3);
    assert_eq!(rules.source(), Some(path.as_path()));

    let employee = rules.rules_for("Employee");
    assert_eq!(employee.len(), 2);
    assert_eq!(employee[0].check, CheckKind::Critical);
    assert_eq!(employee[1].check, CheckKind::Missing);
    assert_eq!(rules.rules_for("Visitor")[0].severity, Severity::NonCritical);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RuleSet::load(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, StandardsError::Io { .. }));
}

#[test]
fn invalid_severity_names_the_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_rules(
        dir.path(),
        "Employee,,,critical,age,,Critical\n\
         Employee,,,critical,gender,,Severe\n",
    );
    let err = RuleSet::load(&path).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("line 3"), "{message}");
    assert!(message.contains("Severe"), "{message}");
}

#[test]
fn bundled_rule_table_covers_every_variant() {
    let rules = RuleSet::load(
        &Path::new(env!("CARGO_MANIFEST_DIR")).join("../../standards/skip_logic_rules.csv"),
    )
    .unwrap();
    for variant in Variant::ALL {
        assert!(
            !rules.rules_for(variant.name()).is_empty(),
            "no rules for {variant}"
        );
    }
    let report = rules.doctor();
    assert!(report.is_clean(), "{:?}", report.findings);
}

// ============================================================================
// Doctor
// ============================================================================

#[test]
fn doctor_reports_unusable_rules() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_rules(
        dir.path(),
        "Employee,,,critical,\"age, airline\",,Critical\n\
         Employee,,,missing,gender,,Non-Critical\n\
         Passenger,,,critical,age,,Critical\n",
    );
    let report = RuleSet::load(&path).unwrap().doctor();
    assert_eq!(report.rule_count, 3);
    assert_eq!(report.class_count, 2);
    assert_eq!(report.findings[0].kind, FindingKind::UndeclaredVariable);

    let rendered = report
        .findings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(rendered, @r"
    Employee rule #1: check variable airline is not declared
    Employee rule #2: missing check without a condition never fires
    Passenger: class is not a respondent variant
    ArrivingAirPassenger: no rules target this variant
    DepartingAirPassenger: no rules target this variant
    Resident: no rules target this variant
    Visitor: no rules target this variant
    DepartingPassengerResident: no rules target this variant
    DepartingPassengerVisitor: no rules target this variant
    ArrivingPassengerResident: no rules target this variant
    ArrivingPassengerVisitor: no rules target this variant
    ");
}
