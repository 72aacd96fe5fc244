//! Validation pipeline tests against a small export.

use std::io::Write;

use survey_cli::pipeline::{ValidateOptions, default_output_path, run_validation};
use survey_model::{Severity, Variant};
use tempfile::TempDir;

const EXPORT: &str = "\
respondent_id,market_segment,passenger_type,resident_visitor_general,gender,age,inbound_or_outbound,main_mode
1,2,,,1,3,1,1
2,1,1,2,1,3,1,1
3,98,,,1,3,1,1
4,2,,,42,3,1,1
";

fn write_export(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("responses.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{EXPORT}").unwrap();
    path
}

#[test]
fn test_run_validation_writes_default_output() {
    let dir = TempDir::new().unwrap();
    let input = write_export(&dir);
    let result = run_validation(&ValidateOptions {
        input: input.clone(),
        ..ValidateOptions::default()
    })
    .unwrap();

    assert_eq!(result.outcomes.len(), 4);
    assert_eq!(result.output.as_deref(), Some(default_output_path(&input).as_path()));
    assert_eq!(result.written, 4);
    assert!(result.rule_count > 0);

    let variants: Vec<Option<Variant>> = result.outcomes.iter().map(|o| o.variant).collect();
    assert_eq!(
        variants,
        vec![
            Some(Variant::Employee),
            Some(Variant::DepartingPassengerResident),
            None,
            Some(Variant::Employee),
        ]
    );

    let failures: Vec<Option<i64>> = result.failures().map(|o| o.respondent_id).collect();
    assert_eq!(failures, vec![Some(3), Some(4)]);
    assert!(result.has_failures());
    assert!(
        result.outcomes[3]
            .failure
            .as_deref()
            .unwrap()
            .contains("gender")
    );

    let written = std::fs::read_to_string(default_output_path(&input)).unwrap();
    assert_eq!(written.lines().count(), 5);
    assert!(written.lines().next().unwrap().starts_with("respondent_id,market_segment"));
}

#[test]
fn test_exclude_critical_and_dry_run() {
    let dir = TempDir::new().unwrap();
    let input = write_export(&dir);
    let output = dir.path().join("out.csv");

    let result = run_validation(&ValidateOptions {
        input: input.clone(),
        output: Some(output.clone()),
        exclude_critical: true,
        ..ValidateOptions::default()
    })
    .unwrap();
    let kept = result
        .outcomes
        .iter()
        .filter(|o| o.severity != Severity::Critical)
        .count();
    assert_eq!(result.written, kept);
    assert!(result.written < result.outcomes.len());

    let dry = run_validation(&ValidateOptions {
        input,
        output: Some(dir.path().join("never.csv")),
        dry_run: true,
        ..ValidateOptions::default()
    })
    .unwrap();
    assert!(dry.output.is_none());
    assert!(!dir.path().join("never.csv").exists());
}

#[test]
fn test_missing_rules_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let input = write_export(&dir);
    let err = run_validation(&ValidateOptions {
        input,
        rules: Some(dir.path().join("absent_rules.csv")),
        ..ValidateOptions::default()
    })
    .unwrap_err();
    insta::assert_snapshot!(
        err.to_string().replace(&dir.path().display().to_string(), "<dir>"),
        @"load skip-logic rules: <dir>/absent_rules.csv"
    );
}
