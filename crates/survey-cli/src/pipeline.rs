//! Validation pipeline: read, classify, validate, annotate, write.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use survey_ingest::{SurveyTable, read_survey_csv, resolve_variant, write_annotated_csv};
use survey_model::{RawRecord, Severity, Variant, VariantError};
use survey_standards::{RuleSet, default_rules_path};
use survey_transform::raw_respondent_id;
use survey_validate::{OutputRow, Validator};

/// Suffix appended to the input stem for the default output file.
pub const OUTPUT_SUFFIX: &str = "_validated";

/// Options for one validation run.
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    pub input: PathBuf,
    pub rules: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub exclude_critical: bool,
    pub dry_run: bool,
}

/// Outcome for one input record.
#[derive(Debug, Clone)]
pub struct RecordOutcome {
    pub respondent_id: Option<i64>,
    pub variant: Option<Variant>,
    pub severity: Severity,
    pub num_errors: usize,
    /// Construction or classification failure, if any.
    pub failure: Option<String>,
    pub row: OutputRow,
}

/// Result of a validation run.
#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub rules: Option<PathBuf>,
    pub rule_count: usize,
    /// Written file, or `None` for a dry run.
    pub output: Option<PathBuf>,
    pub written: usize,
    pub outcomes: Vec<RecordOutcome>,
}

impl RunResult {
    pub fn failures(&self) -> impl Iterator<Item = &RecordOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.failure.is_some())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// `<dir>/<stem>_validated.csv` next to `input`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "survey".to_string());
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.csv"))
}

/// Loads the rule table from `path`, or from the default location.
pub fn load_rules(path: Option<&Path>) -> Result<Arc<RuleSet>> {
    let path = path.map_or_else(default_rules_path, Path::to_path_buf);
    let rules = RuleSet::load(&path)
        .with_context(|| format!("load skip-logic rules: {}", path.display()))?;
    Ok(Arc::new(rules))
}

pub fn run_validation(options: &ValidateOptions) -> Result<RunResult> {
    let span = info_span!("validate", input = %options.input.display());
    let _guard = span.enter();
    let started = Instant::now();

    let rules = load_rules(options.rules.as_deref())?;
    let table = read_survey_csv(&options.input)
        .with_context(|| format!("read survey export: {}", options.input.display()))?;
    let headers = table.headers.clone();
    let outcomes = validate_table(&Validator::new(Arc::clone(&rules)), table);

    let mut result = RunResult {
        input: options.input.clone(),
        rules: rules.source().map(Path::to_path_buf),
        rule_count: rules.len(),
        output: None,
        written: 0,
        outcomes,
    };

    if !options.dry_run {
        let path = options
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&options.input));
        let rows: Vec<OutputRow> = result
            .outcomes
            .iter()
            .filter(|outcome| !(options.exclude_critical && outcome.severity == Severity::Critical))
            .map(|outcome| outcome.row.clone())
            .collect();
        write_annotated_csv(&path, &headers, &rows)
            .with_context(|| format!("write annotated output: {}", path.display()))?;
        result.written = rows.len();
        result.output = Some(path);
    }

    info!(
        records = result.outcomes.len(),
        written = result.written,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "validation complete"
    );
    Ok(result)
}

enum Slot {
    Resolved(usize),
    Unresolved(RawRecord, VariantError),
}

/// Classifies and validates every record of `table`, in input order.
pub fn validate_table(validator: &Validator, table: SurveyTable) -> Vec<RecordOutcome> {
    let mut resolved: Vec<(RawRecord, Variant)> = Vec::new();
    let mut slots = Vec::with_capacity(table.records.len());
    for raw in table.records {
        match resolve_variant(&raw) {
            Ok(variant) => {
                slots.push(Slot::Resolved(resolved.len()));
                resolved.push((raw, variant));
            }
            Err(error) => slots.push(Slot::Unresolved(raw, error)),
        }
    }

    let mut results = validator.validate_batch(&resolved).into_iter();
    let mut outcomes = Vec::with_capacity(slots.len());
    for slot in slots {
        let outcome = match slot {
            Slot::Resolved(index) => {
                let (raw, variant) = &resolved[index];
                match results.next() {
                    Some(Ok(validated)) => RecordOutcome {
                        respondent_id: validated.record.respondent_id(),
                        variant: Some(*variant),
                        severity: validated.result.severity,
                        num_errors: validated.result.num_errors,
                        failure: None,
                        row: validated.to_output_row(raw),
                    },
                    Some(Err(error)) => {
                        warn!(%error, "record construction failed");
                        failed(raw, Some(*variant), error.respondent_id, &error)
                    }
                    None => continue,
                }
            }
            Slot::Unresolved(raw, error) => {
                warn!(%error, "record variant unresolved");
                failed(&raw, None, raw_respondent_id(&raw), &error)
            }
        };
        outcomes.push(outcome);
    }
    outcomes
}

fn failed(
    raw: &RawRecord,
    variant: Option<Variant>,
    respondent_id: Option<i64>,
    error: &dyn std::fmt::Display,
) -> RecordOutcome {
    RecordOutcome {
        respondent_id,
        variant,
        severity: Severity::Critical,
        num_errors: 1,
        failure: Some(error.to_string()),
        row: OutputRow::construction_failure(raw, error),
    }
}
