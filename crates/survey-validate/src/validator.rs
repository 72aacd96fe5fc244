//! Per-record validation pipeline.

use std::sync::Arc;

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use survey_model::{RawRecord, RecordError, SurveyRecord, ValidationResult, Variant};
use survey_standards::RuleSet;
use survey_transform::build_record;

use crate::engine::RuleEngine;
use crate::invariants::check_invariants;
use crate::output::ValidatedRecord;

/// Validates records against a shared, immutable rule set.
#[derive(Debug, Clone)]
pub struct Validator {
    engine: RuleEngine,
}

impl Validator {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self {
            engine: RuleEngine::new(rules),
        }
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    /// Constructs and validates one record.
    ///
    /// Construction errors abort this record only. Skip-logic and invariant
    /// violations never abort; they are carried in the result.
    pub fn validate(
        &self,
        raw: &RawRecord,
        variant: Variant,
    ) -> Result<ValidatedRecord, RecordError> {
        let record = build_record(raw, variant)?;
        Ok(self.validate_record(record))
    }

    /// Validates an already constructed record.
    ///
    /// Violations are ordered: coercion notes, structural invariants, then
    /// table rules in table order.
    pub fn validate_record(&self, record: SurveyRecord) -> ValidatedRecord {
        let mut violations = record.notes.clone();
        violations.extend(check_invariants(&record));
        let evaluation = self.engine.evaluate(record.variant.name(), &record);
        violations.extend(evaluation.violations);

        let result = ValidationResult::from_violations(violations);
        tracing::debug!(
            variant = %record.variant,
            respondent_id = record.respondent_id(),
            severity = %result.severity,
            errors = result.num_errors,
            "validated record"
        );
        ValidatedRecord { record, result }
    }

    /// Validates `(raw, variant)` pairs in parallel.
    ///
    /// Results are returned in input order; each is independent of the others.
    pub fn validate_batch(
        &self,
        records: &[(RawRecord, Variant)],
    ) -> Vec<Result<ValidatedRecord, RecordError>> {
        records
            .par_iter()
            .map(|(raw, variant)| self.validate(raw, *variant))
            .collect()
    }
}
