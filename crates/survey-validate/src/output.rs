//! Validated records and their output rows.

use std::fmt;

use serde::Serialize;
use survey_model::{
    DERIVED_FIELDS, FieldValue, RawRecord, ResolvedField, Severity, SurveyRecord, ValidationResult,
    VariantSchema,
};

pub const VALIDATION_ERROR: &str = "validation_error";
pub const VALIDATION_SEVERITY: &str = "validation_severity";
pub const VALIDATION_NUM_ERRORS: &str = "validation_num_errors";

/// Derived fields that hold codes and therefore get a label column.
const DERIVED_CODED: &[&str] = &["non_airport_activity_type", "airport_terminal"];

/// A constructed record with its validation outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedRecord {
    pub record: SurveyRecord,
    pub result: ValidationResult,
}

impl ValidatedRecord {
    /// Output columns for this record.
    ///
    /// Columns, in order: the raw input fields (rendered as text), derived
    /// fields, `<field>_label` columns for coded fields, then the three
    /// validation columns. Input columns that share a name with a produced
    /// column are overwritten in place.
    pub fn to_output_row(&self, raw: &RawRecord) -> OutputRow {
        let mut row = OutputRow::from_raw(raw);
        for name in DERIVED_FIELDS {
            let value = self.record.get(name).map(FieldValue::render).unwrap_or_default();
            row.set(name, value);
        }

        let schema = VariantSchema::for_variant(self.record.variant);
        let coded = schema
            .fields()
            .iter()
            .filter(|field| field.kind().vocabulary().is_some())
            .map(ResolvedField::name)
            .chain(DERIVED_CODED.iter().copied());
        for name in coded {
            let label = self
                .record
                .get(name)
                .and_then(FieldValue::label_text)
                .unwrap_or_default();
            row.set(&format!("{name}_label"), label);
        }

        row.set_validation(
            &self.result.messages(),
            self.result.severity,
            self.result.num_errors,
        );
        row
    }
}

/// One output record: ordered `(column, value)` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    cells: Vec<(String, String)>,
}

impl OutputRow {
    /// Raw fields rendered as text, in key order.
    pub fn from_raw(raw: &RawRecord) -> Self {
        Self {
            cells: raw
                .iter()
                .map(|(name, value)| (name.clone(), value.render()))
                .collect(),
        }
    }

    /// Row for a record that could not be constructed or classified.
    ///
    /// The failure is written as a single critical error so the record is
    /// never silently dropped.
    pub fn construction_failure(raw: &RawRecord, error: &dyn fmt::Display) -> Self {
        let mut row = Self::from_raw(raw);
        row.set_validation(&[error.to_string().as_str()], Severity::Critical, 1);
        row
    }

    /// Sets `column`, replacing an existing cell in place.
    pub fn set(&mut self, column: &str, value: String) {
        match self.cells.iter_mut().find(|(name, _)| name == column) {
            Some((_, cell)) => *cell = value,
            None => self.cells.push((column.to_string(), value)),
        }
    }

    fn set_validation(&mut self, messages: &[&str], severity: Severity, num_errors: usize) {
        let errors = serde_json::Value::from(messages.to_vec()).to_string();
        self.set(VALIDATION_ERROR, errors);
        self.set(VALIDATION_SEVERITY, severity.as_str().to_string());
        self.set(VALIDATION_NUM_ERRORS, num_errors.to_string());
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Severity label of the row, if it has been validated.
    pub fn severity(&self) -> Option<Severity> {
        self.get(VALIDATION_SEVERITY)?.parse().ok()
    }
}
