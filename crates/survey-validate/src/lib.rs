//! Record validation.
//!
//! A [`Validator`] owns the shared rule set and runs one record through
//! construction, structural invariants, and the skip-logic [`RuleEngine`].
//! Severity aggregation is [`Severity::aggregate`]; one policy applies to
//! every variant.

mod engine;
mod invariants;
mod output;
mod validator;

pub use engine::{Evaluation, RuleEngine};
pub use invariants::{RACE_FIELDS, check_invariants, check_race_exclusivity};
pub use output::{
    OutputRow, VALIDATION_ERROR, VALIDATION_NUM_ERRORS, VALIDATION_SEVERITY, ValidatedRecord,
};
pub use survey_model::{Severity, SeverityCounts, ValidationResult};
pub use validator::Validator;
