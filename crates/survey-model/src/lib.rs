//! Data model for the airport ground-access survey.
//!
//! - **vocabulary**: fixed code lists that bound every coded field
//! - **value**: raw input values and typed field values
//! - **schema**: field descriptors, field groups, and per-variant schemas
//! - **variant**: the nine concrete respondent variants and their resolution
//! - **record**: the typed respondent record with its owned trip
//! - **rule**: declarative skip-logic rules
//! - **validation**: severities, violations, and validation results
//! - **error**: construction error taxonomy

mod codes;
pub mod error;
pub mod record;
pub mod rule;
pub mod schema;
pub mod validation;
pub mod value;
pub mod variant;
pub mod vocabulary;

pub use error::{FieldError, RecordError, VariantError};
pub use record::{DERIVED_FIELDS, FieldMap, SurveyRecord, Trip};
pub use rule::{CheckKind, RuleCondition, SkipLogicRule};
pub use schema::{
    FieldDescriptor, FieldGroup, FieldKind, GroupId, Owner, Presence, ResolvedField, VariantSchema,
};
pub use validation::{Severity, SeverityCounts, ValidationResult, Violation, ViolationSource};
pub use value::{FieldValue, RawRecord, RawValue};
pub use variant::{Direction, Residency, Variant};
pub use vocabulary::Vocabulary;
