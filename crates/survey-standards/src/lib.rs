#![deny(unsafe_code)]

//! Skip-logic rule tables.
//!
//! Rules are loaded once from a CSV table, grouped per variant class, and
//! shared read-only across every validation call.

pub mod csv;
pub mod doctor;
pub mod error;
pub mod paths;
pub mod rule_set;

pub use crate::csv::skip_logic::parse_skip_logic_rules;
pub use crate::doctor::{DoctorFinding, DoctorReport, FindingKind};
pub use crate::error::StandardsError;
pub use crate::paths::{STANDARDS_ENV_VAR, default_rules_path, standards_root};
pub use crate::rule_set::RuleSet;
