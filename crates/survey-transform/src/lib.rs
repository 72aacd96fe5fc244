//! Survey record construction.
//!
//! - **coerce**: sentinel handling and per-kind coercion of raw values
//! - **numeric**: numeric parsing and the signed-decimal projection
//! - **datetime**: accepted date and date-time input formats
//! - **builder**: typed record construction from a flat raw mapping
//! - **derive**: derived fields, computed once in a fixed order

pub mod builder;
pub mod coerce;
pub mod datetime;
pub mod derive;
pub mod numeric;

pub use builder::{build_record, raw_respondent_id};
pub use coerce::{Coerced, coerce_field, is_missing_sentinel};
pub use derive::{THANKSGIVING_WEEK_START, derive_fields, terminal_for_airline};
pub use numeric::{first_numeric_token, numeric_projection};
