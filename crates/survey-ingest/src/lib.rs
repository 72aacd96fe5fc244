//! Survey export ingestion.
//!
//! Reads exported survey responses into raw records with Polars, resolves
//! each record's variant from its screener answers, and writes validated
//! records back out as an annotated CSV.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use survey_ingest::{read_survey_csv, resolve_variant};
//!
//! let table = read_survey_csv(Path::new("responses.csv"))?;
//! for record in &table.records {
//!     let variant = resolve_variant(record)?;
//! }
//! ```

mod error;
mod reader;
mod variant;
mod writer;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{INFER_SCHEMA_ROWS, SurveyTable, any_to_raw, dataframe_to_table, read_survey_csv};

// === Variant Resolution ===
pub use variant::resolve_variant;

// === Output ===
pub use writer::{output_columns, write_annotated_csv};
