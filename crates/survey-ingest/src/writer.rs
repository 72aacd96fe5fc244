//! Annotated CSV output.

use std::collections::BTreeSet;
use std::path::Path;

use survey_validate::OutputRow;

use crate::error::{IngestError, Result};

/// Output column order: `headers` first, then columns the rows add, in the
/// order they are first seen.
pub fn output_columns<'a>(headers: &'a [String], rows: &'a [OutputRow]) -> Vec<&'a str> {
    let mut seen: BTreeSet<&str> = headers.iter().map(String::as_str).collect();
    let mut columns: Vec<&str> = headers.iter().map(String::as_str).collect();
    for column in rows.iter().flat_map(OutputRow::columns) {
        if seen.insert(column) {
            columns.push(column);
        }
    }
    columns
}

/// Writes `rows` to `path`. Cells a row does not carry are written empty.
pub fn write_annotated_csv(path: &Path, headers: &[String], rows: &[OutputRow]) -> Result<()> {
    let columns = output_columns(headers, rows);
    let mut writer =
        csv::Writer::from_path(path).map_err(|e| IngestError::write(path.to_path_buf(), &e))?;
    writer
        .write_record(&columns)
        .map_err(|e| IngestError::write(path.to_path_buf(), &e))?;
    for row in rows {
        let record = columns.iter().map(|column| row.get(column).unwrap_or(""));
        writer
            .write_record(record)
            .map_err(|e| IngestError::write(path.to_path_buf(), &e))?;
    }
    writer.flush().map_err(|e| IngestError::CsvWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::info!(
        path = %path.display(),
        rows = rows.len(),
        columns = columns.len(),
        "wrote annotated records"
    );
    Ok(())
}
