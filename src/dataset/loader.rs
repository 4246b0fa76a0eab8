//! CSV loading with header validation.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use super::{Dataset, Record};
use crate::error::{ReportError, Result};

/// Columns every results file must provide. Further columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 6] = ["V", "E", "Typ", "Instance", "EK_ms", "Dinic_ms"];

/// Load and validate a results file.
///
/// # Errors
/// Returns an error if the file cannot be opened, a required column is
/// missing, or a row does not parse.
pub fn load(path: &Path) -> Result<Dataset> {
    let file = File::open(path).map_err(|source| ReportError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = read_from(BufReader::new(file))?;
    let extra = extra_columns(dataset.columns());
    if !extra.is_empty() {
        info!(columns = ?extra, "ignoring extra columns");
    }
    info!(
        path = %path.display(),
        rows = dataset.records().len(),
        "loaded benchmark results"
    );
    Ok(dataset)
}

/// Parse CSV data with a header row.
///
/// # Errors
/// Returns an error if a required column is missing or a row does not parse.
pub fn read_from<R: Read>(reader: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    validate_columns(&columns)?;
    debug!(columns = ?columns, "header validated");

    let mut records = Vec::new();
    for row in reader.deserialize::<Record>() {
        records.push(row.map_err(record_error)?);
    }

    Ok(Dataset::new(columns, records))
}

/// Check that every required column is present.
///
/// # Errors
/// Returns `MissingColumns` listing the absent required columns (in
/// canonical order) together with the columns that were found.
pub fn validate_columns(columns: &[String]) -> Result<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !columns.iter().any(|c| c == *required))
        .map(|required| (*required).to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ReportError::MissingColumns {
            missing,
            found: columns.to_vec(),
        })
    }
}

/// Columns beyond the required ones, in file order.
fn extra_columns(columns: &[String]) -> Vec<&str> {
    columns
        .iter()
        .map(String::as_str)
        .filter(|c| !REQUIRED_COLUMNS.contains(c))
        .collect()
}

fn record_error(err: csv::Error) -> ReportError {
    if let csv::ErrorKind::Deserialize { pos, err: cause } = err.kind() {
        return ReportError::InvalidRecord {
            line: pos.as_ref().map_or(0, csv::Position::line),
            message: cause.to_string(),
        };
    }
    ReportError::Csv(err)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
