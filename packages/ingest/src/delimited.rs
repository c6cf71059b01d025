//! Delimited-text (CSV / TSV) row reading.
//!
//! Published sheet exports arrive as tab- or comma-separated text. Cells
//! are classified into [`CellValue`] on read so that numeric serials and
//! text dates keep their distinct representations.

use crate::fields::RawRow;
use crate::{CellValue, IngestError};

/// Reads delimited text into rows keyed by canonicalized headers.
///
/// Short rows are tolerated (trailing cells become absent); fully empty
/// rows are dropped.
///
/// # Errors
///
/// Returns [`IngestError::Csv`] when the input is structurally malformed.
pub fn read_rows(text: &str, delimiter: u8) -> Result<Vec<RawRow>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| (header.to_string(), CellValue::classify(cell)))
            .collect();
        if !row.is_empty() && record.iter().any(|cell| !cell.trim().is_empty()) {
            rows.push(row);
        }
    }

    Ok(rows)
}

/// Reads comma-separated text.
///
/// # Errors
///
/// Returns [`IngestError::Csv`] when the input is structurally malformed.
pub fn read_csv(text: &str) -> Result<Vec<RawRow>, IngestError> {
    read_rows(text, b',')
}

/// Reads tab-separated text, the format published sheet tabs export as.
///
/// # Errors
///
/// Returns [`IngestError::Csv`] when the input is structurally malformed.
pub fn read_tsv(text: &str) -> Result<Vec<RawRow>, IngestError> {
    read_rows(text, b'\t')
}
