//! CSV export of a report table.
//!
//! The header row is the column labels; cells are exactly the table cells,
//! so a blank value exports as `—` rather than an empty field.

use std::io::Write;

use super::ReportTable;
use crate::error::{DocsError, Result};

/// Write `table` as CSV to `writer`.
pub fn write_csv<W: Write>(table: &ReportTable, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(table.columns.iter().map(|c| c.label))?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render `table` as a CSV string.
pub fn to_csv_string(table: &ReportTable) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(table.columns.iter().map(|c| c.label))?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| DocsError::Io(std::io::Error::other(e.to_string())))?;
    String::from_utf8(bytes).map_err(|e| DocsError::InvalidRecord(e.to_string()))
}

/// File name for a CSV download, e.g. `RPT-20240101-ABC123.csv`.
pub fn file_name(report_id: &str) -> String {
    let safe: String = report_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{}.csv", safe)
}
