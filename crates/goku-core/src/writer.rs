//! Tabular CSV output.
//!
//! Takes per-field column vectors and zips them into rows, padding shorter
//! columns with empty strings so a ragged input still produces a rectangular
//! table. Quoting and escaping are handled by the `csv` crate.

use std::path::Path;

use crate::error::Result;

/// Write `columns` to `path` as a CSV table.
///
/// The file is created (truncating any existing one), gets one header
/// record, then `max(column lengths)` data records. Column `i` of each data
/// record is the row-th element of `columns[i]`, or `""` once that column is
/// exhausted. The writer is flushed before returning on success; the handle
/// is closed on every path.
///
/// # Arguments
/// * `path` - Output file path
/// * `headers` - One header per column, written first
/// * `columns` - Per-field value vectors, not required to be equal length
///
/// # Errors
/// `GokuError::CsvError` / `GokuError::IoError` on filesystem failure.
pub fn write_table<P: AsRef<Path>>(path: P, headers: &[&str], columns: &[Vec<String>]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(headers)?;

    let row_count = columns.iter().map(Vec::len).max().unwrap_or(0);
    for row in 0..row_count {
        let record = columns
            .iter()
            .map(|column| column.get(row).map(String::as_str).unwrap_or(""));
        writer.write_record(record)?;
    }

    writer.flush()?;
    Ok(())
}
