//! CSV import and export
//!
//! Imports parse a header row plus data rows into fresh [`Row`]s; exports
//! serialize the visible columns of the current view back to CSV text.
//!
//! ## Memory Limits
//!
//! To prevent unbounded memory growth:
//! - Files larger than 100MB are rejected (see [`MAX_CSV_SIZE_MB`])
//! - Files with more than 100,000 rows are rejected (see [`MAX_CSV_ROWS`])

use crate::constants::{MAX_CSV_ROWS, MAX_CSV_SIZE_MB};
use crate::data::error::{DataError, DataResult};
use crate::types::{Row, RowRecord, column_id};
use std::path::{Path, PathBuf};

/// Rows and normalized header columns read from a CSV document
#[derive(Clone, Debug, Default)]
pub struct ParsedCsv {
    /// Column identifiers in header order, blanks dropped
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

/// Parse a CSV file from disk
///
/// # Memory Limits
/// - Files larger than [`MAX_CSV_SIZE_MB`]MB will return [`DataError::TooLarge`]
/// - Files with more than [`MAX_CSV_ROWS`] rows will return [`DataError::TooManyRows`]
pub fn parse_csv_file(path: &Path) -> DataResult<ParsedCsv> {
    // Check file size before reading
    let metadata = std::fs::metadata(path)?;
    let size_mb = metadata.len() / (1024 * 1024);
    if size_mb > MAX_CSV_SIZE_MB as u64 {
        return Err(DataError::TooLarge {
            size_mb,
            max_mb: MAX_CSV_SIZE_MB,
        });
    }

    let content = std::fs::read_to_string(path)?;
    parse_csv_content(&content)
}

/// Parse CSV content with a header row.
///
/// Header names are normalized into column identifiers. Empty lines are
/// skipped; quoting follows RFC 4180. Every value is kept as text. A short
/// row leaves its trailing columns absent and fields past the header are
/// dropped.
pub fn parse_csv_content(content: &str) -> DataResult<ParsedCsv> {
    if content.trim().is_empty() {
        return Err(DataError::EmptyFile);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let header_columns: Vec<Option<String>> = reader.headers()?.iter().map(column_id).collect();
    if header_columns.iter().all(Option::is_none) {
        return Err(DataError::NoColumns);
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if rows.len() >= MAX_CSV_ROWS {
            return Err(DataError::TooManyRows {
                rows: rows.len() + 1, // +1 for the current row that exceeded limit
                max_rows: MAX_CSV_ROWS,
            });
        }
        let row: RowRecord = header_columns
            .iter()
            .zip(record.iter())
            .filter_map(|(column, value)| column.as_ref().map(|c| (c.clone(), value)))
            .collect();
        rows.push(Row::new(row));
    }

    let mut columns: Vec<String> = Vec::new();
    for column in header_columns.into_iter().flatten() {
        if !columns.contains(&column) {
            columns.push(column);
        }
    }

    tracing::debug!(rows = rows.len(), columns = columns.len(), "parsed CSV content");
    Ok(ParsedCsv { columns, rows })
}

/// Write exported CSV into `dir/file_name`, returning the path written to
pub fn write_csv_file(
    dir: &Path,
    file_name: &str,
    columns: &[String],
    rows: &[&Row],
) -> DataResult<PathBuf> {
    let path = dir.join(file_name);
    let content = write_csv_content(columns, rows);
    std::fs::write(&path, content)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "exported CSV");
    Ok(path)
}

/// Serialize rows to CSV text.
///
/// The header lists `columns` in order; each line takes the row's value for
/// every column, empty when absent. Lines are joined with `\n` and there is
/// no trailing newline.
pub fn write_csv_content(columns: &[String], rows: &[&Row]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);

    let headers: Vec<String> = columns.iter().map(|col| quote_csv_field(col)).collect();
    lines.push(headers.join(","));

    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|col| quote_csv_field(&row.record.display(col)))
            .collect();
        lines.push(cells.join(","));
    }

    lines.join("\n")
}

/// Quote a CSV field if necessary (contains comma, quotes, or newlines)
fn quote_csv_field(value: &str) -> String {
    let needs_quoting =
        value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r');

    if needs_quoting {
        // Escape internal quotes by doubling them
        let escaped = value.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        value.to_string()
    }
}
