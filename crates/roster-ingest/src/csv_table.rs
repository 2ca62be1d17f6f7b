use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tracing::debug;

use crate::error::IngestError;

/// A parsed CSV file: normalized headers and trimmed cells.
///
/// Every row has exactly `headers.len()` cells; an empty cell means the
/// value is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Build a Polars frame with one string column per header.
    ///
    /// Empty cells become nulls.
    pub fn to_frame(&self) -> Result<DataFrame, IngestError> {
        let mut columns: Vec<Column> = Vec::with_capacity(self.headers.len());
        for (idx, header) in self.headers.iter().enumerate() {
            let values: Vec<Option<String>> = self
                .rows
                .iter()
                .map(|row| {
                    let value = row.get(idx).map(String::as_str).unwrap_or("");
                    (!value.is_empty()).then(|| value.to_string())
                })
                .collect();
            columns.push(Series::new(header.as_str().into(), values).into());
        }
        Ok(DataFrame::new(columns)?)
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}').trim();
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn validate_headers(headers: &[String]) -> Result<(), IngestError> {
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::parse("no header row"));
    }
    let mut seen = BTreeSet::new();
    for (idx, header) in headers.iter().enumerate() {
        if header.is_empty() {
            return Err(IngestError::parse(format!(
                "empty column name at position {}",
                idx + 1
            )));
        }
        if !seen.insert(header.as_str()) {
            return Err(IngestError::parse(format!("duplicate column name '{header}'")));
        }
    }
    Ok(())
}

/// Parse a roster from any byte source.
///
/// Rows with a different number of fields than the header, invalid UTF-8,
/// and empty or duplicate header names fail the whole read.
pub fn read_csv_table<R: Read>(source: R) -> Result<CsvTable, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(source);
    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
    validate_headers(&headers)?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        rows.push(row);
    }
    debug!(columns = headers.len(), rows = rows.len(), "csv parsed");
    Ok(CsvTable { headers, rows })
}

/// Parse a roster file from disk.
pub fn read_csv_path(path: &Path) -> Result<CsvTable, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv_table(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_whitespace_is_normalized() {
        assert_eq!(normalize_header("  GPA "), "GPA");
        assert_eq!(normalize_header("\u{feff}StudentID"), "StudentID");
        assert_eq!(normalize_header(" Teacher   Assistance "), "Teacher Assistance");
    }

    #[test]
    fn blank_rows_are_skipped() {
        let table = read_csv_table("A,B\n1,2\n,\n3,4\n".as_bytes()).unwrap();
        assert_eq!(table.rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn duplicate_headers_are_rejected() {
        let error = read_csv_table("A, A\n1,2\n".as_bytes()).unwrap_err();
        assert!(error.is_parse_error());
        assert!(error.to_string().contains("duplicate column name 'A'"));
    }

    #[test]
    fn empty_input_has_no_header() {
        let error = read_csv_table("".as_bytes()).unwrap_err();
        assert!(error.to_string().contains("no header row"));
    }

    #[test]
    fn frame_maps_empty_cells_to_null() {
        let table = read_csv_table("Name,GPA\nAsha,\nRavi,8.1\n".as_bytes()).unwrap();
        let frame = table.to_frame().unwrap();
        assert_eq!(frame.height(), 2);
        let gpa = frame.column("GPA").unwrap();
        assert_eq!(gpa.null_count(), 1);
    }
}
