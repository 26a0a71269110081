//! Spreadsheet ingestion
//!
//! Reads one survey export fully into memory as a [`ResponseTable`].
//! Excel workbooks go through calamine (first sheet only), CSV through the
//! csv crate. The loader does no validation beyond the empty-table check;
//! malformed cells are kept as-is and coerced later by typed accessors.

use calamine::{Data, DataType, Reader, open_workbook_auto};
use chrono::{NaiveDate, NaiveDateTime};
use rustc_hash::FxHashMap;
use std::path::Path;

use crate::core::error::{FormsightError, Result};
use crate::core::types::{Cell, ResponseTable};

/// Load a survey export into a [`ResponseTable`].
///
/// The parser is picked by file extension. Returns
/// [`FormsightError::EmptyInput`] when the file parses but holds zero data
/// rows; the caller must halt and show the empty-state message instead of
/// rendering a report.
pub fn load_table(path: &Path) -> Result<ResponseTable> {
    if !path.exists() {
        return Err(FormsightError::FileNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let table = match extension.as_str() {
        "xlsx" | "xls" | "xlsm" | "xlsb" => load_excel(path)?,
        "csv" => load_csv(path)?,
        other => return Err(FormsightError::UnsupportedFormat(other.to_string())),
    };

    if table.is_empty() {
        return Err(FormsightError::EmptyInput);
    }
    Ok(table)
}

/// Read the first worksheet of an Excel workbook
fn load_excel(path: &Path) -> Result<ResponseTable> {
    let mut workbook = open_workbook_auto(path)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(FormsightError::EmptyInput)??;

    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| cell.as_string().unwrap_or_else(|| cell.to_string()))
            .collect(),
        None => return Err(FormsightError::EmptyInput),
    };

    let data_rows = rows
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();

    Ok(ResponseTable::new(normalize_headers(headers), data_rows))
}

/// Read a CSV export; every cell stays text
fn load_csv(path: &Path) -> Result<ResponseTable> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.trim().is_empty() {
                        Cell::Empty
                    } else {
                        Cell::Text(field.to_string())
                    }
                })
                .collect(),
        );
    }

    Ok(ResponseTable::new(normalize_headers(headers), rows))
}

/// Map a calamine cell onto our loader-typed [`Cell`]
fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => {
            if s.trim().is_empty() {
                Cell::Empty
            } else {
                Cell::Text(s.clone())
            }
        }
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => dt.as_datetime().map(Cell::DateTime).unwrap_or(Cell::Empty),
        Data::DateTimeIso(s) => parse_iso_datetime(s)
            .map(Cell::DateTime)
            .unwrap_or_else(|| Cell::Text(s.clone())),
        Data::DurationIso(s) => Cell::Text(s.clone()),
        // Formula error cells degrade to missing, never fail the load
        Data::Error(_) => Cell::Empty,
    }
}

/// Parse the ISO date/datetime strings calamine surfaces for typed cells
fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Make header names unique and non-empty.
///
/// Blank headers become `column_N` (1-based file position); duplicates get
/// a pandas-style `.1`, `.2`, ... suffix so later name-keyed lookups stay
/// unambiguous.
fn normalize_headers(raw: Vec<String>) -> Vec<String> {
    let named: Vec<String> = raw
        .into_iter()
        .enumerate()
        .map(|(idx, name)| {
            if name.trim().is_empty() {
                format!("column_{}", idx + 1)
            } else {
                name
            }
        })
        .collect();

    let mut seen: FxHashMap<String, usize> = FxHashMap::default();
    named
        .into_iter()
        .map(|name| {
            let count = seen.entry(name.clone()).or_insert(0);
            let unique = if *count == 0 {
                name.clone()
            } else {
                format!("{name}.{count}")
            };
            *count += 1;
            unique
        })
        .collect()
}
