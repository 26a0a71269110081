use chrono::NaiveDateTime;
use std::fmt;

/// A single raw cell value as read from the spreadsheet.
///
/// Cells keep the loader's typing; nothing is coerced at load time.
/// Typed accessors downstream (numeric coercion, text cleaning, timestamp
/// parsing) decide how to interpret each variant and degrade malformed
/// content to "missing" instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Blank cell or whitespace-only content
    Empty,
    /// Free text as written by the respondent
    Text(String),
    /// Numeric cell (integers are widened to f64)
    Number(f64),
    /// Boolean cell (rare in form exports, but xlsx supports it)
    Bool(bool),
    /// Date/time cell resolved by the loader
    DateTime(NaiveDateTime),
}

impl Cell {
    /// Whether this cell counts as missing for aggregation purposes
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Stringify the cell for display and text cleaning.
    ///
    /// Whole numbers render without a trailing `.0` so categorical answers
    /// typed as numbers group under one label.
    pub fn render(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            Cell::Bool(b) => b.to_string(),
            Cell::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// The in-memory response table: one row per survey submission.
///
/// Columns are unique by name, in file order. The table is created once by
/// the loader and never mutated; anonymization derives a filtered copy via
/// [`ResponseTable::without_columns`] while the original is retained for
/// metrics that need every column (e.g. total respondent count).
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl ResponseTable {
    /// Build a table from header names and rows.
    ///
    /// Ragged rows are normalized to the header width: short rows are padded
    /// with [`Cell::Empty`], excess cells are dropped.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.truncate(width);
                row.resize(width, Cell::Empty);
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Column names in file order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of respondents (data rows)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds zero data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in file order
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Position of a column by exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterate the cells of one column in row order
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Cell>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    /// Derive a copy of the table without the given columns.
    ///
    /// Unknown names are ignored. Row order and the relative order of the
    /// surviving columns are preserved.
    pub fn without_columns(&self, drop: &[String]) -> ResponseTable {
        let keep: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, name)| !drop.contains(name))
            .map(|(idx, _)| idx)
            .collect();

        let columns = keep.iter().map(|&i| self.columns[i].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| keep.iter().map(|&i| row[i].clone()).collect())
            .collect();

        ResponseTable { columns, rows }
    }
}
