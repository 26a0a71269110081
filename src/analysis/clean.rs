//! Cell cleaning and numeric coercion
//!
//! Every piece of respondent-authored text passes through [`clean_text`]
//! before display or counting: e-mail shaped substrings are redacted and
//! whitespace runs collapse to single spaces. Numeric coercion normalizes
//! decimal commas and degrades anything unparseable to missing, never to an
//! error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::constants::{display, redaction};
use crate::core::types::Cell;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(redaction::EMAIL_PATTERN).expect("e-mail pattern compiles"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("pattern compiles"));

/// Clean a raw cell into a display string.
///
/// Missing cells become the empty string. The function is idempotent:
/// cleaning an already-cleaned string yields the same string.
pub fn clean_text(cell: &Cell) -> String {
    if cell.is_missing() {
        return String::new();
    }
    clean_str(&cell.render())
}

/// Clean an already-stringified value
pub fn clean_str(s: &str) -> String {
    let redacted = EMAIL_RE.replace_all(s, redaction::EMAIL_MARKER);
    WHITESPACE_RE.replace_all(&redacted, " ").trim().to_string()
}

/// Coerce one cell to a number.
///
/// Decimal commas are normalized to points before parsing. Unparseable or
/// empty input is missing, not zero and not an error; non-finite parses are
/// also treated as missing so means stay finite.
pub fn coerce_numeric(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Number(n) if n.is_finite() => Some(*n),
        Cell::Text(s) => {
            let normalized = s.trim().replace(',', ".");
            match normalized.parse::<f64>() {
                Ok(n) if n.is_finite() => Some(n),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Coerce a whole column, keeping the row-parallel shape
pub fn coerce_column<'a>(cells: impl Iterator<Item = &'a Cell>) -> Vec<Option<f64>> {
    cells.map(coerce_numeric).collect()
}

/// Mean over the present values only; `None` when every value is missing
pub fn mean(values: &[Option<f64>]) -> Option<f64> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        None
    } else {
        Some(present.iter().sum::<f64>() / present.len() as f64)
    }
}

/// Bound a column label for charts and tables.
///
/// Labels up to 60 characters pass through verbatim; longer ones keep the
/// first 57 characters plus an ellipsis. Plain character truncation, no
/// word-boundary logic.
pub fn nice_col(col: &str) -> String {
    if col.chars().count() <= display::MAX_LABEL_CHARS {
        return col.to_string();
    }
    let kept: String = col.chars().take(display::LABEL_TRUNCATE_AT).collect();
    format!("{kept}{}", display::ELLIPSIS)
}
