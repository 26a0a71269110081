//! Column role classification
//!
//! Pure name-pattern predicates plus one content-sampling test decide what
//! each column is: timestamp, identifying, numeric indicator, comment field,
//! or categorical question. Nothing is persisted; roles are recomputed from
//! the loaded table on every run. Phrasing-based false positives and
//! negatives are an accepted limitation of the heuristic.

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::analysis::clean::coerce_numeric;
use crate::core::constants::classification;
use crate::core::types::{Cell, ResponseTable};

/// Role tag attached to a column name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnRole {
    Timestamp,
    Identifying,
    NumericIndicator,
    Comment,
    Categorical,
}

/// The classification of a whole table, computed once per run.
///
/// A column may satisfy several predicates at once; the categorical set is
/// built by excluding a column when any disqualifying predicate holds, so
/// the outcome does not depend on predicate evaluation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPlan {
    /// The designated timestamp column, if any (at most one)
    pub timestamp: Option<String>,
    /// Columns matched by the identifying heuristics (name/e-mail)
    pub identifying: Vec<String>,
    /// Small-cardinality numeric rating columns
    pub numeric: Vec<String>,
    /// Free-text comment columns
    pub comments: Vec<String>,
    /// Everything else: textual questions summarized by frequency
    pub categorical: Vec<String>,
}

impl ColumnPlan {
    /// Resolve the role of a single column under this plan.
    ///
    /// Precedence mirrors the aggregation pipeline: timestamp and
    /// identifying columns are never treated as questions, comments beat
    /// numeric for display purposes.
    pub fn role_of(&self, column: &str) -> ColumnRole {
        let name = column.to_string();
        if self.timestamp.as_deref() == Some(column) {
            ColumnRole::Timestamp
        } else if self.identifying.contains(&name) {
            ColumnRole::Identifying
        } else if self.comments.contains(&name) {
            ColumnRole::Comment
        } else if self.numeric.contains(&name) {
            ColumnRole::NumericIndicator
        } else {
            ColumnRole::Categorical
        }
    }
}

/// Pick the timestamp column, if any.
///
/// Preference substrings are scanned in the outer loop so a match on a
/// higher-preference label anywhere in the table beats a lower-preference
/// match on an earlier column.
pub fn guess_timestamp_col(columns: &[String]) -> Option<String> {
    for preferred in classification::TIMESTAMP_PREFERENCES {
        let needle = preferred.to_lowercase();
        for column in columns {
            if column.to_lowercase().contains(&needle) {
                return Some(column.clone());
            }
        }
    }
    None
}

/// Whether a column name denotes an e-mail field
pub fn is_email_col(colname: &str) -> bool {
    let c = colname.to_lowercase();
    c.contains("e-mail") || c.contains("email")
}

/// Whether a column name denotes a respondent-name field
pub fn is_name_col(colname: &str) -> bool {
    let c = colname.to_lowercase();
    c == "nome" || (c.contains("nome") && c.contains("seu"))
}

/// Whether a column name denotes a free-text comment field
pub fn is_comment_col(colname: &str) -> bool {
    let c = colname.to_lowercase();
    classification::COMMENT_KEYWORDS.iter().any(|k| c.contains(k))
}

/// Columns the anonymizer must drop
pub fn identifying_columns(table: &ResponseTable) -> Vec<String> {
    table
        .columns()
        .iter()
        .filter(|c| is_email_col(c) || is_name_col(c))
        .cloned()
        .collect()
}

/// Content-sampling test for numeric indicator columns.
///
/// A column qualifies when at least half of all rows coerce to a number and
/// the distinct parsed values fit a short rating scale. The dual threshold
/// separates Likert-style columns from free numeric entry and sparse noise.
pub fn is_numeric_indicator<'a>(
    cells: impl Iterator<Item = &'a Cell>,
    row_count: usize,
) -> bool {
    if row_count == 0 {
        return false;
    }

    let parsed: Vec<f64> = cells.filter_map(coerce_numeric).collect();
    let parse_rate = parsed.len() as f64 / row_count as f64;
    if parse_rate < classification::NUMERIC_PARSE_RATE {
        return false;
    }

    let distinct: FxHashSet<u64> = parsed.iter().map(|v| v.to_bits()).collect();
    distinct.len() <= classification::MAX_DISTINCT_NUMERIC
}

/// Classify every column of the table.
///
/// `working` is the post-anonymization view (identical to `original` when
/// anonymization is off). Numeric detection samples the working table so
/// dropped identifying columns can never surface as indicators; the
/// categorical set is derived from the original column list with all
/// disqualifying predicates applied.
pub fn classify_columns(
    original: &ResponseTable,
    working: &ResponseTable,
    hide_identifying: bool,
) -> ColumnPlan {
    let timestamp = guess_timestamp_col(original.columns());
    let identifying = identifying_columns(original);

    let numeric: Vec<String> = working
        .columns()
        .iter()
        .filter(|column| {
            if timestamp.as_deref() == Some(column.as_str()) {
                return false;
            }
            match working.column(column) {
                Some(cells) => is_numeric_indicator(cells, working.row_count()),
                None => false,
            }
        })
        .cloned()
        .collect();

    let comments: Vec<String> = original
        .columns()
        .iter()
        .filter(|c| is_comment_col(c))
        .filter(|c| !(hide_identifying && identifying.contains(c)))
        .cloned()
        .collect();

    let categorical: Vec<String> = original
        .columns()
        .iter()
        .filter(|c| !numeric.contains(c))
        .filter(|c| timestamp.as_deref() != Some(c.as_str()))
        .filter(|c| !is_comment_col(c))
        .filter(|c| !(hide_identifying && identifying.contains(c)))
        .cloned()
        .collect();

    ColumnPlan {
        timestamp,
        identifying,
        numeric,
        comments,
        categorical,
    }
}
