//! Summary metrics
//!
//! The three headline facts of the report: respondent count, response
//! period, and overall mean score. Each metric degrades independently to a
//! not-available placeholder; one missing metric never blocks the others.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::analysis::clean::{coerce_column, mean};
use crate::core::constants::classification;
use crate::core::types::{Cell, ResponseTable};

/// First and last response dates of the survey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// The headline metrics of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetrics {
    /// Total rows of the original table, identifying columns included
    pub respondents: usize,
    /// Min/max of the parsed timestamp column, when one exists and parses
    pub period: Option<Period>,
    /// Mean of the first score column, when one exists and has values
    pub mean_score: Option<f64>,
}

/// Text timestamp formats seen in form exports, tried in order
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Parse one cell as a timestamp; unparseable content is missing
pub fn parse_timestamp(cell: &Cell) -> Option<NaiveDateTime> {
    match cell {
        Cell::DateTime(dt) => Some(*dt),
        Cell::Text(s) => parse_timestamp_str(s),
        _ => None,
    }
}

fn parse_timestamp_str(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    for format in TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }
    for format in ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, format) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Compute the headline metrics.
///
/// The respondent count comes from the original table; the period and the
/// score lookup run over the working (anonymized) view so dropped columns
/// can never leak into a metric.
pub fn summarize(
    original: &ResponseTable,
    working: &ResponseTable,
    timestamp_col: Option<&str>,
) -> SummaryMetrics {
    SummaryMetrics {
        respondents: original.row_count(),
        period: response_period(working, timestamp_col),
        mean_score: mean_score(working),
    }
}

/// Min/max calendar dates of the timestamp column
fn response_period(table: &ResponseTable, timestamp_col: Option<&str>) -> Option<Period> {
    let cells = table.column(timestamp_col?)?;

    let mut bounds: Option<(NaiveDateTime, NaiveDateTime)> = None;
    for parsed in cells.filter_map(parse_timestamp) {
        bounds = Some(match bounds {
            None => (parsed, parsed),
            Some((min, max)) => (min.min(parsed), max.max(parsed)),
        });
    }

    bounds.map(|(min, max)| Period {
        start: min.date(),
        end: max.date(),
    })
}

/// Mean of the first column whose name contains the score keyword
fn mean_score(table: &ResponseTable) -> Option<f64> {
    let score_col = table
        .columns()
        .iter()
        .find(|c| c.to_lowercase().contains(classification::SCORE_COLUMN_KEYWORD))?;
    let cells = table.column(score_col)?;
    mean(&coerce_column(cells))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp(&text("2024-03-01 10:12:33")).is_some());
        assert!(parse_timestamp(&text("2024/03/01 10:12:33")).is_some());
        assert!(parse_timestamp(&text("01/03/2024 10:12")).is_some());
        assert!(parse_timestamp(&text("2024-03-01")).is_some());
        assert!(parse_timestamp(&text("não sei")).is_none());
        assert!(parse_timestamp(&Cell::Number(5.0)).is_none());
    }

    #[test]
    fn test_period_spans_min_to_max() {
        let table = ResponseTable::new(
            vec!["Carimbo de data/hora".to_string()],
            vec![
                vec![text("2024-03-05 10:00:00")],
                vec![text("2024-03-01 08:30:00")],
                vec![text("rabisco")],
                vec![text("2024-03-09 23:59:59")],
            ],
        );

        let metrics = summarize(&table, &table, Some("Carimbo de data/hora"));

        assert_eq!(metrics.respondents, 4);
        let period = metrics.period.expect("period parses");
        assert_eq!(period.start, date(2024, 3, 1));
        assert_eq!(period.end, date(2024, 3, 9));
    }

    #[test]
    fn test_period_absent_when_nothing_parses() {
        let table = ResponseTable::new(
            vec!["Carimbo de data/hora".to_string()],
            vec![vec![text("hoje")], vec![Cell::Empty]],
        );

        let metrics = summarize(&table, &table, Some("Carimbo de data/hora"));
        assert_eq!(metrics.period, None);

        let no_ts = summarize(&table, &table, None);
        assert_eq!(no_ts.period, None);
    }

    #[test]
    fn test_mean_score_uses_first_score_column() {
        let table = ResponseTable::new(
            vec![
                "Nota".to_string(),
                "Pontuação total".to_string(),
                "Pontuação extra".to_string(),
            ],
            vec![
                vec![text("1"), text("4,5"), text("0")],
                vec![text("1"), text("3,5"), text("0")],
            ],
        );

        let metrics = summarize(&table, &table, None);
        assert_eq!(metrics.mean_score, Some(4.0));
    }

    #[test]
    fn test_mean_score_absent_without_score_column() {
        let table = ResponseTable::new(
            vec!["Nota".to_string()],
            vec![vec![text("5")]],
        );

        let metrics = summarize(&table, &table, None);
        assert_eq!(metrics.mean_score, None);
    }

    #[test]
    fn test_mean_score_undefined_when_all_missing() {
        let table = ResponseTable::new(
            vec!["Pontuação".to_string()],
            vec![vec![text("n/a")], vec![Cell::Empty]],
        );

        let metrics = summarize(&table, &table, None);
        assert_eq!(metrics.mean_score, None);
    }

    #[test]
    fn test_respondents_counted_from_original_table() {
        let original = ResponseTable::new(
            vec!["E-mail".to_string()],
            vec![vec![text("a@x.com")], vec![text("b@x.com")]],
        );
        let working = original.without_columns(&["E-mail".to_string()]);

        let metrics = summarize(&original, &working, None);
        assert_eq!(metrics.respondents, 2);
    }
}
