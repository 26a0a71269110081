//! Aggregation over classified columns
//!
//! Three independent summarizers: numeric indicator means, categorical
//! answer frequencies, and comment listings. Each one only ever sees the
//! anonymized working table; missing cells never contribute to a mean and
//! never appear as a category.

use serde::Serialize;

use crate::analysis::clean::{clean_text, coerce_column, mean, nice_col};
use crate::core::types::ResponseTable;
use rustc_hash::FxHashMap;

/// One numeric indicator: display label and mean of the present values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorRow {
    pub label: String,
    pub mean: f64,
}

/// One distinct cleaned answer and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyRow {
    pub answer: String,
    pub count: usize,
}

/// The comments of one free-text column, capped for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentSection {
    /// Truncated column label
    pub column: String,
    /// Cleaned non-empty comments in row order, at most the display cap
    pub comments: Vec<String>,
    /// Total non-empty comments before capping
    pub total: usize,
}

/// Compute the mean of every numeric indicator column.
///
/// Rows come back sorted by mean descending; the sort is stable so tied
/// means keep the column order of the file. Columns whose values are all
/// missing cannot occur here (they would have failed the parse-rate gate),
/// but are skipped defensively rather than rendered as NaN.
pub fn indicator_means(table: &ResponseTable, numeric_cols: &[String]) -> Vec<IndicatorRow> {
    let mut rows: Vec<IndicatorRow> = numeric_cols
        .iter()
        .filter_map(|column| {
            let cells = table.column(column)?;
            let mean = mean(&coerce_column(cells))?;
            Some(IndicatorRow {
                label: nice_col(column),
                mean,
            })
        })
        .collect();

    rows.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    rows
}

/// Count the cleaned answers of one categorical column.
///
/// Missing cells and answers that clean down to the empty string are not
/// counted. Rows are ordered most-frequent first; ties keep the order in
/// which the answer first appeared.
pub fn question_frequencies(table: &ResponseTable, column: &str) -> Vec<FrequencyRow> {
    let Some(cells) = table.column(column) else {
        return Vec::new();
    };

    let mut counts: FxHashMap<String, (usize, usize)> = FxHashMap::default();
    let mut next_seen = 0usize;
    for cell in cells {
        if cell.is_missing() {
            continue;
        }
        let answer = clean_text(cell);
        if answer.is_empty() {
            continue;
        }
        let entry = counts.entry(answer).or_insert_with(|| {
            let order = (0, next_seen);
            next_seen += 1;
            order
        });
        entry.0 += 1;
    }

    let mut rows: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(answer, (count, first_seen))| (answer, count, first_seen))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    rows.into_iter()
        .map(|(answer, count, _)| FrequencyRow { answer, count })
        .collect()
}

/// Collect the cleaned comments of every comment column.
///
/// Each section lists non-empty cleaned comments in row order, capped at
/// `max_comments`; `total` keeps the uncapped count so the presenter can
/// say "showing N of M". Columns with zero non-empty comments still yield
/// a section so the presenter renders an explicit empty state.
pub fn collect_comments(
    table: &ResponseTable,
    comment_cols: &[String],
    max_comments: usize,
) -> Vec<CommentSection> {
    comment_cols
        .iter()
        .filter_map(|column| {
            let cells = table.column(column)?;
            let all: Vec<String> = cells
                .filter(|cell| !cell.is_missing())
                .map(clean_text)
                .filter(|comment| !comment.is_empty())
                .collect();

            let total = all.len();
            let mut comments = all;
            comments.truncate(max_comments);

            Some(CommentSection {
                column: nice_col(column),
                comments,
                total,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Cell;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn column_table(name: &str, cells: Vec<Cell>) -> ResponseTable {
        ResponseTable::new(
            vec![name.to_string()],
            cells.into_iter().map(|c| vec![c]).collect(),
        )
    }

    #[test]
    fn test_indicator_mean_skips_missing() {
        let table = column_table(
            "Nota",
            vec![
                text("1"),
                text("2"),
                text("1"),
                text("1"),
                text("2"),
                Cell::Empty,
            ],
        );

        let rows = indicator_means(&table, &["Nota".to_string()]);

        assert_eq!(rows.len(), 1);
        assert!((rows[0].mean - 1.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_indicator_means_sorted_descending_stable() {
        let table = ResponseTable::new(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec![
                vec![text("1"), text("3"), text("1")],
                vec![text("3"), text("3"), text("3")],
            ],
        );

        let rows = indicator_means(
            &table,
            &["a".to_string(), "b".to_string(), "c".to_string()],
        );

        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        // b mean=3.0 first; a and c tie at 2.0 and keep file order
        assert_eq!(labels, ["b", "a", "c"]);
    }

    #[test]
    fn test_indicator_labels_are_truncated() {
        let long_name: String = "x".repeat(70);
        let table = column_table(&long_name, vec![text("1")]);

        let rows = indicator_means(&table, &[long_name]);

        assert_eq!(rows[0].label.chars().count(), 58);
    }

    #[test]
    fn test_question_frequencies_order_and_counts() {
        let table = column_table(
            "Recomendaria?",
            vec![text("Yes"), text("No"), text("Yes"), text("Yes")],
        );

        let rows = question_frequencies(&table, "Recomendaria?");

        assert_eq!(
            rows,
            vec![
                FrequencyRow { answer: "Yes".to_string(), count: 3 },
                FrequencyRow { answer: "No".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_question_frequencies_tie_break_is_first_seen() {
        let table = column_table(
            "Q",
            vec![text("b"), text("a"), text("a"), text("b"), text("c")],
        );

        let rows = question_frequencies(&table, "Q");

        let answers: Vec<&str> = rows.iter().map(|r| r.answer.as_str()).collect();
        assert_eq!(answers, ["b", "a", "c"]);
    }

    #[test]
    fn test_question_frequencies_merge_after_cleaning() {
        // whitespace variants and embedded e-mails collapse to one answer
        let table = column_table(
            "Q",
            vec![
                text("Sim  mesmo"),
                text("Sim\nmesmo"),
                Cell::Empty,
                text("   "),
            ],
        );

        let rows = question_frequencies(&table, "Q");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].answer, "Sim mesmo");
        assert_eq!(rows[0].count, 2);
    }

    #[test]
    fn test_collect_comments_caps_and_counts() {
        let cells: Vec<Cell> = (0..40).map(|i| text(&format!("comment {i}"))).collect();
        let table = column_table("Comentários", cells);

        let sections = collect_comments(&table, &["Comentários".to_string()], 30);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].comments.len(), 30);
        assert_eq!(sections[0].total, 40);
        assert_eq!(sections[0].comments[0], "comment 0");
    }

    #[test]
    fn test_collect_comments_empty_column_yields_section() {
        let table = column_table("Comentários", vec![Cell::Empty, text("  ")]);

        let sections = collect_comments(&table, &["Comentários".to_string()], 30);

        assert_eq!(sections.len(), 1);
        assert!(sections[0].comments.is_empty());
        assert_eq!(sections[0].total, 0);
    }

    #[test]
    fn test_collect_comments_cleans_text() {
        let table = column_table("Comentários", vec![text("fale comigo: eu@aqui.com  obrigado")]);

        let sections = collect_comments(&table, &["Comentários".to_string()], 30);

        assert_eq!(
            sections[0].comments[0],
            "fale comigo: [e-mail removido] obrigado"
        );
    }
}
