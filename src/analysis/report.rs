//! Report assembly
//!
//! Runs the aggregators over a classified table and bundles their outputs
//! into one [`SurveyReport`] value that every presenter (terminal, JSON,
//! HTML dashboard) renders from.

use serde::Serialize;

use crate::analysis::aggregate::{
    CommentSection, FrequencyRow, IndicatorRow, collect_comments, indicator_means,
    question_frequencies,
};
use crate::analysis::classify::ColumnPlan;
use crate::analysis::clean::nice_col;
use crate::analysis::metrics::{SummaryMetrics, summarize};
use crate::core::error::{FormsightError, Result};
use crate::core::types::ResponseTable;

/// Frequency breakdown of the selected categorical question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionBreakdown {
    /// Full column name of the selected question
    pub column: String,
    /// All distinct answers, most frequent first
    pub rows: Vec<FrequencyRow>,
}

/// Stringified dump of the non-sensitive table, rendered on request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Everything the presenters need for one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyReport {
    pub summary: SummaryMetrics,
    pub indicators: Vec<IndicatorRow>,
    /// Full names of every categorical question, in file order
    pub questions: Vec<String>,
    /// Breakdown of the selected question; `None` when no questions exist
    pub question_breakdown: Option<QuestionBreakdown>,
    pub comment_sections: Vec<CommentSection>,
    /// Included only when the caller asked for the raw table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_table: Option<RawTable>,
}

/// Caller-configurable knobs of one report run
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Question selector: full name (case-insensitive) or 1-based index
    pub question: Option<String>,
    /// Display cap per comment column
    pub max_comments: usize,
    /// Whether to include the raw-table dump
    pub include_raw_table: bool,
}

/// Resolve the `--question` selector against the categorical set.
///
/// Without a selector the first question is picked. A selector may be the
/// question's full name (case-insensitive) or its 1-based position; anything
/// else is an invalid argument listing what is available.
pub fn resolve_question(questions: &[String], selector: Option<&str>) -> Result<Option<String>> {
    let Some(selector) = selector else {
        return Ok(questions.first().cloned());
    };

    if questions.is_empty() {
        return Err(FormsightError::InvalidArgument(
            "a question was selected but the table has no categorical questions".to_string(),
        ));
    }

    if let Ok(index) = selector.trim().parse::<usize>() {
        if (1..=questions.len()).contains(&index) {
            return Ok(Some(questions[index - 1].clone()));
        }
        return Err(FormsightError::InvalidArgument(format!(
            "question index {index} out of range 1-{}",
            questions.len()
        )));
    }

    let wanted = selector.to_lowercase();
    if let Some(found) = questions.iter().find(|q| q.to_lowercase() == wanted) {
        return Ok(Some(found.clone()));
    }

    let available = questions
        .iter()
        .enumerate()
        .map(|(i, q)| format!("  {}. {}", i + 1, nice_col(q)))
        .collect::<Vec<_>>()
        .join("\n");
    Err(FormsightError::InvalidArgument(format!(
        "unknown question '{selector}'. Available questions:\n{available}"
    )))
}

/// Run every aggregator and assemble the report.
///
/// `original` is the table as loaded; `working` is the anonymized view the
/// aggregators read from. The respondent count is the only fact taken from
/// the original table.
pub fn build_report(
    original: &ResponseTable,
    working: &ResponseTable,
    plan: &ColumnPlan,
    options: &ReportOptions,
) -> Result<SurveyReport> {
    let summary = summarize(original, working, plan.timestamp.as_deref());
    let indicators = indicator_means(working, &plan.numeric);

    let selected = resolve_question(&plan.categorical, options.question.as_deref())?;
    let question_breakdown = selected.map(|column| QuestionBreakdown {
        rows: question_frequencies(working, &column),
        column,
    });

    let comment_sections = collect_comments(working, &plan.comments, options.max_comments);

    let raw_table = options.include_raw_table.then(|| RawTable {
        columns: working.columns().to_vec(),
        rows: working
            .rows()
            .iter()
            .map(|row| row.iter().map(|cell| cell.render()).collect())
            .collect(),
    });

    Ok(SurveyReport {
        summary,
        indicators,
        questions: plan.categorical.clone(),
        question_breakdown,
        comment_sections,
        raw_table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::classify::{classify_columns, identifying_columns};
    use crate::core::types::Cell;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn sample_table() -> ResponseTable {
        ResponseTable::new(
            vec![
                "Carimbo de data/hora".to_string(),
                "E-mail".to_string(),
                "Nota geral".to_string(),
                "Você recomendaria?".to_string(),
                "Comentários".to_string(),
            ],
            vec![
                vec![
                    text("2024-03-01 10:00:00"),
                    text("ana@x.com"),
                    text("5"),
                    text("Sim"),
                    text("Muito bom, escreva para ana@x.com"),
                ],
                vec![
                    text("2024-03-03 09:00:00"),
                    text("bia@x.com"),
                    text("4"),
                    text("Sim"),
                    Cell::Empty,
                ],
                vec![
                    text("2024-03-02 12:00:00"),
                    text("caio@x.com"),
                    text("3"),
                    text("Não"),
                    text("Pode melhorar"),
                ],
            ],
        )
    }

    fn build(options: &ReportOptions) -> SurveyReport {
        let original = sample_table();
        let working = original.without_columns(&identifying_columns(&original));
        let plan = classify_columns(&original, &working, true);
        build_report(&original, &working, &plan, options).expect("report builds")
    }

    fn default_options() -> ReportOptions {
        ReportOptions {
            question: None,
            max_comments: 30,
            include_raw_table: false,
        }
    }

    #[test]
    fn test_report_covers_every_section() {
        let report = build(&default_options());

        assert_eq!(report.summary.respondents, 3);
        assert!(report.summary.period.is_some());
        assert_eq!(report.indicators.len(), 1);
        assert_eq!(report.questions, ["Você recomendaria?".to_string()]);

        let breakdown = report.question_breakdown.expect("has breakdown");
        assert_eq!(breakdown.rows[0].answer, "Sim");
        assert_eq!(breakdown.rows[0].count, 2);

        assert_eq!(report.comment_sections.len(), 1);
        assert_eq!(report.comment_sections[0].total, 2);
        assert!(
            report.comment_sections[0].comments[0].contains("[e-mail removido]")
        );
        assert!(report.raw_table.is_none());
    }

    #[test]
    fn test_raw_table_excludes_identifying_columns() {
        let mut options = default_options();
        options.include_raw_table = true;

        let report = build(&options);
        let raw = report.raw_table.expect("raw table requested");

        assert!(!raw.columns.contains(&"E-mail".to_string()));
        assert_eq!(raw.rows.len(), 3);
    }

    #[test]
    fn test_question_selected_by_index() {
        let mut options = default_options();
        options.question = Some("1".to_string());

        let report = build(&options);
        assert_eq!(
            report.question_breakdown.expect("breakdown").column,
            "Você recomendaria?"
        );
    }

    #[test]
    fn test_unknown_question_is_invalid_argument() {
        let questions = vec!["Você recomendaria?".to_string()];

        match resolve_question(&questions, Some("inexistente")) {
            Err(FormsightError::InvalidArgument(msg)) => {
                assert!(msg.contains("Você recomendaria?"));
            }
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }

        match resolve_question(&questions, Some("7")) {
            Err(FormsightError::InvalidArgument(msg)) => assert!(msg.contains("out of range")),
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_question_name_match_is_case_insensitive() {
        let questions = vec!["Você recomendaria?".to_string()];

        let resolved = resolve_question(&questions, Some("você recomendaria?"))
            .expect("resolves");
        assert_eq!(resolved, Some("Você recomendaria?".to_string()));
    }

    #[test]
    fn test_no_questions_yields_no_breakdown() {
        let original = ResponseTable::new(
            vec!["Nota".to_string()],
            vec![vec![text("5")], vec![text("4")]],
        );
        let plan = classify_columns(&original, &original, true);

        let report =
            build_report(&original, &original, &plan, &default_options()).expect("builds");

        assert!(report.question_breakdown.is_none());
        assert!(report.questions.is_empty());
    }
}
