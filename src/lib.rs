//! formsight - summarize and anonymize survey form exports
//!
//! One invocation ingests a spreadsheet export (XLSX or CSV), classifies
//! each column by name and content heuristics, drops identifying columns,
//! aggregates ratings, answer frequencies, and comments, and renders the
//! result to the terminal, to JSON, or to an HTML dashboard.
//!
//! The pipeline is strictly linear: load → classify → anonymize →
//! aggregate → present. Nothing is persisted between runs.

pub mod analysis;
pub mod config;
pub mod core;
pub mod ingest;
pub mod reporting;
pub mod ui;

// Re-export the most used items at the crate root
pub use analysis::{
    ColumnPlan, ColumnRole, ReportOptions, SurveyReport, build_report, classify_columns,
    identifying_columns,
};
pub use config::Config;
pub use crate::core::error::{FormsightError, Result};
pub use crate::core::types::{Cell, ResponseTable};
pub use ingest::load_table;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    const FIXTURE: &str = "\
Carimbo de data/hora,Seu nome,E-mail,Nota geral,Pontuação final,Você recomendaria?,Comentários e sugestões
2024-03-01 10:00:00,Ana,ana@x.com,5,\"9,5\",Sim,Muito bom! Escreva para ana@x.com
2024-03-03 09:30:00,Bia,bia@x.com,4,\"8,0\",Sim,
2024-03-02 12:15:00,Caio,caio@x.com,3,\"7,5\",Não,Pode   melhorar
";

    fn load_fixture() -> std::result::Result<ResponseTable, Box<dyn std::error::Error>> {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile()?;
        file.write_all(FIXTURE.as_bytes())?;
        Ok(load_table(file.path())?)
    }

    #[test]
    fn test_full_pipeline_from_csv() -> TestResult {
        let original = load_fixture()?;
        let working = original.without_columns(&identifying_columns(&original));
        let plan = classify_columns(&original, &working, true);

        let options = ReportOptions {
            question: None,
            max_comments: 30,
            include_raw_table: true,
        };
        let report = build_report(&original, &working, &plan, &options)?;

        // summary metrics
        assert_eq!(report.summary.respondents, 3);
        let period = report.summary.period.expect("timestamps parse");
        assert_eq!(period.start.to_string(), "2024-03-01");
        assert_eq!(period.end.to_string(), "2024-03-03");
        let score = report.summary.mean_score.expect("score column present");
        assert!((score - 25.0 / 3.0).abs() < 1e-9);

        // indicators: "Nota geral" and "Pontuação final" both qualify
        assert_eq!(report.indicators.len(), 2);
        assert_eq!(report.indicators[0].label, "Pontuação final");
        assert_eq!(report.indicators[1].label, "Nota geral");

        // categorical breakdown
        let breakdown = report.question_breakdown.expect("question selected");
        assert_eq!(breakdown.column, "Você recomendaria?");
        assert_eq!(breakdown.rows[0].answer, "Sim");
        assert_eq!(breakdown.rows[0].count, 2);

        // comments: cleaned, redacted, empty cell skipped
        assert_eq!(report.comment_sections.len(), 1);
        let comments = &report.comment_sections[0].comments;
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0], "Muito bom! Escreva para [e-mail removido]");
        assert_eq!(comments[1], "Pode melhorar");

        // anonymization: identifying columns absent everywhere
        let raw = report.raw_table.expect("raw table requested");
        assert!(!raw.columns.contains(&"E-mail".to_string()));
        assert!(!raw.columns.contains(&"Seu nome".to_string()));
        assert!(!report.questions.contains(&"E-mail".to_string()));
        Ok(())
    }

    #[test]
    fn test_report_serializes_to_json() -> TestResult {
        let original = load_fixture()?;
        let working = original.without_columns(&identifying_columns(&original));
        let plan = classify_columns(&original, &working, true);
        let options = ReportOptions {
            question: None,
            max_comments: 30,
            include_raw_table: false,
        };
        let report = build_report(&original, &working, &plan, &options)?;

        let json = serde_json::to_string(&report)?;
        let parsed: serde_json::Value = serde_json::from_str(&json)?;

        assert_eq!(parsed["summary"]["respondents"], 3);
        assert!(parsed["question_breakdown"]["rows"].is_array());
        // raw_table not requested, so the key is omitted entirely
        assert!(parsed.get("raw_table").is_none());
        Ok(())
    }
}
