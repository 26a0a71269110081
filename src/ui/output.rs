//! Report rendering for the terminal
//!
//! Renders a [`SurveyReport`] as colored sections with unicode bar charts
//! (`text`), the same layout without colors (`minimal`), or a pretty-printed
//! JSON document (`json`). Every aggregator section degrades independently
//! to an informational empty state; nothing here can fail except JSON
//! serialization.

use crate::analysis::aggregate::{CommentSection, IndicatorRow};
use crate::analysis::clean::nice_col;
use crate::analysis::metrics::SummaryMetrics;
use crate::analysis::report::{RawTable, SurveyReport};
use crate::core::constants::{display, messages, output_formats};
use crate::core::error::Result;
use crate::ui::color::{Colors, bold, colorize};

/// Render the report in the requested output format
pub fn display_report(report: &SurveyReport, format: &str) -> Result<()> {
    match format {
        output_formats::JSON => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        output_formats::MINIMAL => render_text(report, true),
        _ => render_text(report, false),
    }
    Ok(())
}

fn render_text(report: &SurveyReport, plain: bool) {
    display_summary(&report.summary, plain);
    display_indicators(&report.indicators, plain);
    display_questions(report, plain);
    display_comments(&report.comment_sections, plain);
    if let Some(ref raw) = report.raw_table {
        display_raw_table(raw, plain);
    }
}

fn section(title: &str, plain: bool) {
    println!();
    if plain {
        println!("> {title}");
    } else {
        println!("> {}", bold(&colorize(title, Colors::BRIGHT_CYAN)));
    }
}

fn info(message: &str, plain: bool) {
    if plain {
        println!("  {message}");
    } else {
        println!("  {}", colorize(message, Colors::DIM));
    }
}

fn display_summary(summary: &SummaryMetrics, plain: bool) {
    section(messages::SECTION_SUMMARY, plain);

    let metrics = [
        (messages::METRIC_RESPONDENTS, summary.respondents.to_string()),
        (messages::METRIC_PERIOD, format_period(summary)),
        (messages::METRIC_MEAN_SCORE, format_mean_score(summary)),
    ];

    let label_width = metrics
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    for (label, value) in metrics {
        let padded = pad(label, label_width);
        if plain {
            println!("  {padded}  {value}");
        } else {
            println!(
                "  {}  {}",
                colorize(&padded, Colors::CYAN),
                colorize(&value, Colors::BRIGHT_WHITE)
            );
        }
    }
}

/// "2024-03-01 → 2024-03-09", or the placeholder when nothing parsed
pub fn format_period(summary: &SummaryMetrics) -> String {
    match summary.period {
        Some(period) => format!("{} → {}", period.start, period.end),
        None => display::NOT_AVAILABLE.to_string(),
    }
}

/// Two-decimal mean score, or the placeholder when undefined
pub fn format_mean_score(summary: &SummaryMetrics) -> String {
    match summary.mean_score {
        Some(score) => format!("{score:.2}"),
        None => display::NOT_AVAILABLE.to_string(),
    }
}

fn display_indicators(indicators: &[IndicatorRow], plain: bool) {
    section(messages::SECTION_INDICATORS, plain);

    if indicators.is_empty() {
        info(messages::NO_NUMERIC_INDICATORS, plain);
        return;
    }

    let label_width = indicators
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);
    let max_mean = indicators
        .iter()
        .map(|row| row.mean)
        .fold(f64::NEG_INFINITY, f64::max);

    for row in indicators {
        let chart = bar(row.mean, max_mean, bar_width(label_width));
        let label = pad(&row.label, label_width);
        if plain {
            println!("  {label}  {:5.2}  {chart}", row.mean);
        } else {
            println!(
                "  {label}  {}  {}",
                colorize(&format!("{:5.2}", row.mean), Colors::BRIGHT_WHITE),
                colorize(&chart, Colors::GREEN)
            );
        }
    }
}

fn display_questions(report: &SurveyReport, plain: bool) {
    section(messages::SECTION_QUESTIONS, plain);

    let Some(ref breakdown) = report.question_breakdown else {
        info(messages::NO_CATEGORICAL_QUESTIONS, plain);
        return;
    };

    let question = nice_col(&breakdown.column);
    if plain {
        println!("  Questão: {question}");
    } else {
        println!("  Questão: {}", bold(&question));
    }
    println!();

    let answer_width = breakdown
        .rows
        .iter()
        .map(|row| row.answer.chars().count())
        .max()
        .unwrap_or(0)
        .min(display::MAX_LABEL_CHARS);
    let count_width = breakdown
        .rows
        .iter()
        .map(|row| row.count.to_string().len())
        .max()
        .unwrap_or(1);
    let max_count = breakdown.rows.first().map(|row| row.count).unwrap_or(0);

    for (position, row) in breakdown.rows.iter().enumerate() {
        let answer = pad(&nice_col(&row.answer), answer_width);
        // the chart covers the top answers; the rest are table-only
        let chart = if position < display::CHART_TOP_ANSWERS {
            bar(row.count as f64, max_count as f64, bar_width(answer_width))
        } else {
            String::new()
        };
        if plain {
            println!("  {answer}  {:>count_width$}  {chart}", row.count);
        } else {
            println!(
                "  {answer}  {}  {}",
                colorize(&format!("{:>count_width$}", row.count), Colors::BRIGHT_WHITE),
                colorize(&chart, Colors::BLUE)
            );
        }
    }

    if report.questions.len() > 1 {
        println!();
        info("Outras questões (selecione com --question):", plain);
        for (index, question) in report.questions.iter().enumerate() {
            info(&format!("  {}. {}", index + 1, nice_col(question)), plain);
        }
    }
}

fn display_comments(sections: &[CommentSection], plain: bool) {
    section(messages::SECTION_COMMENTS, plain);

    if sections.is_empty() {
        info(messages::NO_COMMENT_COLUMNS, plain);
        return;
    }

    for comment_section in sections {
        if plain {
            println!("  {}", comment_section.column);
        } else {
            println!("  {}", bold(&comment_section.column));
        }

        if comment_section.comments.is_empty() {
            info(messages::NO_COMMENTS_IN_COLUMN, plain);
        } else {
            for comment in &comment_section.comments {
                println!("    - {comment}");
            }
            if comment_section.total > comment_section.comments.len() {
                info(
                    &format!(
                        "(mostrando {} de {})",
                        comment_section.comments.len(),
                        comment_section.total
                    ),
                    plain,
                );
            }
        }
        println!();
    }
}

fn display_raw_table(raw: &RawTable, plain: bool) {
    section(messages::SECTION_RAW_TABLE, plain);

    let header = raw
        .columns
        .iter()
        .map(|column| truncate_cell(column))
        .collect::<Vec<_>>()
        .join(" | ");
    if plain {
        println!("  {header}");
    } else {
        println!("  {}", bold(&header));
    }
    println!("  {}", "-".repeat(header.chars().count().min(120)));

    for row in &raw.rows {
        let line = row
            .iter()
            .map(|cell| truncate_cell(cell))
            .collect::<Vec<_>>()
            .join(" | ");
        println!("  {line}");
    }
}

/// Horizontal chart bar scaled against the largest value
fn bar(value: f64, max: f64, width: usize) -> String {
    if value <= 0.0 || max <= 0.0 || width == 0 {
        return String::new();
    }
    let length = ((value / max) * width as f64).round() as usize;
    "█".repeat(length.max(1))
}

/// Bar width that fits next to the label column on this terminal
fn bar_width(label_width: usize) -> usize {
    let terminal_width = term_size::dimensions().map(|(w, _)| w).unwrap_or(100);
    terminal_width
        .saturating_sub(label_width + 12)
        .min(display::MAX_BAR_WIDTH)
}

/// Pad to a display width, counting characters rather than bytes
fn pad(text: &str, width: usize) -> String {
    let length = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(length)))
}

fn truncate_cell(text: &str) -> String {
    if text.chars().count() <= display::RAW_CELL_CHARS {
        return text.to_string();
    }
    let kept: String = text.chars().take(display::RAW_CELL_CHARS - 1).collect();
    format!("{kept}{}", display::ELLIPSIS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::metrics::Period;
    use chrono::NaiveDate;

    #[test]
    fn test_bar_scales_against_max() {
        assert_eq!(bar(5.0, 5.0, 10).chars().count(), 10);
        assert_eq!(bar(2.5, 5.0, 10).chars().count(), 5);
        // nonzero values always draw at least one block
        assert_eq!(bar(0.01, 5.0, 10).chars().count(), 1);
        assert_eq!(bar(0.0, 5.0, 10), "");
        assert_eq!(bar(-1.0, 5.0, 10), "");
    }

    #[test]
    fn test_pad_counts_chars_not_bytes() {
        assert_eq!(pad("ção", 5), "ção  ");
        assert_eq!(pad("abcdef", 3), "abcdef");
    }

    #[test]
    fn test_format_period() {
        let summary = SummaryMetrics {
            respondents: 1,
            period: Some(Period {
                start: NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
                end: NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date"),
            }),
            mean_score: None,
        };

        assert_eq!(format_period(&summary), "2024-03-01 → 2024-03-09");
        assert_eq!(format_mean_score(&summary), "—");
    }

    #[test]
    fn test_format_mean_score_two_decimals() {
        let summary = SummaryMetrics {
            respondents: 1,
            period: None,
            mean_score: Some(4.349),
        };

        assert_eq!(format_mean_score(&summary), "4.35");
        assert_eq!(format_period(&summary), "—");
    }

    #[test]
    fn test_truncate_cell_bounds_width() {
        let long: String = "a".repeat(80);
        let truncated = truncate_cell(&long);

        assert_eq!(truncated.chars().count(), display::RAW_CELL_CHARS);
        assert!(truncated.ends_with('…'));
        assert_eq!(truncate_cell("curto"), "curto");
    }
}
