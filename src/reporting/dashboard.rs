//! Self-contained HTML dashboard generation
//!
//! Renders the survey report as a single HTML file: stat cards for the
//! summary metrics, Chart.js horizontal bar charts for indicator means and
//! answer frequencies, and the comment listings. Written only when the
//! caller passes `--html-report`.

use crate::analysis::report::SurveyReport;
use crate::core::constants::{display, messages};
use crate::ui::output::{format_mean_score, format_period};
use std::fs;
use std::io;

/// Constants for dashboard styling and layout
mod dashboard_constants {
    /// Chart.js CDN URL for rendering charts
    pub const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js";
}

/// Error type for dashboard generation
#[derive(Debug)]
pub enum DashboardError {
    FileWrite(io::Error),
    Serialization(String),
}

impl std::fmt::Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardError::FileWrite(e) => write!(f, "Failed to write dashboard file: {e}"),
            DashboardError::Serialization(e) => write!(f, "Failed to serialize data: {e}"),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashboardError::FileWrite(e) => Some(e),
            DashboardError::Serialization(_) => None,
        }
    }
}

impl From<io::Error> for DashboardError {
    fn from(e: io::Error) -> Self {
        DashboardError::FileWrite(e)
    }
}

/// HTML dashboard generator for survey reports
pub struct HtmlDashboard;

impl HtmlDashboard {
    /// Generate and write an HTML dashboard to the specified path
    pub fn generate_dashboard(
        report: &SurveyReport,
        output_path: &str,
    ) -> Result<(), DashboardError> {
        let html_content = Self::generate_html_content(report)?;
        fs::write(output_path, html_content)?;
        Ok(())
    }

    /// Generate the complete HTML document content
    fn generate_html_content(report: &SurveyReport) -> Result<String, DashboardError> {
        let css_styles = Self::generate_css();
        let js_scripts = Self::generate_javascript();
        let body_content = Self::generate_body_content(report)?;

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Visualização da Avaliação - formsight</title>
    <script src="{}"></script>
    <style>{}</style>
</head>
<body>
    {}
    <script>{}</script>
</body>
</html>"#,
            dashboard_constants::CHART_JS_CDN,
            css_styles,
            body_content,
            js_scripts
        ))
    }

    fn generate_css() -> &'static str {
        r#"
        :root {
            --primary-color: #2563eb;
            --success-color: #059669;
            --bg-color: #f8fafc;
            --card-bg: #ffffff;
            --border-color: #e2e8f0;
            --text-primary: #1e293b;
            --text-muted: #64748b;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
            background: var(--bg-color);
            color: var(--text-primary);
            padding: 2rem;
        }
        .container { max-width: 1100px; margin: 0 auto; }
        .header { margin-bottom: 2rem; }
        .header h1 { font-size: 1.6rem; }
        .header p { color: var(--text-muted); margin-top: 0.25rem; }
        .stats-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
            gap: 1rem;
            margin-bottom: 2rem;
        }
        .stat-card {
            background: var(--card-bg);
            border: 1px solid var(--border-color);
            border-radius: 0.5rem;
            padding: 1.25rem;
            text-align: center;
        }
        .stat-value { font-size: 1.8rem; font-weight: 700; }
        .stat-label { color: var(--text-muted); margin-top: 0.25rem; }
        .chart-container {
            background: var(--card-bg);
            border: 1px solid var(--border-color);
            border-radius: 0.5rem;
            padding: 1.5rem;
            margin-bottom: 2rem;
        }
        .chart-title { margin-bottom: 1rem; font-size: 1.1rem; }
        table { width: 100%; border-collapse: collapse; margin-top: 1rem; }
        th, td {
            text-align: left;
            padding: 0.5rem 0.75rem;
            border-bottom: 1px solid var(--border-color);
        }
        th { color: var(--text-muted); font-weight: 600; }
        td.num { text-align: right; }
        .comments-section {
            background: var(--card-bg);
            border: 1px solid var(--border-color);
            border-radius: 0.5rem;
            padding: 1.5rem;
            margin-bottom: 2rem;
        }
        .comments-section h3 { margin-bottom: 0.75rem; }
        .comments-section ul { padding-left: 1.25rem; }
        .comments-section li { margin-bottom: 0.4rem; }
        .empty-state { color: var(--text-muted); font-style: italic; }
        .footer { color: var(--text-muted); font-size: 0.85rem; }
        "#
    }

    fn generate_javascript() -> &'static str {
        r#"
        document.addEventListener('DOMContentLoaded', () => {
            const data = window.reportData;
            if (!data) return;

            const barChart = (canvasId, labels, values, color) => {
                const canvas = document.getElementById(canvasId);
                if (!canvas || labels.length === 0) return;
                new Chart(canvas, {
                    type: 'bar',
                    data: {
                        labels: labels,
                        datasets: [{ data: values, backgroundColor: color }]
                    },
                    options: {
                        indexAxis: 'y',
                        plugins: { legend: { display: false } },
                        scales: { x: { beginAtZero: true } }
                    }
                });
            };

            barChart('indicatorsChart', data.indicators.labels, data.indicators.values, '#059669');
            barChart('frequenciesChart', data.frequencies.labels, data.frequencies.values, '#2563eb');
        });
        "#
    }

    fn generate_body_content(report: &SurveyReport) -> Result<String, DashboardError> {
        let chart_data = Self::generate_chart_data(report)?;

        Ok(format!(
            r#"
    <div class="container">
        <div class="header">
            <h1>Visualização da Avaliação</h1>
            <p>Visualização agregada e anonimizada dos dados exportados do formulário.</p>
        </div>
        {}
        {}
        {}
        {}
        <p class="footer">Relatório gerado automaticamente pelo formsight.</p>
    </div>
    <script>window.reportData = {};</script>
            "#,
            Self::generate_stats_section(report),
            Self::generate_indicators_section(report),
            Self::generate_frequencies_section(report),
            Self::generate_comments_section(report),
            chart_data
        ))
    }

    /// Serialize the chart labels/values consumed by the Chart.js glue
    fn generate_chart_data(report: &SurveyReport) -> Result<String, DashboardError> {
        let frequencies: Vec<_> = report
            .question_breakdown
            .as_ref()
            .map(|breakdown| {
                breakdown
                    .rows
                    .iter()
                    .take(display::CHART_TOP_ANSWERS)
                    .collect()
            })
            .unwrap_or_default();

        let data = serde_json::json!({
            "indicators": {
                "labels": report.indicators.iter().map(|r| r.label.clone()).collect::<Vec<_>>(),
                "values": report.indicators.iter().map(|r| r.mean).collect::<Vec<_>>(),
            },
            "frequencies": {
                "labels": frequencies.iter().map(|r| r.answer.clone()).collect::<Vec<_>>(),
                "values": frequencies.iter().map(|r| r.count).collect::<Vec<_>>(),
            },
        });

        serde_json::to_string(&data).map_err(|e| DashboardError::Serialization(e.to_string()))
    }

    fn generate_stats_section(report: &SurveyReport) -> String {
        format!(
            r#"
        <div class="stats-grid">
            {}
            {}
            {}
        </div>
            "#,
            Self::generate_stat_card(
                &report.summary.respondents.to_string(),
                messages::METRIC_RESPONDENTS
            ),
            Self::generate_stat_card(&format_period(&report.summary), messages::METRIC_PERIOD),
            Self::generate_stat_card(
                &format_mean_score(&report.summary),
                messages::METRIC_MEAN_SCORE
            ),
        )
    }

    /// Generate a single statistics card
    fn generate_stat_card(value: &str, label: &str) -> String {
        format!(
            r#"
            <div class="stat-card">
                <div class="stat-value">{}</div>
                <div class="stat-label">{}</div>
            </div>
            "#,
            html_escape(value),
            html_escape(label)
        )
    }

    fn generate_indicators_section(report: &SurveyReport) -> String {
        if report.indicators.is_empty() {
            return format!(
                r#"<div class="chart-container"><h3 class="chart-title">{}</h3><p class="empty-state">{}</p></div>"#,
                messages::SECTION_INDICATORS,
                messages::NO_NUMERIC_INDICATORS
            );
        }

        let table_rows = report
            .indicators
            .iter()
            .map(|row| {
                format!(
                    r#"<tr><td>{}</td><td class="num">{:.2}</td></tr>"#,
                    html_escape(&row.label),
                    row.mean
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"
        <div class="chart-container">
            <h3 class="chart-title">{}</h3>
            <canvas id="indicatorsChart" height="{}"></canvas>
            <table>
                <tr><th>Indicador</th><th>Média</th></tr>
                {}
            </table>
        </div>
            "#,
            messages::SECTION_INDICATORS,
            60 + 25 * report.indicators.len(),
            table_rows
        )
    }

    fn generate_frequencies_section(report: &SurveyReport) -> String {
        let Some(ref breakdown) = report.question_breakdown else {
            return format!(
                r#"<div class="chart-container"><h3 class="chart-title">{}</h3><p class="empty-state">{}</p></div>"#,
                messages::SECTION_QUESTIONS,
                messages::NO_CATEGORICAL_QUESTIONS
            );
        };

        let table_rows = breakdown
            .rows
            .iter()
            .map(|row| {
                format!(
                    r#"<tr><td>{}</td><td class="num">{}</td></tr>"#,
                    html_escape(&row.answer),
                    row.count
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"
        <div class="chart-container">
            <h3 class="chart-title">{} — {}</h3>
            <canvas id="frequenciesChart" height="{}"></canvas>
            <table>
                <tr><th>Resposta</th><th>Quantidade</th></tr>
                {}
            </table>
        </div>
            "#,
            messages::SECTION_QUESTIONS,
            html_escape(&crate::analysis::clean::nice_col(&breakdown.column)),
            60 + 25 * breakdown.rows.len().min(display::CHART_TOP_ANSWERS),
            table_rows
        )
    }

    fn generate_comments_section(report: &SurveyReport) -> String {
        if report.comment_sections.is_empty() {
            return format!(
                r#"<div class="comments-section"><h3>{}</h3><p class="empty-state">{}</p></div>"#,
                messages::SECTION_COMMENTS,
                messages::NO_COMMENT_COLUMNS
            );
        }

        report
            .comment_sections
            .iter()
            .map(|section| {
                let body = if section.comments.is_empty() {
                    format!(
                        r#"<p class="empty-state">{}</p>"#,
                        messages::NO_COMMENTS_IN_COLUMN
                    )
                } else {
                    let items = section
                        .comments
                        .iter()
                        .map(|comment| format!("<li>{}</li>", html_escape(comment)))
                        .collect::<Vec<_>>()
                        .join("\n");
                    format!("<ul>{items}</ul>")
                };

                format!(
                    r#"
        <div class="comments-section">
            <h3>{}</h3>
            {}
        </div>
                    "#,
                    html_escape(&section.column),
                    body
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Minimal HTML escaping for respondent-authored text
fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
