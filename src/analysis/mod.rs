//! Column classification and aggregation
//!
//! This module holds the analytical core of the pipeline: role
//! classification of columns, cell cleaning and coercion, the three
//! aggregators, the summary metrics, and the report assembly.

pub mod aggregate;
pub mod classify;
pub mod clean;
pub mod metrics;
pub mod report;

// Re-export commonly used items
pub use aggregate::{CommentSection, FrequencyRow, IndicatorRow};
pub use classify::{ColumnPlan, ColumnRole, classify_columns, identifying_columns};
pub use clean::{clean_text, coerce_numeric, nice_col};
pub use metrics::SummaryMetrics;
pub use report::{ReportOptions, SurveyReport, build_report, resolve_question};
