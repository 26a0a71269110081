//! Structured logging for pipeline stages

use log::{debug, info};
use std::path::Path;

use crate::analysis::classify::ColumnPlan;
use crate::config::Config;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let hide_identifying = config.hide_identifying.unwrap_or(true);
    let show_table = config.show_table.unwrap_or(false);
    let max_comments = config.max_comments_or_default();

    info!(
        "Configuration: hide_identifying={hide_identifying}, show_table={show_table}, max_comments={max_comments}"
    );
    if let Some(ref question) = config.question {
        info!("Question selector: {question}");
    }
}

/// Log table loading information
pub fn log_load_info<P: AsRef<Path>>(path: P, rows: usize, columns: usize) {
    info!(
        "Loaded {} with {rows} row(s), {columns} column(s)",
        path.as_ref().display()
    );
}

/// Log the classification outcome
pub fn log_classification(plan: &ColumnPlan) {
    info!(
        "Classified columns: {} numeric, {} categorical, {} comment, {} identifying",
        plan.numeric.len(),
        plan.categorical.len(),
        plan.comments.len(),
        plan.identifying.len()
    );
    match plan.timestamp {
        Some(ref timestamp) => debug!("Timestamp column: {timestamp}"),
        None => debug!("No timestamp column found"),
    }
    for column in &plan.identifying {
        debug!("Identifying column: {column}");
    }
}

/// Log report completion
pub fn log_report_complete(respondents: usize, duration_ms: u128) {
    info!("Report complete: {respondents} respondent(s) summarized ({duration_ms}ms)");
}
