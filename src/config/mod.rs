//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::constants::{display, output_formats};
use crate::core::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Drop identifying columns (names/e-mails) before aggregation
    pub hide_identifying: Option<bool>,

    /// Include the raw table of non-sensitive data in the report
    pub show_table: Option<bool>,

    /// Maximum comments displayed per comment field (5-100)
    pub max_comments: Option<usize>,

    /// Categorical question to break down (full name or 1-based index)
    pub question: Option<String>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,

    /// Write an HTML dashboard to this path after the run
    pub html_report: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hide_identifying: Some(true),
            show_table: Some(false),
            max_comments: Some(display::DEFAULT_MAX_COMMENTS),
            question: None,
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
            html_report: None,
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            crate::core::error::FormsightError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            crate::core::error::FormsightError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        // Validate the loaded configuration
        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        // Check for .formsight.toml in current directory
        if let Ok(config) = Self::load_from_file(".formsight.toml") {
            return config;
        }

        // Check for .formsight.toml in parent directories (up to 3 levels)
        for i in 1..=3 {
            let path = format!("{}.formsight.toml", "../".repeat(i));
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        // Fall back to defaults
        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        // Privacy
        if cli_config.show_identifying {
            self.hide_identifying = Some(false);
        }

        // Report content
        if cli_config.show_table {
            self.show_table = Some(true);
        }
        if let Some(max_comments) = cli_config.max_comments {
            self.max_comments = Some(max_comments);
        }
        if let Some(ref question) = cli_config.question {
            self.question = Some(question.clone());
        }

        // Output & format
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if let Some(ref html_report) = cli_config.html_report {
            self.html_report = Some(html_report.clone());
        }
    }

    /// Effective comment cap after defaulting
    pub fn max_comments_or_default(&self) -> usize {
        self.max_comments.unwrap_or(display::DEFAULT_MAX_COMMENTS)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(max_comments) = self.max_comments {
            if !(display::MIN_COMMENTS..=display::MAX_COMMENTS).contains(&max_comments) {
                return Err(crate::core::error::FormsightError::Config(format!(
                    "max_comments must be between {} and {}, got {max_comments}",
                    display::MIN_COMMENTS,
                    display::MAX_COMMENTS
                )));
            }
        }

        if let Some(ref output_format) = self.output_format {
            if !output_formats::ALL.contains(&output_format.as_str()) {
                return Err(crate::core::error::FormsightError::Config(format!(
                    "Invalid output format '{output_format}'. Expected one of: {}",
                    output_formats::ALL.join(", ")
                )));
            }
        }

        if let Some(ref question) = self.question {
            if question.trim().is_empty() {
                return Err(crate::core::error::FormsightError::Config(
                    "question cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// CLI configuration options parsed from command line arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub show_identifying: bool,
    pub show_table: bool,
    pub max_comments: Option<usize>,
    pub question: Option<String>,
    pub output_format: Option<String>,
    pub html_report: Option<String>,
    pub quiet: bool,
    pub verbose: bool,
    pub config_file: Option<String>,
    pub no_config: bool,
}
