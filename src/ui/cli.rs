// Command-line interface definitions and parsing for formsight

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Survey export to summarize (XLSX or CSV)
    pub file: Option<String>,

    // Report Content
    /// Categorical question to break down: full name or 1-based index
    /// (default: first question found)
    #[arg(
        short = 'Q',
        long,
        value_name = "QUESTION",
        help_heading = "Report Content"
    )]
    pub question: Option<String>,

    /// Maximum comments displayed per comment field, 5-100 (default: 30)
    #[arg(long, value_name = "COUNT", help_heading = "Report Content")]
    pub max_comments: Option<usize>,

    /// Include the raw table of non-sensitive data
    #[arg(long, help_heading = "Report Content")]
    pub show_table: bool,

    // Privacy
    /// Keep identifying columns (names/e-mails) instead of dropping them
    #[arg(long, help_heading = "Privacy")]
    pub show_identifying: bool,

    // Output & Verbosity
    /// Suppress log output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, default_value = output_formats::DEFAULT, help_heading = "Output & Verbosity")]
    pub format: String,

    /// Write a self-contained HTML dashboard to PATH
    #[arg(long, value_name = "PATH", help_heading = "Output & Verbosity")]
    pub html_report: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Install shell completions to standard location
    #[command(name = "completion-install", arg_required_else_help = true)]
    CompletionInstall {
        /// The shell to install completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert parsed CLI arguments into a CliConfig for merging
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        show_identifying: cli.show_identifying,
        show_table: cli.show_table,
        max_comments: cli.max_comments,
        question: cli.question.clone(),
        // The format flag carries a default value; only an explicit
        // non-default choice should override the config file.
        output_format: if cli.format == output_formats::DEFAULT {
            None
        } else {
            Some(cli.format.clone())
        },
        html_report: cli.html_report.clone(),
        quiet: cli.quiet,
        verbose: cli.verbose,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
