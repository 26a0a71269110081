use clap::{CommandFactory, Parser};
use formsight::analysis::report::ReportOptions;
use formsight::analysis::{build_report, classify_columns, identifying_columns};
use formsight::config::{CliConfig, Config};
use formsight::core::constants::{messages, output_formats};
use formsight::core::error::FormsightError;
use formsight::ingest::load_table;
use formsight::reporting::logging;
use formsight::reporting::{DashboardError, HtmlDashboard};
use formsight::ui::output;
use formsight::ui::{Cli, Commands, cli_to_config, install_completion, print_completions};

use std::path::Path;
use std::time::Instant;

fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    // The report needs an input file; prompt instead of erroring out
    if cli.file.is_none() {
        eprintln!("No input file provided. Pass the exported spreadsheet (XLSX or CSV).");
        eprintln!("\nFor more information, try '--help'.");
        std::process::exit(1);
    }

    // Run the main report logic
    match run_formsight_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        Some(Commands::CompletionInstall { shell }) => match install_completion(shell) {
            Ok(message) => {
                println!("{message}");
                Some(0)
            }
            Err(e) => {
                eprintln!("Error: {e}");
                Some(1)
            }
        },
        None => None,
    }
}

/// Main report logic extracted from main() for testing
pub fn run_formsight_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let started = Instant::now();

    // Parse CLI arguments into CliConfig using the derive-based CLI
    let cli_config = cli_to_config(cli);

    // Load and merge configuration
    let config = load_and_merge_config(&cli_config)?;

    // Setup logging
    logging::init_logger(
        config.verbose.unwrap_or(false) && !cli_config.quiet,
        cli_config.quiet,
    );
    logging::log_config_info(&config);

    // Load the export fully into memory
    let file = cli.file.as_deref().unwrap_or_default();
    let original = match load_table(Path::new(file)) {
        Ok(table) => table,
        // an empty table halts the run with a warning, not an error trace
        Err(FormsightError::EmptyInput) => {
            eprintln!("{}", messages::EMPTY_INPUT);
            return Ok(1);
        }
        Err(e) => return Err(e.into()),
    };
    logging::log_load_info(file, original.row_count(), original.columns().len());

    // Anonymize and classify
    let hide_identifying = config.hide_identifying.unwrap_or(true);
    let working = if hide_identifying {
        original.without_columns(&identifying_columns(&original))
    } else {
        original.clone()
    };
    let plan = classify_columns(&original, &working, hide_identifying);
    logging::log_classification(&plan);

    // Aggregate
    let options = ReportOptions {
        question: config.question.clone(),
        max_comments: config.max_comments_or_default(),
        include_raw_table: config.show_table.unwrap_or(false),
    };
    let report = build_report(&original, &working, &plan, &options)?;

    // Present
    let format = config
        .output_format
        .clone()
        .unwrap_or_else(|| output_formats::DEFAULT.to_string());
    output::display_report(&report, &format)?;

    if let Some(ref path) = config.html_report {
        generate_dashboard(&report, path, cli_config.quiet)?;
    }

    logging::log_report_complete(report.summary.respondents, started.elapsed().as_millis());
    Ok(0)
}

/// Load configuration respecting CLI precedence
fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()
    };

    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Write the optional HTML dashboard
fn generate_dashboard(
    report: &formsight::analysis::SurveyReport,
    path: &str,
    quiet: bool,
) -> Result<(), DashboardError> {
    HtmlDashboard::generate_dashboard(report, path)?;
    if !quiet {
        eprintln!("HTML dashboard written to {path}");
    }
    Ok(())
}
