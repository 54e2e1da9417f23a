//! # Compression Report CLI
//!
//! Reads the benchmark results of a set of WRF output compression scenarios and
//! writes a cost comparison report as text, JSON or HTML, with optional charts.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;

use compression_cost_report::cli_error::{validation, CliError, CliErrorExt};
use compression_cost_report::prelude::*;

/// Compression cost report - compare storage strategies for WRF output
#[derive(Parser, Debug)]
#[command(name = "compression-report")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Cost comparison report for WRF output compression benchmarks")]
#[command(long_about = "
Prices every benchmarked compression scenario on a fixed AWS rate table.
Compute cost grows with the CPU overhead compression adds to the run, storage
cost shrinks with the compression ratio. Scenarios are ranked by total cost and
compared against the uncompressed baseline.

Each subdirectory of the results directory is one scenario run and must hold a
metrics.json (or summary.json) file.
")]
struct Cli {
    /// Directory containing one subdirectory per benchmark scenario
    #[arg(short, long)]
    results_dir: PathBuf,

    /// Output file; text goes to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Also write interactive charts into the results directory
    #[arg(long)]
    charts: bool,

    /// Days the output is kept on the storage tier
    #[arg(long)]
    retention_days: Option<u32>,

    /// Compute instance type used to price node-hours
    #[arg(long)]
    instance_type: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors and the report itself
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Effective settings after merging the config file with the flags
#[derive(Debug)]
struct Settings {
    retention_days: u32,
    instance_type: String,
    format: OutputFormat,
    charts: bool,
    output: Option<PathBuf>,
}

/// CLI application state
struct CliApp {
    quiet: bool,
}

impl CliApp {
    fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    fn load_settings(&self, cli: &Cli) -> Result<Settings, CliError> {
        let config = ReportConfig::load(cli.config.as_deref())?;

        let retention_days = cli.retention_days.unwrap_or(config.analysis.retention_days);
        validation::validate_retention_days(retention_days)?;

        let instance_type = cli
            .instance_type
            .clone()
            .unwrap_or(config.analysis.instance_type);
        validation::validate_instance_type(&instance_type)?;

        let format = cli.format.unwrap_or(config.output.format);
        // Default output paths live in the results directory, checked once it has loaded
        if let Some(path) = cli.output.as_deref() {
            validation::validate_output_path(path)?;
        }
        let output = cli
            .output
            .clone()
            .or_else(|| format.default_file_name().map(|name| cli.results_dir.join(name)));

        Ok(Settings {
            retention_days,
            instance_type,
            format,
            charts: cli.charts || config.output.charts,
            output,
        })
    }

    fn run(&self, cli: &Cli) -> Result<()> {
        let settings = self.load_settings(cli)?;
        log::debug!("Effective settings: {:?}", settings);

        let loaded = load_results(&cli.results_dir).map_err(CliError::from)?;
        if loaded.is_empty() {
            return Err(CliError::no_results(cli.results_dir.clone(), loaded.skipped).into());
        }
        if let (None, Some(path)) = (cli.output.as_deref(), settings.output.as_deref()) {
            validation::validate_output_path(path)?;
        }
        self.print_info(&format!("Found {} benchmark results", loaded.len()));
        for skipped in &loaded.skipped {
            self.print_warning(&format!("Skipped unreadable result file {}", skipped.display()));
        }

        let rates = RateTable::default();
        let estimator = CostEstimator::new(&rates, &settings.instance_type).map_err(CliError::from)?;
        let derived = estimator.estimate_all(&loaded.records, settings.retention_days);
        let report = build_report(derived, settings.retention_days).map_err(CliError::from)?;

        let rendered = match settings.format {
            OutputFormat::Text => format_text(&report),
            OutputFormat::Json => format_json(&report.records).map_err(CliError::from)?,
            OutputFormat::Html => render_html(&report, &estimator, &rates),
        };

        match settings.output.as_deref() {
            Some(path) => {
                save_report(path, &rendered).map_err(CliError::from)?;
                self.print_success(&format!("Report saved to: {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", rendered).with_cli_context("write report to stdout")?;
            }
        }

        if settings.charts {
            let written = write_charts(&report, &cli.results_dir).map_err(CliError::from)?;
            for path in written {
                self.print_success(&format!("Chart saved to: {}", path.display()));
            }
        }

        Ok(())
    }

    fn print_success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("✓").green().bold(), message);
        }
    }

    fn print_warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("⚠").yellow().bold(), message);
        }
    }

    fn print_info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("ℹ").blue().bold(), message);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else if !cli.quiet {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let app = CliApp::new(cli.quiet);
    if let Err(e) = app.run(&cli) {
        // Try to provide better error messages for known error types
        if let Some(cli_err) = e.downcast_ref::<CliError>() {
            cli_err.print_error();
            std::process::exit(cli_err.exit_code());
        }
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}
