//! minic-scan - print the token table of a MiniC source file.
//!
//! This is the command line front end for the `minic-lex` scanner. It
//! parses arguments with clap, loads the optional `minic.toml`, scans the
//! given file and prints the tokens to stdout. Diagnostics and logs go to
//! stderr.

mod config;
mod error;
mod render;
mod scan;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::Config;
use error::{Result, ScanError};
use render::OutputFormat;
use scan::{run_scan, ScanArgs};

/// Scan a MiniC source file and print its tokens
#[derive(Parser, Debug)]
#[command(name = "minic-scan")]
#[command(author = "MiniC Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan a MiniC source file and print its tokens", long_about = None)]
struct Cli {
    /// Source file to scan
    file: PathBuf,

    /// Output format (default: from config, else table)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Print line:column for every token
    #[arg(long)]
    spans: bool,

    /// Enable verbose output
    #[arg(short, long, env = "MINIC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "MINIC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "MINIC_NO_COLOR")]
    no_color: bool,
}

/// Main entry point for the minic-scan CLI.
///
/// Exits with status 0 on success and 1 after printing a diagnostic when
/// the configuration or the source file cannot be read.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        },
    }
}

/// Load configuration, initialize logging and run the scan.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    let args = scan_args(cli, &config);
    let stdout = std::io::stdout();
    run_scan(&args, &mut stdout.lock())
}

/// Merge command-line flags over configuration values.
fn scan_args(cli: Cli, config: &Config) -> ScanArgs {
    ScanArgs {
        input: cli.file,
        format: cli.format.unwrap_or(config.output.format),
        show_spans: cli.spans || config.output.show_spans,
        type_width: config.output.type_width,
    }
}

/// Initialize the logging system.
///
/// Logs are written to stderr so that stdout carries only the token output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| ScanError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}
