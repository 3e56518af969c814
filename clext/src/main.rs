//! Clext CLI - lexical analysis of C-family source files.
//!
//! This is the main entry point for the clext CLI application. It parses
//! arguments, sets up logging and configuration, and hands off to the scan
//! command, which prints one row per token.

mod commands;
mod config;
mod error;
mod report;
mod source;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_scan, ScanArgs};
use config::Config;
use error::{ClextError, Result};
use report::ReportFormat;

/// Clext - lexical analyzer for C-family source
///
/// Splits a source file into keywords, identifiers, literals, operators and
/// delimiters and prints the resulting token table.
#[derive(Parser, Debug)]
#[command(name = "clext")]
#[command(author = "Clex Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical analyzer for C-family source files", long_about = None)]
struct Cli {
    /// Source file to scan (prompted for when omitted)
    file: Option<PathBuf>,

    /// Report format (default: from config, else table)
    #[arg(short = 'F', long, value_enum)]
    format: Option<ReportFormat>,

    /// Omit the token total after the table
    #[arg(long)]
    no_summary: bool,

    /// Enable verbose output
    #[arg(short, long, env = "CLEXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "CLEXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "CLEXT_NO_COLOR")]
    no_color: bool,
}

/// Main entry point for the clext CLI.
///
/// Exits with status 0 after a full scan and 1 if the source, the
/// configuration or the output stream fails.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    let args = ScanArgs {
        file: cli.file,
        format: cli.format,
        no_summary: cli.no_summary,
    };
    run_scan(args, config)
}

/// Initialize the logging system.
///
/// Events go to stderr so that stdout carries only the report.
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
        .map_err(|e| ClextError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}
