//! Scan command implementation.
//!
//! Obtains the source text, runs the scanner over it and writes the token
//! report. The scanner is only invoked once the source has been read.

use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use clex_lex::{tokenize, LanguageTables};
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::report::{write_report, ReportFormat};
use crate::source::{prompt_for_path, read_source};

/// Arguments for the scan command.
#[derive(Debug, Clone, Default)]
pub struct ScanArgs {
    /// Source file; prompted for when absent.
    pub file: Option<PathBuf>,
    /// Report format override.
    pub format: Option<ReportFormat>,
    /// Suppress the token total.
    pub no_summary: bool,
}

/// Scan command handler.
pub struct ScanCommand {
    args: ScanArgs,
    config: Config,
}

impl ScanCommand {
    /// Create a new ScanCommand.
    pub fn new(args: ScanArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command against the process's stdin and stdout.
    pub fn run(&self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut output = BufWriter::new(stdout.lock());
        self.run_with(&mut stdin.lock(), &mut output)?;
        output.flush()?;
        Ok(())
    }

    /// Execute the command with explicit input and output streams.
    pub fn run_with<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<()> {
        let path = match &self.args.file {
            Some(path) => path.clone(),
            None => prompt_for_path(input, output)?,
        };
        let source = read_source(&path)?;

        let start_time = Instant::now();
        let tokens = tokenize(&source, LanguageTables::shared());
        debug!(
            path = %path.display(),
            tokens = tokens.len(),
            elapsed_us = start_time.elapsed().as_micros() as u64,
            "scanned source"
        );

        write_report(
            output,
            &tokens,
            self.format(),
            &self.config.display,
            self.summary(),
        )
    }

    fn format(&self) -> ReportFormat {
        self.args.format.unwrap_or(self.config.output.format)
    }

    fn summary(&self) -> bool {
        self.config.output.summary && !self.args.no_summary
    }
}

/// Run the scan command.
pub fn run_scan(args: ScanArgs, config: Config) -> Result<()> {
    ScanCommand::new(args, config).run()
}
