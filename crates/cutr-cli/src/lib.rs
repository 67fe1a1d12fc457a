//! cutr CLI - print selected bytes, characters or fields of each line.
//!
//! The binary is a thin wrapper around [`run`]; everything that touches the
//! process (arguments, stdin/stdout, exit status) lives here, while the
//! selection logic lives in `cutr-core`.
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

pub mod args;
pub mod cli;
pub mod error;
pub mod input;
mod utils;

use crate::cli::Cli;
use crate::error::{CliError, ErrorCategory};
use crate::input::process_sources;
use crate::utils::initialize_logging;

/// Execute cutr with the process arguments.
///
/// Returns the exit code to use when the run finished, even if some sources
/// were skipped; returns an error when the run could not start or the output
/// could not be written.
///
/// # Errors
///
/// Returns a [`CliError`] for invalid flags or range lists, or when writing
/// to standard output fails.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    initialize_logging(cli.verbosity(), cli.no_color)?;

    let stdout = io::stdout();
    execute(&cli, BufWriter::new(stdout.lock()), io::stderr())
}

fn execute<W: Write, D: Write>(cli: &Cli, mut out: W, mut diagnostics: D) -> Result<ExitCode> {
    let config = cli.to_config().map_err(CliError::from)?;
    debug!(?config, "starting");

    let sources = cli.sources();
    let report = match process_sources(&sources, &config, &mut out, &mut diagnostics) {
        Ok(report) => report,
        Err(err) if err.is_broken_pipe() => {
            debug!("output closed early");
            return Ok(ExitCode::SUCCESS);
        },
        Err(err) => return Err(CliError::from(err).into()),
    };

    match out.flush() {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => return Ok(ExitCode::SUCCESS),
        result => result.map_err(|err| CliError::new(ErrorCategory::Io, err))?,
    }

    info!(
        records_read = report.stats.records_read,
        records_written = report.stats.records_written,
        records_suppressed = report.stats.records_suppressed,
        "done"
    );

    let code = if !report.failed_opens.is_empty() {
        ErrorCategory::NotFound.as_exit_code()
    } else if !report.failed_reads.is_empty() {
        ErrorCategory::Io.as_exit_code()
    } else {
        ExitCode::SUCCESS
    };
    Ok(code)
}
