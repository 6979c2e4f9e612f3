//! docx-guide: Markdown to DOCX Conversion Helper
//!
//! Prints instructions for converting the user manual to DOCX.
//! Performs no conversion itself.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use docx_guide::cli::Cli;
use docx_guide::guide::run_guide;
use docx_guide::utils::init_logger;

/// Status for failures outside the guide itself (EX_IOERR).
/// 1 is reserved for a missing source file.
const IO_FAILURE_STATUS: u8 = 74;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(IO_FAILURE_STATUS)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let working_dir =
        std::env::current_dir().context("Failed to determine the current directory")?;
    let config = cli.guide_config();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run_guide(&config, &working_dir, &mut out) {
        Ok(outcome) => {
            tracing::debug!(?outcome, status = outcome.status(), "guide finished");
            Ok(outcome.into())
        }
        // Reader closed early, e.g. `docx-guide | head -1`
        Err(err) if err.is_broken_pipe() => {
            tracing::debug!("stdout closed before the guide was fully written");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Err(err).context("Failed to print conversion guide"),
    }
}
