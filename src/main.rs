//! CLI entry point for flip-runner.
//!
//! Parses command-line arguments with clap, plays one game on stdin/stdout
//! and maps failures to a non-zero exit code. Logging goes to stderr so it
//! never interleaves with the rendered graphs.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use flip_runner::{
    cli::{run_cli, Cli},
    logging::{self, LoggingError},
};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_cli(&cli, stdin.lock(), stdout.lock()).context("failed to play game")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        error!(error = %format!("{err:#}"), "game aborted");
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
