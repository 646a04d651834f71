//! `arena-robot` command-line runner.
//!
//! Reads one JSON request from a file or stdin, writes the JSON response to
//! stdout. Malformed input produces `{"status":"error","message":"Invalid input JSON"}`
//! on stderr and exit code 1.

use anyhow::{Context, Result};
use arena_robot::io::{self, OutputFormat, RunOutcome};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Simulate a robot moving around a rectangular arena.
#[derive(Parser)]
#[command(name = "arena-robot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Request JSON file. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Pretty-print the response.
    #[arg(long)]
    pretty: bool,

    /// Log filter directive (e.g. `debug`, `arena_robot=trace`). Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,
}

fn init_logging(directive: Option<&str>) {
    let filter = match directive {
        Some(d) => EnvFilter::new(d),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let format = if cli.pretty {
        OutputFormat::Pretty
    } else {
        OutputFormat::Compact
    };

    let stdout = std::io::stdout().lock();
    let stderr = std::io::stderr();

    let outcome = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            io::run(file, stdout, stderr, format)?
        }
        None => io::run(std::io::stdin().lock(), stdout, stderr, format)?,
    };

    tracing::debug!(?outcome, "done");

    Ok(match outcome {
        RunOutcome::Completed(_) => ExitCode::SUCCESS,
        RunOutcome::InvalidInput => ExitCode::FAILURE,
    })
}
