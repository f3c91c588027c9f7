//! `triplets` — print the three most frequent word trigrams of a file.
//!
//! ```bash
//! triplets book.txt
//! ```
//!
//! Output goes to stdout, one `word1 word2 word3 - count` line per trigram.
//! Errors and logs go to stderr; set `RUST_LOG=triplets=debug` for table
//! statistics.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use triplets_core::{analyze_file, ReportConfig, TripletsError};

/// Exit status when stdout cannot be written (EX_IOERR).
const EXIT_IO: u8 = 74;

/// Count word trigrams in a text file and print the most frequent ones.
#[derive(Parser)]
#[command(name = "triplets", version, about)]
struct Cli {
    /// Path to the input text file
    input: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("triplets=warn")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<TripletsError>()
                .map_or(EXIT_IO, TripletsError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let path = cli.input.ok_or(TripletsError::Usage)?;
    let report = analyze_file(&path, &ReportConfig::default())?;

    info!(stats = %report.stats, "analysis complete");
    debug!(rows = report.rows.len(), "writing report");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report
        .write_to(&mut out)
        .and_then(|()| out.flush())
        .context("failed to write report to stdout")?;

    Ok(())
}
