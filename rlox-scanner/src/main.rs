//! Command-line front end: scans one file and prints its tokens.

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use rlox_scanner::Scanner;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Print the tokens of a source file, one per line.
#[derive(Parser, Debug)]
#[command(name = "rlox-scanner")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the tokens of a source file", long_about = None)]
struct Cli {
    /// Source file to scan
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, env = "RLOX_SCANNER_VERBOSE")]
    verbose: bool,

    /// Disable color in log output
    #[arg(long, env = "RLOX_SCANNER_NO_COLOR")]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.verbose, cli.no_color) {
        eprintln!("[ERROR] {err:#}");
        return ExitCode::FAILURE;
    }

    let Some(path) = cli.file else {
        println!("USAGE: rlox-scanner <FILE>");
        eprintln!("[ERROR] no <FILE> is provided");
        return ExitCode::FAILURE;
    };

    match run_file(&path) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("[ERROR] {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")
}

fn run_file(path: &Path) -> Result<ExitCode> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    debug!(path = %path.display(), bytes = source.len(), "loaded source");
    Ok(run(&source))
}

/// Prints tokens as they are produced. Stops at the first fatal error.
fn run(source: &str) -> ExitCode {
    let mut tokens = 0usize;
    let mut errors = 0usize;

    for item in Scanner::new(source) {
        match item {
            Ok(token) => {
                tokens += 1;
                println!("{token}");
            }
            Err(err) => {
                eprintln!("[ERROR] {err}");
                if err.is_fatal() {
                    return ExitCode::FAILURE;
                }
                errors += 1;
            }
        }
    }

    debug!(tokens, errors, "scan finished");
    ExitCode::SUCCESS
}
