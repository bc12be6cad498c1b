//! # ipns-verify
//!
//! Verify a signed IPNS record against an identity and print its value and
//! validity.
//!
//! ```text
//! ipns-verify /ipns/12D3KooW... record.bin
//! ipns-verify --format json 12D3KooW... - < record.bin
//! ```
//!
//! Exits with status 1 on any failure.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use ipns_cli::{load_config, read_record, render, render_error, Args};
use ipns_record::{RecordVerificationApi, RecordVerificationService, SystemClock};

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args);
    let service = RecordVerificationService::new(config, SystemClock)
        .context("invalid verifier configuration")?;

    let record = read_record(&args.record, io::stdin().lock())?;
    debug!(bytes = record.len(), "Read record");

    match service.verify(&args.identity, &record) {
        Ok(verified) => {
            print!("{}", render(&verified, args.format)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", render_error(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("Error: failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
