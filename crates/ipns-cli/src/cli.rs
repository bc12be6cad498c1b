//! Command-line arguments.

use crate::output::OutputFormat;
use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::io::Read;
use std::path::Path;

/// Path argument naming standard input.
pub const STDIN_PATH: &str = "-";

/// ipns-verify: check that a record was signed by an identity
#[derive(Parser, Debug)]
#[command(name = "ipns-verify", version)]
#[command(about = "Verify a signed IPNS record against an identity")]
pub struct Args {
    /// Identity the record must be signed by (`/ipns/` prefix optional)
    pub identity: String,

    /// Encoded record file, or `-` to read standard input
    pub record: String,

    /// Accept records that carry only a legacy signature
    #[arg(long, env = "IPNS_VERIFY_ALLOW_LEGACY")]
    pub allow_legacy: bool,

    /// Reject records whose validity has passed
    #[arg(long, env = "IPNS_VERIFY_REJECT_EXPIRED")]
    pub reject_expired: bool,

    /// Smallest RSA key accepted, in bits
    #[arg(long, env = "IPNS_VERIFY_MIN_RSA_BITS")]
    pub min_rsa_bits: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Read the record named by `path`, from stdin when it is `-`.
pub fn read_record(path: &str, stdin: impl Read) -> Result<Vec<u8>> {
    if path == STDIN_PATH {
        let mut bytes = Vec::new();
        let mut stdin = stdin;
        stdin
            .read_to_end(&mut bytes)
            .context("failed to read record from stdin")?;
        return Ok(bytes);
    }

    std::fs::read(Path::new(path)).with_context(|| format!("failed to read record from {path}"))
}
