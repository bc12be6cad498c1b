//! Rendering of verification outcomes.

use anyhow::{Context, Result};
use clap::ValueEnum;
use ipns_record::{format_validity, VerificationError, VerifiedRecord};
use std::fmt::Write;

/// How a verified record is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// One JSON object
    Json,
}

/// Render a verified record.
pub fn render(verified: &VerifiedRecord, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => render_text(verified),
        OutputFormat::Json => {
            let mut out =
                serde_json::to_string_pretty(verified).context("failed to serialize record")?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn render_text(verified: &VerifiedRecord) -> Result<String> {
    let mut out = String::from("Record is valid:\n\n");
    writeln!(
        out,
        "Value:    {:?}",
        String::from_utf8_lossy(&verified.value)
    )?;
    if let Some(ttl) = verified.ttl_nanos() {
        writeln!(out, "TTL:      {ttl}")?;
    }
    writeln!(out, "Validity: {}", format_validity(verified.eol))?;
    Ok(out)
}

/// One-line failure message.
pub fn render_error(err: &VerificationError) -> String {
    format!("Error: {err}")
}
