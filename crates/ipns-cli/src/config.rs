//! Verifier configuration from arguments.
//!
//! Precedence is defaults, then `IPNS_VERIFY_*` environment variables, then
//! flags. clap merges the environment into [`Args`], so only the defaults
//! need filling in here.

use crate::cli::Args;
use ipns_record::{LegacySignaturePolicy, VerifierConfig};
use tracing::info;

/// Build the verifier configuration for `args`.
pub fn load_config(args: &Args) -> VerifierConfig {
    let mut config = VerifierConfig::default();

    if args.allow_legacy {
        config.legacy_signatures = LegacySignaturePolicy::Accept;
        info!("Accepting legacy-only signatures");
    }
    if args.reject_expired {
        config.reject_expired = true;
    }
    if let Some(bits) = args.min_rsa_bits {
        config.min_rsa_bits = bits;
    }

    config
}
