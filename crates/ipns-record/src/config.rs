//! # Verifier Configuration
//!
//! All limits have defaults suitable for verifying records from the public
//! network; callers override individual fields.

use crate::domain::codec::MAX_RECORD_SIZE;
use crate::domain::entities::LegacySignaturePolicy;
use crate::domain::key_resolver::MIN_RSA_BITS;
use thiserror::Error;

/// Lowest value `min_rsa_bits` may be configured to.
pub const RSA_BITS_FLOOR: usize = 1024;

/// Record verifier configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Whether records signed only with the legacy scheme are acceptable.
    pub legacy_signatures: LegacySignaturePolicy,
    /// Reject records whose EOL is in the past.
    pub reject_expired: bool,
    /// Smallest RSA modulus accepted, in bits.
    pub min_rsa_bits: usize,
    /// Largest encoded record accepted, in bytes.
    pub max_record_size: usize,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            legacy_signatures: LegacySignaturePolicy::Reject,
            reject_expired: false,
            min_rsa_bits: MIN_RSA_BITS,
            max_record_size: MAX_RECORD_SIZE,
        }
    }
}

impl VerifierConfig {
    /// Check the configuration is usable.
    ///
    /// # Returns
    ///
    /// Returns `Err` if:
    /// - `min_rsa_bits` is below [`RSA_BITS_FLOOR`]
    /// - `max_record_size` is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_rsa_bits < RSA_BITS_FLOOR {
            return Err(ConfigError::RsaMinimumTooLow {
                configured: self.min_rsa_bits,
                floor: RSA_BITS_FLOOR,
            });
        }
        if self.max_record_size == 0 {
            return Err(ConfigError::ZeroRecordSize);
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `min_rsa_bits` below the floor
    #[error("min_rsa_bits {configured} is below the floor of {floor}")]
    RsaMinimumTooLow { configured: usize, floor: usize },

    /// `max_record_size` of zero would reject every record
    #[error("max_record_size must be greater than zero")]
    ZeroRecordSize,
}
