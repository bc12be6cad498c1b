//! # Record Verification Service
//!
//! Application service layer that implements the `RecordVerificationApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`RecordVerificationApi`)
//! - Uses the outbound port (`Clock`) for optional expiry enforcement
//! - Delegates decoding and cryptographic checks to the domain layer

use crate::config::{ConfigError, VerifierConfig};
use crate::domain::codec::RecordCodec;
use crate::domain::entities::{
    BatchVerificationRequest, BatchVerificationResult, Record, VerifiedRecord,
};
use crate::domain::errors::VerificationError;
use crate::domain::key_resolver::KeyResolver;
use crate::domain::validity::{check_not_expired, compute_eol, ttl_hint};
use crate::domain::verifier::SignatureVerifier;
use crate::ports::inbound::RecordVerificationApi;
use crate::ports::outbound::Clock;
use rayon::prelude::*;
use tracing::debug;

/// Record Verification Service.
///
/// Holds no mutable state; one instance can serve any number of threads.
pub struct RecordVerificationService<C: Clock> {
    config: VerifierConfig,
    resolver: KeyResolver,
    verifier: SignatureVerifier,
    clock: C,
}

impl<C: Clock> RecordVerificationService<C> {
    /// Create a new record verification service.
    ///
    /// # Arguments
    /// * `config` - Verifier configuration, validated here
    /// * `clock` - Time source for `reject_expired`
    pub fn new(config: VerifierConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            resolver: KeyResolver::new(config.min_rsa_bits),
            verifier: SignatureVerifier::new(config.legacy_signatures),
            config,
            clock,
        })
    }

    /// Configuration in effect.
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    fn run_pipeline(
        &self,
        identity: &str,
        record: &Record,
    ) -> Result<VerifiedRecord, VerificationError> {
        // 1. Key resolution
        let resolved = self.resolver.resolve(identity, record)?;

        // 2. Signature
        let scheme = self.verifier.verify(record, &resolved.public_key)?;

        // 3. Validity
        let eol = compute_eol(record)?;
        if self.config.reject_expired {
            check_not_expired(eol, self.clock.now())?;
        }

        Ok(VerifiedRecord {
            value: record.value.clone(),
            eol,
            ttl: ttl_hint(record),
            sequence: record.sequence,
            key_type: resolved.public_key.key_type(),
            signer: resolved.public_key.to_identity().to_base58(),
            scheme,
        })
    }

    fn log_outcome(identity: &str, outcome: &Result<VerifiedRecord, VerificationError>) {
        match outcome {
            Ok(verified) => debug!(
                identity,
                key_type = %verified.key_type,
                scheme = %verified.scheme,
                sequence = verified.sequence,
                "Record verified"
            ),
            Err(e) => debug!(identity, kind = e.kind(), reason = %e, "Record rejected"),
        }
    }
}

impl<C: Clock> RecordVerificationApi for RecordVerificationService<C> {
    fn verify(&self, identity: &str, record: &[u8]) -> Result<VerifiedRecord, VerificationError> {
        let outcome = RecordCodec::decode_limited(
            record,
            self.config.legacy_signatures,
            self.config.max_record_size,
        )
        .map_err(VerificationError::from)
        .and_then(|decoded| self.run_pipeline(identity, &decoded));

        Self::log_outcome(identity, &outcome);
        outcome
    }

    fn verify_record(
        &self,
        identity: &str,
        record: &Record,
    ) -> Result<VerifiedRecord, VerificationError> {
        let outcome = self.run_pipeline(identity, record);

        Self::log_outcome(identity, &outcome);
        outcome
    }

    fn batch_verify(&self, request: &BatchVerificationRequest) -> BatchVerificationResult {
        let results: Vec<_> = request
            .items
            .par_iter()
            .map(|item| self.verify(&item.identity, &item.record))
            .collect();

        let result = BatchVerificationResult::from_results(results);
        debug!(
            total = request.items.len(),
            valid = result.valid_count,
            invalid = result.invalid_count,
            "Batch verification finished"
        );
        result
    }
}

// =============================================================================
// TESTS
// =============================================================================
