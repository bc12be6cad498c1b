//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of the record verifier.

use crate::domain::entities::{
    BatchVerificationRequest, BatchVerificationResult, Record, VerifiedRecord,
};
use crate::domain::errors::VerificationError;

/// Primary record verification API.
///
/// Implementations must be thread-safe (`Send + Sync`); calls are independent
/// of each other.
pub trait RecordVerificationApi: Send + Sync {
    /// Decode `record` and verify it against `identity`.
    ///
    /// Pipeline: decode, resolve key, check signature, compute validity.
    /// The first failing stage determines the error.
    fn verify(&self, identity: &str, record: &[u8]) -> Result<VerifiedRecord, VerificationError>;

    /// Verify an already-decoded record against `identity`.
    fn verify_record(
        &self,
        identity: &str,
        record: &Record,
    ) -> Result<VerifiedRecord, VerificationError>;

    /// Verify many identity/record pairs in parallel.
    ///
    /// # Performance
    /// Items are independent; results keep request order.
    fn batch_verify(&self, request: &BatchVerificationRequest) -> BatchVerificationResult;
}
