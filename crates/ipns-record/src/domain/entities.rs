//! # Domain Entities
//!
//! Core data structures for record verification.

use super::errors::VerificationError;
use chrono::{DateTime, Utc};
use ipns_crypto::KeyType;
use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;

// =============================================================================
// Record
// =============================================================================

/// How a record expresses its validity window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidityType {
    /// `validity` is an absolute end-of-life timestamp.
    Eol,
    /// A numeric type this implementation does not know. Kept so that the
    /// validity stage, not the decoder, rejects it.
    Unrecognized(i32),
}

impl ValidityType {
    /// Wire value of `EOL`.
    pub const EOL_WIRE_VALUE: i32 = 0;

    /// Map a wire value.
    pub fn from_wire(value: i32) -> Self {
        match value {
            Self::EOL_WIRE_VALUE => ValidityType::Eol,
            other => ValidityType::Unrecognized(other),
        }
    }

    /// Wire value.
    pub fn to_wire(self) -> i32 {
        match self {
            ValidityType::Eol => Self::EOL_WIRE_VALUE,
            ValidityType::Unrecognized(value) => value,
        }
    }
}

/// A decoded naming record.
///
/// Built once per decode and not modified by verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Target the name points to (opaque).
    pub value: Vec<u8>,
    /// Interpretation of `validity`.
    pub validity_type: ValidityType,
    /// Absolute timestamp text (RFC 3339).
    pub validity: Vec<u8>,
    /// Publisher-side ordering counter.
    pub sequence: u64,
    /// Advisory cache duration in nanoseconds.
    pub ttl: Option<u64>,
    /// Signature over the legacy payload (`value || validity`).
    pub signature_legacy: Option<Vec<u8>>,
    /// Signature over the canonical payload.
    pub signature_current: Option<Vec<u8>>,
    /// Protobuf-encoded public key, for identities that cannot embed one.
    pub public_key: Option<Vec<u8>>,
    /// DAG-CBOR copy of the signed fields, covered by the current signature.
    pub data: Option<Vec<u8>>,
}

// =============================================================================
// Policy
// =============================================================================

/// Whether records signed only with the legacy scheme are acceptable.
///
/// There is no automatic fallback: a record carrying a current signature is
/// always judged by that signature alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegacySignaturePolicy {
    /// Records without a current signature are rejected.
    #[default]
    Reject,
    /// Records without a current signature are checked against the legacy one.
    Accept,
}

/// The signing scheme a record was verified under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureScheme {
    /// Canonical payload over every signed field.
    Current,
    /// `value || validity` only.
    Legacy,
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureScheme::Current => f.write_str("current"),
            SignatureScheme::Legacy => f.write_str("legacy"),
        }
    }
}

// =============================================================================
// Verification Output
// =============================================================================

/// Fields of a record that passed every verification stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerifiedRecord {
    /// Target the name points to.
    #[serde(serialize_with = "serialize_lossy_utf8")]
    pub value: Vec<u8>,
    /// End of life.
    #[serde(rename = "validity")]
    pub eol: DateTime<Utc>,
    /// Advisory cache duration.
    #[serde(serialize_with = "serialize_ttl_nanos")]
    pub ttl: Option<Duration>,
    /// Publisher-side ordering counter.
    pub sequence: u64,
    /// Type of the key that signed the record.
    #[serde(serialize_with = "serialize_display")]
    pub key_type: KeyType,
    /// Base58 identity of the signing key.
    pub signer: String,
    /// Scheme the signature was checked under.
    pub scheme: SignatureScheme,
}

impl VerifiedRecord {
    /// Whether the record is past its end of life at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.eol < now
    }

    /// TTL in the unit it is stored in (nanoseconds).
    pub fn ttl_nanos(&self) -> Option<u64> {
        self.ttl.map(|ttl| ttl.as_nanos() as u64)
    }
}

fn serialize_lossy_utf8<S: Serializer>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(value))
}

fn serialize_ttl_nanos<S: Serializer>(
    ttl: &Option<Duration>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match ttl {
        Some(ttl) => serializer.serialize_some(&(ttl.as_nanos() as u64)),
        None => serializer.serialize_none(),
    }
}

fn serialize_display<T: fmt::Display, S: Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

// =============================================================================
// Batch Types
// =============================================================================

/// One identity/record pair to verify.
#[derive(Clone, Debug)]
pub struct BatchItem {
    /// Identity token text.
    pub identity: String,
    /// Encoded record.
    pub record: Vec<u8>,
}

/// Request for batch verification.
#[derive(Clone, Debug, Default)]
pub struct BatchVerificationRequest {
    /// Items to verify, independently of each other.
    pub items: Vec<BatchItem>,
}

/// Result of batch verification.
#[derive(Clone, Debug)]
pub struct BatchVerificationResult {
    /// Individual outcomes, in request order
    pub results: Vec<Result<VerifiedRecord, VerificationError>>,
    /// Whether all verifications passed
    pub all_valid: bool,
    /// Count of valid records
    pub valid_count: usize,
    /// Count of invalid records
    pub invalid_count: usize,
}

impl BatchVerificationResult {
    /// Create a batch result from individual results.
    pub fn from_results(results: Vec<Result<VerifiedRecord, VerificationError>>) -> Self {
        let valid_count = results.iter().filter(|r| r.is_ok()).count();
        let invalid_count = results.len() - valid_count;
        let all_valid = invalid_count == 0;

        Self {
            results,
            all_valid,
            valid_count,
            invalid_count,
        }
    }
}
