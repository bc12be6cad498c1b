//! # Signature Verification
//!
//! Checks a record's signature against the resolved key. The current
//! signature is authoritative: when present it is the only one checked, and a
//! mismatch is final. It covers the record's `data`, which must be the exact
//! canonical encoding of the record's own fields. The legacy signature is consulted only when the current
//! one is absent and the caller opted in with
//! [`LegacySignaturePolicy::Accept`].

use super::entities::{LegacySignaturePolicy, Record, SignatureScheme};
use super::errors::SignatureError;
use super::payload::{canonical_data, legacy_payload, PAYLOAD_PREFIX};
use ipns_crypto::{PublicKey, SignatureVerify};
use tracing::{debug, warn};

/// Verifies record signatures under a legacy policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignatureVerifier {
    policy: LegacySignaturePolicy,
}

impl SignatureVerifier {
    /// Verifier with the given legacy policy.
    pub fn new(policy: LegacySignaturePolicy) -> Self {
        Self { policy }
    }

    /// Legacy policy in effect.
    pub fn policy(&self) -> LegacySignaturePolicy {
        self.policy
    }

    /// Check the record's signature, returning the scheme that passed.
    pub fn verify(
        &self,
        record: &Record,
        key: &PublicKey,
    ) -> Result<SignatureScheme, SignatureError> {
        if record.signature_current.is_some() {
            return verify_current(record, key).map(|()| SignatureScheme::Current);
        }

        match self.policy {
            LegacySignaturePolicy::Reject => Err(SignatureError::MissingCurrentSignature),
            LegacySignaturePolicy::Accept => {
                warn!(key_type = %key.key_type(), "Record carries only a legacy signature");
                verify_legacy(record, key).map(|()| SignatureScheme::Legacy)
            }
        }
    }
}

/// Verify the current signature over `"ipns-signature:" || data`.
///
/// `data` is compared byte for byte with the encoding rebuilt from the
/// record's fields, so only one `data` can be accepted for a given record.
pub fn verify_current(record: &Record, key: &PublicKey) -> Result<(), SignatureError> {
    let signature = record
        .signature_current
        .as_deref()
        .ok_or(SignatureError::MissingCurrentSignature)?;
    let data = record.data.as_deref().ok_or(SignatureError::MissingData)?;

    if data != canonical_data(record)?.as_slice() {
        debug!(key_type = %key.key_type(), "Signed data differs from record fields");
        return Err(SignatureError::DataMismatch);
    }

    let mut payload = Vec::with_capacity(PAYLOAD_PREFIX.len() + data.len());
    payload.extend_from_slice(PAYLOAD_PREFIX);
    payload.extend_from_slice(data);
    check(key, &payload, signature, SignatureScheme::Current)
}

/// Verify the legacy signature over `value || validity`.
pub fn verify_legacy(record: &Record, key: &PublicKey) -> Result<(), SignatureError> {
    let signature = record
        .signature_legacy
        .as_deref()
        .ok_or(SignatureError::MissingSignature)?;
    check(key, &legacy_payload(record), signature, SignatureScheme::Legacy)
}

fn check(
    key: &PublicKey,
    payload: &[u8],
    signature: &[u8],
    scheme: SignatureScheme,
) -> Result<(), SignatureError> {
    key.verify(payload, signature).map_err(|e| {
        debug!(key_type = %key.key_type(), %scheme, error = %e, "Signature rejected");
        SignatureError::from_crypto(key.key_type(), e)
    })
}
