//! # Ed25519 Keys
//!
//! Twisted Edwards curve keys. The 32-byte encoding is small enough to be
//! inlined into an identity, so Ed25519 identities are self-describing.
//!
//! ## Security Properties
//!
//! - Strict verification: rejects small-order keys and non-canonical `S`
//! - Deterministic signatures (no RNG dependency)

use crate::keys::{KeyType, SignatureVerify};
use crate::CryptoError;
use ed25519_dalek::{Signature, VerifyingKey};

/// Ed25519 public key (32 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ed25519PublicKey([u8; 32]);

impl Ed25519PublicKey {
    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        // Validate it's a valid point
        VerifyingKey::from_bytes(&bytes).map_err(|_| CryptoError::InvalidPublicKey {
            key_type: KeyType::Ed25519,
        })?;
        Ok(Self(bytes))
    }

    /// Create from a slice, checking the length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let array: [u8; 32] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidPublicKey {
                key_type: KeyType::Ed25519,
            })?;
        Self::from_bytes(array)
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl SignatureVerify for Ed25519PublicKey {
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), CryptoError> {
        let verifying_key = VerifyingKey::from_bytes(&self.0).map_err(|_| {
            CryptoError::InvalidPublicKey {
                key_type: KeyType::Ed25519,
            }
        })?;

        let sig =
            Signature::from_slice(signature).map_err(|_| CryptoError::InvalidSignatureFormat)?;

        verifying_key
            .verify_strict(message, &sig)
            .map_err(|_| CryptoError::SignatureVerificationFailed)
    }
}
