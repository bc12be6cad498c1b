//! # ECDSA Keys (secp256k1)
//!
//! Compressed secp256k1 keys (33 bytes), small enough to be inlined into an
//! identity. Signatures are DER-encoded ECDSA over SHA-256 of the message.
//!
//! ## Security Notes
//!
//! - **Malleability Prevention**: S must be STRICTLY LESS THAN the half order
//! - **Constant-Time Operations**: the low-S check uses `subtle`

use crate::keys::{KeyType, SignatureVerify};
use crate::CryptoError;
use k256::ecdsa::{signature::Verifier, Signature, VerifyingKey};
use subtle::Choice;

/// Half of the secp256k1 curve order (for malleability check).
/// n/2 where n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

/// Compressed secp256k1 public key (33 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1PublicKey([u8; 33]);

impl Secp256k1PublicKey {
    /// Create from compressed bytes (33 bytes, starting with 0x02 or 0x03).
    pub fn from_bytes(bytes: [u8; 33]) -> Result<Self, CryptoError> {
        // Validate it's a valid compressed point
        VerifyingKey::from_sec1_bytes(&bytes).map_err(|_| CryptoError::InvalidPublicKey {
            key_type: KeyType::Secp256k1,
        })?;
        Ok(Self(bytes))
    }

    /// Create from a slice, checking the length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let array: [u8; 33] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidPublicKey {
                key_type: KeyType::Secp256k1,
            })?;
        Self::from_bytes(array)
    }

    /// Get raw compressed bytes.
    pub fn as_bytes(&self) -> &[u8; 33] {
        &self.0
    }
}

impl SignatureVerify for Secp256k1PublicKey {
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), CryptoError> {
        let verifying_key = VerifyingKey::from_sec1_bytes(&self.0).map_err(|_| {
            CryptoError::InvalidPublicKey {
                key_type: KeyType::Secp256k1,
            }
        })?;

        let sig = Signature::from_der(signature).map_err(|_| CryptoError::InvalidSignatureFormat)?;

        let sig_bytes = sig.to_bytes();
        let mut s = [0u8; 32];
        s.copy_from_slice(&sig_bytes[32..]);
        if !is_low_s(&s) {
            return Err(CryptoError::MalleableSignature);
        }

        verifying_key
            .verify(message, &sig)
            .map_err(|_| CryptoError::SignatureVerificationFailed)
    }
}

/// Check if S value is in lower half of curve order.
///
/// S must be STRICTLY LESS THAN half_order (not equal).
///
/// ## Security: Constant-Time Implementation
///
/// The comparison runs in fixed time regardless of input values, so timing
/// reveals nothing about the signature.
fn is_low_s(s: &[u8; 32]) -> bool {
    let mut less = Choice::from(0u8);
    let mut greater = Choice::from(0u8);

    for (s_byte, h_byte) in s.iter().zip(SECP256K1_HALF_ORDER.iter()) {
        // less = less OR (NOT decided AND s[i] < h[i])
        // greater = greater OR (NOT decided AND s[i] > h[i])
        let not_decided = !(less | greater);
        let byte_less = Choice::from((s_byte < h_byte) as u8);
        let byte_greater = Choice::from((s_byte > h_byte) as u8);

        less |= not_decided & byte_less;
        greater |= not_decided & byte_greater;
    }

    less.into()
}
