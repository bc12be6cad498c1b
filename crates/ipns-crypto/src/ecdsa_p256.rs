//! # ECDSA Keys (NIST P-256)
//!
//! P-256 keys travel as DER `SubjectPublicKeyInfo`. The encoding is too large
//! to inline, so these identities are always hashed.

use crate::keys::{KeyType, SignatureVerify};
use crate::CryptoError;
use p256::ecdsa::{signature::Verifier, Signature, VerifyingKey};
use p256::pkcs8::DecodePublicKey;

/// P-256 public key, kept with the exact DER bytes it was parsed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcdsaP256PublicKey {
    der: Vec<u8>,
    key: VerifyingKey,
}

impl EcdsaP256PublicKey {
    /// Parse a DER-encoded `SubjectPublicKeyInfo`.
    pub fn from_der(der: &[u8]) -> Result<Self, CryptoError> {
        let key = VerifyingKey::from_public_key_der(der).map_err(|_| {
            CryptoError::InvalidPublicKey {
                key_type: KeyType::Ecdsa,
            }
        })?;
        Ok(Self {
            der: der.to_vec(),
            key,
        })
    }

    /// DER bytes as received.
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }
}

impl SignatureVerify for EcdsaP256PublicKey {
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), CryptoError> {
        let sig = Signature::from_der(signature).map_err(|_| CryptoError::InvalidSignatureFormat)?;

        self.key
            .verify(message, &sig)
            .map_err(|_| CryptoError::SignatureVerificationFailed)
    }
}
