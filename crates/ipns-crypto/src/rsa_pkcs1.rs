//! # RSA Keys (PKCS#1 v1.5, SHA-256)
//!
//! RSA keys travel as DER `SubjectPublicKeyInfo`. They never fit in an
//! identity, so a record signed by an RSA key must carry the key itself.

use crate::keys::{KeyType, SignatureVerify};
use crate::CryptoError;
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::pkcs8::DecodePublicKey;
use rsa::signature::Verifier;
use rsa::traits::PublicKeyParts;
use sha2::Sha256;

/// RSA public key, kept with the exact DER bytes it was parsed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaPublicKey {
    der: Vec<u8>,
    key: rsa::RsaPublicKey,
}

impl RsaPublicKey {
    /// Parse a DER-encoded `SubjectPublicKeyInfo`.
    pub fn from_der(der: &[u8]) -> Result<Self, CryptoError> {
        let key = rsa::RsaPublicKey::from_public_key_der(der).map_err(|_| {
            CryptoError::InvalidPublicKey {
                key_type: KeyType::Rsa,
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

    /// Modulus size in bits.
    pub fn bits(&self) -> usize {
        self.key.size() * 8
    }
}

impl SignatureVerify for RsaPublicKey {
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), CryptoError> {
        let verifying_key = VerifyingKey::<Sha256>::new(self.key.clone());
        let sig = Signature::try_from(signature).map_err(|_| CryptoError::InvalidSignatureFormat)?;

        verifying_key
            .verify(message, &sig)
            .map_err(|_| CryptoError::SignatureVerificationFailed)
    }
}
