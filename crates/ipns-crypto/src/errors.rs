//! Crypto error types.

use crate::keys::KeyType;
use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Key bytes are not a valid key of the declared type
    #[error("Invalid {key_type} public key")]
    InvalidPublicKey {
        /// Declared type of the rejected key
        key_type: KeyType,
    },

    /// Key envelope names a type this crate does not know
    #[error("Unsupported key type: {0}")]
    UnsupportedKeyType(i32),

    /// Key envelope is not valid protobuf
    #[error("Malformed public key encoding: {0}")]
    MalformedKeyEncoding(String),

    /// Invalid signature format (wrong length, bad DER)
    #[error("Invalid signature format")]
    InvalidSignatureFormat,

    /// Signature has high S value
    #[error("Malleable signature (high S value)")]
    MalleableSignature,

    /// Signature does not verify against message and key
    #[error("Signature verification failed")]
    SignatureVerificationFailed,

    /// Multihash uses a hash function other than identity or SHA2-256
    #[error("Unsupported multihash code: {0:#x}")]
    UnsupportedMultihash(u64),

    /// Multihash framing is inconsistent
    #[error("Malformed multihash: {0}")]
    MalformedMultihash(String),

    /// Key generation failed
    #[error("Key generation failed: {0}")]
    KeyGenerationFailed(String),

    /// Signing failed
    #[error("Signing failed: {0}")]
    SigningFailed(String),
}
