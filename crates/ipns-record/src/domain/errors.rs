//! # Verification Errors
//!
//! One error family per pipeline stage, aggregated into [`VerificationError`].
//! Every stage fails fast; there is no partial success.

use ipns_crypto::{CryptoError, KeyType};
use thiserror::Error;

/// Record bytes could not be decoded.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Input exceeds the size limit
    #[error("record is {size} bytes, limit is {limit}")]
    TooLarge { size: usize, limit: usize },

    /// Wire-level protobuf failure (truncation, wire type/tag mismatch)
    #[error("malformed record: {0}")]
    Malformed(String),

    /// A required field is absent
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

/// Identity token could not be parsed into a usable multihash.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityDecodeError {
    /// Empty token (after stripping the namespace)
    #[error("empty identity")]
    Empty,

    /// Text could not be decoded in its declared base
    #[error("invalid {base} encoding: {reason}")]
    InvalidEncoding { base: &'static str, reason: String },

    /// Not a known multibase prefix
    #[error("unsupported multibase prefix '{0}'")]
    UnsupportedMultibase(char),

    /// CID framing is wrong
    #[error("invalid CID: {0}")]
    InvalidCid(String),

    /// CID content type is not `libp2p-key`
    #[error("CID codec 0x{0:x} is not libp2p-key")]
    WrongCodec(u64),

    /// Multihash framing or code rejected
    #[error("invalid multihash: {0}")]
    Multihash(CryptoError),

    /// Inline payload is not a valid public key
    #[error("embedded key is invalid: {0}")]
    InvalidKey(CryptoError),
}

/// No trustworthy public key could be determined.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyResolutionError {
    /// Hashed identity and no `publicKey` in the record
    #[error("no key source")]
    NoKeySource,

    /// `publicKey` does not hash to the identity
    #[error("key mismatch")]
    KeyMismatch,

    /// `publicKey` is present but not a decodable key
    #[error("record public key is invalid: {0}")]
    InvalidEmbeddedKey(CryptoError),

    /// RSA modulus below the configured minimum
    #[error("RSA key of {bits} bits is below the minimum of {min}")]
    WeakKey { bits: usize, min: usize },
}

/// Signature check failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// No current signature and legacy signatures are not accepted
    #[error("record has no current signature")]
    MissingCurrentSignature,

    /// No signature of any scheme is present
    #[error("record carries no signature")]
    MissingSignature,

    /// Current signature present without the `data` it covers
    #[error("record has a current signature but no signed data")]
    MissingData,

    /// `data` does not match the record's own fields
    #[error("signed data does not match the record fields")]
    DataMismatch,

    /// The record's fields could not be serialized for signing
    #[error("cannot encode signed data: {0}")]
    DataEncoding(String),

    /// The signature bytes are not a well-formed signature for the key type
    #[error("invalid {key_type} signature encoding")]
    InvalidFormat { key_type: KeyType },

    /// secp256k1 signature with a high S value
    #[error("malleable signature (high S value)")]
    Malleable,

    /// Well-formed signature that does not match
    #[error("{key_type} signature does not match")]
    Mismatch { key_type: KeyType },
}

impl SignatureError {
    /// Map a crypto failure for a key of `key_type`.
    pub fn from_crypto(key_type: KeyType, err: CryptoError) -> Self {
        match err {
            CryptoError::InvalidSignatureFormat => SignatureError::InvalidFormat { key_type },
            CryptoError::MalleableSignature => SignatureError::Malleable,
            _ => SignatureError::Mismatch { key_type },
        }
    }
}

/// Validity window could not be determined, or is over.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidityError {
    /// `validityType` other than EOL
    #[error("unrecognized validity type {0}")]
    UnrecognizedType(i32),

    /// `validity` is not UTF-8
    #[error("validity is not valid UTF-8")]
    NotUtf8,

    /// `validity` is not an RFC 3339 timestamp
    #[error("validity {text:?} is not an RFC 3339 timestamp: {reason}")]
    Unparsable { text: String, reason: String },

    /// EOL is before the verifier's clock
    #[error("record expired at {eol}")]
    Expired { eol: String },
}

/// Any verification failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerificationError {
    #[error("DecodeError: {0}")]
    Decode(#[from] DecodeError),

    #[error("IdentityDecodeError: {0}")]
    Identity(#[from] IdentityDecodeError),

    #[error("KeyResolutionError: {0}")]
    KeyResolution(#[from] KeyResolutionError),

    #[error("SignatureError: {0}")]
    Signature(#[from] SignatureError),

    #[error("ValidityError: {0}")]
    Validity(#[from] ValidityError),
}

impl VerificationError {
    /// Stable name of the failing stage.
    pub fn kind(&self) -> &'static str {
        match self {
            VerificationError::Decode(_) => "DecodeError",
            VerificationError::Identity(_) => "IdentityDecodeError",
            VerificationError::KeyResolution(_) => "KeyResolutionError",
            VerificationError::Signature(_) => "SignatureError",
            VerificationError::Validity(_) => "ValidityError",
        }
    }
}
