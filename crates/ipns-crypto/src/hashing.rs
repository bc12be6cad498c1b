//! # Hashing and Multihash
//!
//! SHA-256 plus the self-describing multihash framing used by identities:
//! `varint(code) || varint(digest length) || digest`.
//!
//! Encoded public keys of at most [`MAX_INLINE_KEY_LENGTH`] bytes are framed
//! with the identity code (the "digest" is the key itself); anything larger
//! is framed as a SHA2-256 digest of the key.

use crate::CryptoError;
use prost::encoding::{decode_varint, encode_varint};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// SHA-256 output (256-bit).
pub type Hash = [u8; 32];

/// Multihash code for the identity "hash" (digest is the input).
pub const IDENTITY_CODE: u64 = 0x00;

/// Multihash code for SHA2-256.
pub const SHA2_256_CODE: u64 = 0x12;

/// Largest encoded key that is inlined instead of hashed.
pub const MAX_INLINE_KEY_LENGTH: usize = 42;

/// Hash data with SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// A parsed multihash restricted to the codes identities use.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Multihash {
    code: u64,
    digest: Vec<u8>,
}

impl Multihash {
    /// Identity multihash: the digest is `data` itself.
    pub fn identity(data: &[u8]) -> Self {
        Self {
            code: IDENTITY_CODE,
            digest: data.to_vec(),
        }
    }

    /// SHA2-256 multihash of `data`.
    pub fn sha2_256(data: &[u8]) -> Self {
        Self {
            code: SHA2_256_CODE,
            digest: sha256(data).to_vec(),
        }
    }

    /// Multihash naming an encoded public key: inlined when small, hashed otherwise.
    pub fn for_encoded_key(encoded: &[u8]) -> Self {
        if encoded.len() <= MAX_INLINE_KEY_LENGTH {
            Self::identity(encoded)
        } else {
            Self::sha2_256(encoded)
        }
    }

    /// Parse a binary multihash. The input must be consumed exactly.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let mut cursor = bytes;
        let code = decode_varint(&mut cursor)
            .map_err(|e| CryptoError::MalformedMultihash(format!("code: {e}")))?;
        let length = decode_varint(&mut cursor)
            .map_err(|e| CryptoError::MalformedMultihash(format!("length: {e}")))?;

        if length != cursor.len() as u64 {
            return Err(CryptoError::MalformedMultihash(format!(
                "declared digest length {length}, found {} bytes",
                cursor.len()
            )));
        }

        match code {
            IDENTITY_CODE => {}
            SHA2_256_CODE if cursor.len() == 32 => {}
            SHA2_256_CODE => {
                return Err(CryptoError::MalformedMultihash(format!(
                    "sha2-256 digest must be 32 bytes, found {}",
                    cursor.len()
                )))
            }
            other => return Err(CryptoError::UnsupportedMultihash(other)),
        }

        Ok(Self {
            code,
            digest: cursor.to_vec(),
        })
    }

    /// Binary form.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.digest.len() + 4);
        encode_varint(self.code, &mut out);
        encode_varint(self.digest.len() as u64, &mut out);
        out.extend_from_slice(&self.digest);
        out
    }

    /// Base58btc text form (the conventional identity string).
    pub fn to_base58(&self) -> String {
        bs58::encode(self.to_bytes()).into_string()
    }

    /// Multihash function code.
    pub fn code(&self) -> u64 {
        self.code
    }

    /// Digest bytes (the encoded key itself for identity multihashes).
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    /// Whether this is an identity multihash carrying its input inline.
    pub fn is_inline(&self) -> bool {
        self.code == IDENTITY_CODE
    }

    /// Whether `encoded` hashes to this multihash under its own code.
    ///
    /// The digest comparison is constant time.
    pub fn matches(&self, encoded: &[u8]) -> bool {
        match self.code {
            IDENTITY_CODE => self.digest.as_slice().ct_eq(encoded).into(),
            SHA2_256_CODE => self.digest.as_slice().ct_eq(&sha256(encoded)[..]).into(),
            _ => false,
        }
    }
}
