//! # Key Resolution
//!
//! Produces the single public key a record must be signed with:
//!
//! 1. If the identity inlines its key, that key is used and the record's
//!    `publicKey` field is not consulted.
//! 2. Otherwise the record must carry `publicKey`, and its bytes must hash to
//!    the identity's multihash. The hash is checked before the key is decoded.

use super::entities::Record;
use super::errors::{KeyResolutionError, VerificationError};
use super::identity::resolve_identity;
use ipns_crypto::{Multihash, PublicKey};
use tracing::debug;

/// Smallest RSA modulus accepted by default.
pub const MIN_RSA_BITS: usize = 2048;

/// Where the resolved key came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeySource {
    /// Inlined in the identity token
    Identity,
    /// The record's `publicKey` field, checked against the identity hash
    Record,
}

/// Outcome of key resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedKey {
    /// The key to verify with.
    pub public_key: PublicKey,
    /// Where it came from.
    pub source: KeySource,
    /// Multihash of the identity token.
    pub identity: Multihash,
}

/// Resolves identity tokens against records.
#[derive(Clone, Copy, Debug)]
pub struct KeyResolver {
    min_rsa_bits: usize,
}

impl Default for KeyResolver {
    fn default() -> Self {
        Self::new(MIN_RSA_BITS)
    }
}

impl KeyResolver {
    /// Resolver rejecting RSA keys below `min_rsa_bits`.
    pub fn new(min_rsa_bits: usize) -> Self {
        Self { min_rsa_bits }
    }

    /// Resolve the key for `token` and `record`.
    pub fn resolve(&self, token: &str, record: &Record) -> Result<ResolvedKey, VerificationError> {
        let identity = resolve_identity(token)?;

        let (public_key, source) = match identity.public_key {
            Some(key) => (key, KeySource::Identity),
            None => {
                let encoded = record
                    .public_key
                    .as_deref()
                    .ok_or(KeyResolutionError::NoKeySource)?;
                if !identity.multihash.matches(encoded) {
                    return Err(KeyResolutionError::KeyMismatch.into());
                }
                let key = PublicKey::from_protobuf(encoded)
                    .map_err(KeyResolutionError::InvalidEmbeddedKey)?;
                (key, KeySource::Record)
            }
        };

        if let PublicKey::Rsa(rsa) = &public_key {
            if rsa.bits() < self.min_rsa_bits {
                return Err(KeyResolutionError::WeakKey {
                    bits: rsa.bits(),
                    min: self.min_rsa_bits,
                }
                .into());
            }
        }

        debug!(
            key_type = %public_key.key_type(),
            source = ?source,
            "Resolved signing key"
        );

        Ok(ResolvedKey {
            public_key,
            source,
            identity: identity.multihash,
        })
    }
}
