//! # Public Key Envelope
//!
//! Keys are exchanged as a small protobuf envelope:
//!
//! ```text
//! message PublicKey {
//!   required KeyType Type = 1;
//!   required bytes Data = 2;
//! }
//! ```
//!
//! `Data` is the raw 32-byte key for Ed25519, the 33-byte compressed point for
//! secp256k1, and a DER `SubjectPublicKeyInfo` for P-256 and RSA.
//!
//! [`PublicKey`] is a tagged variant; verification is a `match` on the tag.

use crate::ecdsa_p256::EcdsaP256PublicKey;
use crate::ed25519::Ed25519PublicKey;
use crate::hashing::Multihash;
use crate::rsa_pkcs1::RsaPublicKey;
use crate::secp256k1::Secp256k1PublicKey;
use crate::CryptoError;
use prost::Message;
use std::fmt;

/// Key algorithm tag, numbered as on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum KeyType {
    /// RSA, PKCS#1 v1.5 signatures
    Rsa = 0,
    /// Ed25519
    Ed25519 = 1,
    /// ECDSA over secp256k1
    Secp256k1 = 2,
    /// ECDSA over NIST P-256
    Ecdsa = 3,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyType::Rsa => "RSA",
            KeyType::Ed25519 => "Ed25519",
            KeyType::Secp256k1 => "Secp256k1",
            KeyType::Ecdsa => "ECDSA",
        };
        f.write_str(name)
    }
}

#[derive(Clone, PartialEq, Message)]
struct PublicKeyProto {
    #[prost(enumeration = "KeyType", required, tag = "1")]
    key_type: i32,
    #[prost(bytes = "vec", required, tag = "2")]
    data: Vec<u8>,
}

/// Capability shared by every key type: check a signature over a message.
pub trait SignatureVerify {
    /// Verify `signature` over `message`.
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), CryptoError>;
}

/// A validated public key of one of the supported types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublicKey {
    /// Ed25519 key
    Ed25519(Ed25519PublicKey),
    /// secp256k1 key
    Secp256k1(Secp256k1PublicKey),
    /// P-256 key
    EcdsaP256(EcdsaP256PublicKey),
    /// RSA key
    Rsa(RsaPublicKey),
}

impl PublicKey {
    /// Decode and validate a protobuf key envelope.
    pub fn from_protobuf(bytes: &[u8]) -> Result<Self, CryptoError> {
        let envelope = PublicKeyProto::decode(bytes)
            .map_err(|e| CryptoError::MalformedKeyEncoding(e.to_string()))?;

        let key_type = KeyType::try_from(envelope.key_type)
            .map_err(|_| CryptoError::UnsupportedKeyType(envelope.key_type))?;

        let data = envelope.data.as_slice();
        let key = match key_type {
            KeyType::Ed25519 => PublicKey::Ed25519(Ed25519PublicKey::from_slice(data)?),
            KeyType::Secp256k1 => PublicKey::Secp256k1(Secp256k1PublicKey::from_slice(data)?),
            KeyType::Ecdsa => PublicKey::EcdsaP256(EcdsaP256PublicKey::from_der(data)?),
            KeyType::Rsa => PublicKey::Rsa(RsaPublicKey::from_der(data)?),
        };
        Ok(key)
    }

    /// Encode as a protobuf key envelope.
    pub fn to_protobuf(&self) -> Vec<u8> {
        let data = match self {
            PublicKey::Ed25519(key) => key.as_bytes().to_vec(),
            PublicKey::Secp256k1(key) => key.as_bytes().to_vec(),
            PublicKey::EcdsaP256(key) => key.as_der().to_vec(),
            PublicKey::Rsa(key) => key.as_der().to_vec(),
        };
        PublicKeyProto {
            key_type: self.key_type() as i32,
            data,
        }
        .encode_to_vec()
    }

    /// Algorithm tag.
    pub fn key_type(&self) -> KeyType {
        match self {
            PublicKey::Ed25519(_) => KeyType::Ed25519,
            PublicKey::Secp256k1(_) => KeyType::Secp256k1,
            PublicKey::EcdsaP256(_) => KeyType::Ecdsa,
            PublicKey::Rsa(_) => KeyType::Rsa,
        }
    }

    /// Identity multihash naming this key.
    pub fn to_identity(&self) -> Multihash {
        Multihash::for_encoded_key(&self.to_protobuf())
    }
}

impl SignatureVerify for PublicKey {
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), CryptoError> {
        match self {
            PublicKey::Ed25519(key) => key.verify(message, signature),
            PublicKey::Secp256k1(key) => key.verify(message, signature),
            PublicKey::EcdsaP256(key) => key.verify(message, signature),
            PublicKey::Rsa(key) => key.verify(message, signature),
        }
    }
}
