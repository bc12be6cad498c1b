//! # IPNS Crypto - Key Types and Signature Primitives
//!
//! Public-key handling for IPNS record verification.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `ed25519` | Ed25519 | Compact keys, inlined into identities |
//! | `secp256k1` | ECDSA secp256k1 + SHA-256 | Compact keys, inlined into identities |
//! | `ecdsa_p256` | ECDSA P-256 + SHA-256 | DER keys, hashed identities |
//! | `rsa_pkcs1` | RSA PKCS#1 v1.5 + SHA-256 | Large keys, hashed identities |
//! | `keys` | Protobuf key envelope | Tagged `PublicKey` and dispatch |
//! | `hashing` | SHA-256, multihash | Identity derivation |
//!
//! ## Security Properties
//!
//! - **Ed25519**: strict verification (rejects non-canonical signatures)
//! - **secp256k1**: high-S signatures rejected in constant time
//! - **Identity check**: digest comparison is constant time

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa_p256;
pub mod ed25519;
pub mod errors;
pub mod hashing;
pub mod keys;
pub mod rsa_pkcs1;
pub mod secp256k1;
#[cfg(any(test, feature = "signing"))]
pub mod signing;

// Re-exports
pub use ecdsa_p256::EcdsaP256PublicKey;
pub use ed25519::Ed25519PublicKey;
pub use errors::CryptoError;
pub use hashing::{sha256, Multihash};
pub use keys::{KeyType, PublicKey, SignatureVerify};
pub use rsa_pkcs1::RsaPublicKey;
pub use secp256k1::Secp256k1PublicKey;
#[cfg(any(test, feature = "signing"))]
pub use signing::Keypair;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
