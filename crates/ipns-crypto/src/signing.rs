//! # Signing Keypairs
//!
//! Private keys for every supported key type. Verification never needs these;
//! they exist so fixtures, benchmarks and fuzzers can produce genuine records.

use crate::ecdsa_p256::EcdsaP256PublicKey;
use crate::ed25519::Ed25519PublicKey;
use crate::keys::PublicKey;
use crate::rsa_pkcs1::RsaPublicKey;
use crate::secp256k1::Secp256k1PublicKey;
use crate::CryptoError;
use rand::rngs::OsRng;

/// A private key of one of the supported types.
pub enum Keypair {
    /// Ed25519 signing key
    Ed25519(ed25519_dalek::SigningKey),
    /// secp256k1 signing key
    Secp256k1(k256::ecdsa::SigningKey),
    /// P-256 signing key
    EcdsaP256(p256::ecdsa::SigningKey),
    /// RSA private key
    Rsa(Box<rsa::RsaPrivateKey>),
}

impl Keypair {
    /// Generate a random Ed25519 keypair.
    pub fn generate_ed25519() -> Self {
        Keypair::Ed25519(ed25519_dalek::SigningKey::generate(&mut OsRng))
    }

    /// Create an Ed25519 keypair from a 32-byte seed.
    pub fn ed25519_from_seed(seed: [u8; 32]) -> Self {
        Keypair::Ed25519(ed25519_dalek::SigningKey::from_bytes(&seed))
    }

    /// Generate a random secp256k1 keypair.
    pub fn generate_secp256k1() -> Self {
        Keypair::Secp256k1(k256::ecdsa::SigningKey::random(&mut OsRng))
    }

    /// Generate a random P-256 keypair.
    pub fn generate_ecdsa_p256() -> Self {
        Keypair::EcdsaP256(p256::ecdsa::SigningKey::random(&mut OsRng))
    }

    /// Generate a random RSA keypair with a modulus of `bits` bits.
    pub fn generate_rsa(bits: usize) -> Result<Self, CryptoError> {
        let key = rsa::RsaPrivateKey::new(&mut OsRng, bits)
            .map_err(|e| CryptoError::KeyGenerationFailed(e.to_string()))?;
        Ok(Keypair::Rsa(Box::new(key)))
    }

    /// Public half.
    pub fn public(&self) -> Result<PublicKey, CryptoError> {
        match self {
            Keypair::Ed25519(sk) => Ok(PublicKey::Ed25519(Ed25519PublicKey::from_bytes(
                sk.verifying_key().to_bytes(),
            )?)),
            Keypair::Secp256k1(sk) => {
                let point = sk.verifying_key().to_encoded_point(true);
                Ok(PublicKey::Secp256k1(Secp256k1PublicKey::from_slice(
                    point.as_bytes(),
                )?))
            }
            Keypair::EcdsaP256(sk) => {
                use p256::pkcs8::EncodePublicKey;
                let der = sk
                    .verifying_key()
                    .to_public_key_der()
                    .map_err(|e| CryptoError::KeyGenerationFailed(e.to_string()))?;
                Ok(PublicKey::EcdsaP256(EcdsaP256PublicKey::from_der(
                    der.as_bytes(),
                )?))
            }
            Keypair::Rsa(sk) => {
                use rsa::pkcs8::EncodePublicKey;
                let der = rsa::RsaPublicKey::from(&**sk)
                    .to_public_key_der()
                    .map_err(|e| CryptoError::KeyGenerationFailed(e.to_string()))?;
                Ok(PublicKey::Rsa(RsaPublicKey::from_der(der.as_bytes())?))
            }
        }
    }

    /// Sign `message` with the scheme matching the key type.
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        match self {
            Keypair::Ed25519(sk) => {
                use ed25519_dalek::Signer;
                Ok(sk.sign(message).to_bytes().to_vec())
            }
            Keypair::Secp256k1(sk) => {
                use k256::ecdsa::signature::Signer;
                let sig: k256::ecdsa::Signature = sk
                    .try_sign(message)
                    .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;
                Ok(sig.to_der().as_bytes().to_vec())
            }
            Keypair::EcdsaP256(sk) => {
                use p256::ecdsa::signature::Signer;
                let sig: p256::ecdsa::Signature = sk
                    .try_sign(message)
                    .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;
                Ok(sig.to_der().as_bytes().to_vec())
            }
            Keypair::Rsa(sk) => {
                use rsa::signature::{SignatureEncoding, Signer};
                let signing_key =
                    rsa::pkcs1v15::SigningKey::<sha2::Sha256>::new((**sk).clone());
                let sig = signing_key
                    .try_sign(message)
                    .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;
                Ok(sig.to_vec())
            }
        }
    }
}

/// Shared RSA keys; generating them dominates test time otherwise.
pub mod test_keys {
    use super::Keypair;
    use std::sync::OnceLock;

    /// A process-wide 2048-bit RSA keypair.
    pub fn rsa_2048() -> &'static Keypair {
        static KEY: OnceLock<Keypair> = OnceLock::new();
        KEY.get_or_init(|| Keypair::generate_rsa(2048).expect("RSA key generation"))
    }

    /// A second, distinct 2048-bit RSA keypair.
    pub fn rsa_2048_alt() -> &'static Keypair {
        static KEY: OnceLock<Keypair> = OnceLock::new();
        KEY.get_or_init(|| Keypair::generate_rsa(2048).expect("RSA key generation"))
    }

    /// A 1024-bit RSA keypair, below the default verification minimum.
    pub fn rsa_1024() -> &'static Keypair {
        static KEY: OnceLock<Keypair> = OnceLock::new();
        KEY.get_or_init(|| Keypair::generate_rsa(1024).expect("RSA key generation"))
    }
}
