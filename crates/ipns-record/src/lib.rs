//! # IPNS Record Verification
//!
//! Decides whether a signed naming record was produced by the holder of the
//! key behind an identity, and extracts its value and validity window.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Codec, key resolution, payloads, signature
//!   and validity checks. No I/O
//! - **Ports Layer** (`ports/`): Inbound API trait, outbound clock
//! - **Adapters Layer** (`adapters/`): Clock implementations
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//!
//! ## Pipeline
//!
//! `decode -> resolve key -> check signature -> compute validity`. The first
//! failing stage ends verification with its own error kind.
//!
//! ## Security Notes
//!
//! - **No silent downgrade**: a record carrying a current signature is judged
//!   by it alone; legacy-only records need [`LegacySignaturePolicy::Accept`]
//! - **Key binding**: a key taken from the record must hash to the identity
//! - **Malleability**: high-S secp256k1 signatures are rejected
//! - **Canonical data**: the signed `data` must be byte-identical to the
//!   DAG-CBOR encoding rebuilt from the record's fields

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::{FixedClock, SystemClock};
pub use config::{ConfigError, VerifierConfig};
pub use domain::codec::{RecordCodec, MAX_RECORD_SIZE};
pub use domain::entities::{
    BatchItem, BatchVerificationRequest, BatchVerificationResult, LegacySignaturePolicy, Record,
    SignatureScheme, ValidityType, VerifiedRecord,
};
pub use domain::errors::{
    DecodeError, IdentityDecodeError, KeyResolutionError, SignatureError, ValidityError,
    VerificationError,
};
pub use domain::identity::{
    parse_identity, resolve_identity, strip_namespace, ResolvedIdentity, LIBP2P_KEY_CODEC,
};
pub use domain::key_resolver::{KeyResolver, KeySource, ResolvedKey};
pub use domain::payload::{canonical_data, current_payload, legacy_payload, PAYLOAD_PREFIX};
pub use domain::validity::{compute_eol, format_validity, ttl_hint};
pub use domain::verifier::SignatureVerifier;
pub use ports::inbound::RecordVerificationApi;
pub use ports::outbound::Clock;
pub use service::RecordVerificationService;
