//! # Identity Resolution
//!
//! Parses an identity token into a multihash and, when the multihash inlines
//! the encoded key, into a public key.
//!
//! Accepted text forms (after an optional `/ipns/` prefix):
//!
//! - base58btc multihash: `12D3KooW…` (inline Ed25519), `Qm…` (SHA2-256)
//! - CIDv1 with the `libp2p-key` codec in any multibase: `k51…` (base36, the
//!   form kubo prints), `b…` (base32), `z…` (base58btc), `f…` (base16)

use super::errors::IdentityDecodeError;
use ipns_crypto::{Multihash, PublicKey};
use prost::encoding::decode_varint;

/// Path prefix conventionally put in front of identities.
pub const IPNS_NAMESPACE: &str = "/ipns/";

/// Multicodec for `libp2p-key` CIDs.
pub const LIBP2P_KEY_CODEC: u64 = 0x72;

const CID_VERSION_1: u64 = 1;

/// Identity token, decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedIdentity {
    /// Multihash the token names.
    pub multihash: Multihash,
    /// The key itself, for identities that inline it.
    pub public_key: Option<PublicKey>,
}

/// Strip the `/ipns/` prefix, if present.
pub fn strip_namespace(token: &str) -> &str {
    token.strip_prefix(IPNS_NAMESPACE).unwrap_or(token)
}

/// Parse the token text into its multihash.
pub fn parse_identity(token: &str) -> Result<Multihash, IdentityDecodeError> {
    let token = strip_namespace(token.trim());
    let Some(prefix) = token.chars().next() else {
        return Err(IdentityDecodeError::Empty);
    };

    // Raw multihashes in base58btc carry no multibase prefix
    if token.starts_with("Qm") || prefix == '1' {
        let bytes = decode_base58(token)?;
        return Multihash::from_bytes(&bytes).map_err(IdentityDecodeError::Multihash);
    }

    let (_, cid) = multibase::decode(token).map_err(|e| match e {
        multibase::Error::UnknownBase(code) => IdentityDecodeError::UnsupportedMultibase(code),
        other => IdentityDecodeError::InvalidEncoding {
            base: "multibase",
            reason: other.to_string(),
        },
    })?;
    parse_cid(&cid)
}

/// Parse the token and extract an inlined key.
pub fn resolve_identity(token: &str) -> Result<ResolvedIdentity, IdentityDecodeError> {
    let multihash = parse_identity(token)?;

    let public_key = if multihash.is_inline() {
        Some(PublicKey::from_protobuf(multihash.digest()).map_err(IdentityDecodeError::InvalidKey)?)
    } else {
        None
    };

    Ok(ResolvedIdentity {
        multihash,
        public_key,
    })
}

fn decode_base58(text: &str) -> Result<Vec<u8>, IdentityDecodeError> {
    bs58::decode(text)
        .into_vec()
        .map_err(|e| IdentityDecodeError::InvalidEncoding {
            base: "base58btc",
            reason: e.to_string(),
        })
}

fn parse_cid(bytes: &[u8]) -> Result<Multihash, IdentityDecodeError> {
    let mut cursor = bytes;
    let version = decode_varint(&mut cursor)
        .map_err(|e| IdentityDecodeError::InvalidCid(format!("version: {e}")))?;
    if version != CID_VERSION_1 {
        return Err(IdentityDecodeError::InvalidCid(format!(
            "unsupported CID version {version}"
        )));
    }

    let codec = decode_varint(&mut cursor)
        .map_err(|e| IdentityDecodeError::InvalidCid(format!("codec: {e}")))?;
    if codec != LIBP2P_KEY_CODEC {
        return Err(IdentityDecodeError::WrongCodec(codec));
    }

    Multihash::from_bytes(cursor).map_err(IdentityDecodeError::Multihash)
}
