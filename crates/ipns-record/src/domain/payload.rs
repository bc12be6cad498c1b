//! # Signing Payloads
//!
//! The exact bytes each signature scheme signs.
//!
//! Current (`signatureV2`): `"ipns-signature:" || data`, where `data` is the
//! DAG-CBOR map of the signed fields. DAG-CBOR sorts map keys by length, then
//! bytewise, so the field order is fixed:
//!
//! ```text
//! {
//!   "TTL":          uint    (0 when the record has no ttl)
//!   "Value":        bytes
//!   "Sequence":     uint
//!   "Validity":     bytes
//!   "ValidityType": int
//! }
//! ```
//!
//! Integers use their shortest encoding and lengths are definite, so every
//! record has exactly one `data`. `publicKey` and the signatures are not
//! covered.
//!
//! Legacy (`signatureV1`): `value || validity`.

use super::entities::Record;
use super::errors::SignatureError;
use ciborium::value::Value;

/// Domain-separation prefix of the current payload.
pub const PAYLOAD_PREFIX: &[u8] = b"ipns-signature:";

/// DAG-CBOR encoding of the fields the current signature covers.
pub fn canonical_data(record: &Record) -> Result<Vec<u8>, SignatureError> {
    let fields = Value::Map(vec![
        (text("TTL"), Value::Integer(record.ttl.unwrap_or(0).into())),
        (text("Value"), Value::Bytes(record.value.clone())),
        (text("Sequence"), Value::Integer(record.sequence.into())),
        (text("Validity"), Value::Bytes(record.validity.clone())),
        (
            text("ValidityType"),
            Value::Integer(record.validity_type.to_wire().into()),
        ),
    ]);

    let mut out = Vec::with_capacity(64 + record.value.len() + record.validity.len());
    ciborium::into_writer(&fields, &mut out)
        .map_err(|e| SignatureError::DataEncoding(e.to_string()))?;
    Ok(out)
}

/// Bytes the current signature is computed over, rebuilt from the record's
/// fields.
pub fn current_payload(record: &Record) -> Result<Vec<u8>, SignatureError> {
    let data = canonical_data(record)?;
    let mut out = Vec::with_capacity(PAYLOAD_PREFIX.len() + data.len());
    out.extend_from_slice(PAYLOAD_PREFIX);
    out.extend_from_slice(&data);
    Ok(out)
}

/// Bytes the legacy signature is computed over.
pub fn legacy_payload(record: &Record) -> Vec<u8> {
    let mut out = Vec::with_capacity(record.value.len() + record.validity.len());
    out.extend_from_slice(&record.value);
    out.extend_from_slice(&record.validity);
    out
}

fn text(key: &str) -> Value {
    Value::Text(key.to_string())
}
