//! # Record Codec
//!
//! proto2 wire format:
//!
//! ```text
//! message IpnsEntry {
//!   optional bytes value = 1;
//!   optional bytes signatureV1 = 2;
//!   optional ValidityType validityType = 3;   // EOL = 0
//!   optional bytes validity = 4;
//!   optional uint64 sequence = 5;
//!   optional uint64 ttl = 6;
//!   optional bytes pubKey = 7;
//!   optional bytes signatureV2 = 8;
//!   optional bytes data = 9;
//! }
//! ```
//!
//! Unknown tags are skipped on decode and never written.

use super::entities::{LegacySignaturePolicy, Record, ValidityType};
use super::errors::DecodeError;
use prost::Message;

/// Largest encoded record accepted by [`RecordCodec::decode`].
pub const MAX_RECORD_SIZE: usize = 10 * 1024;

/// `validityType` is read as a raw `int32` so unknown values reach
/// [`ValidityType::Unrecognized`].
#[derive(Clone, PartialEq, Message)]
struct IpnsEntryProto {
    #[prost(bytes = "vec", optional, tag = "1")]
    value: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "2")]
    signature_v1: Option<Vec<u8>>,
    #[prost(int32, optional, tag = "3")]
    validity_type: Option<i32>,
    #[prost(bytes = "vec", optional, tag = "4")]
    validity: Option<Vec<u8>>,
    #[prost(uint64, optional, tag = "5")]
    sequence: Option<u64>,
    #[prost(uint64, optional, tag = "6")]
    ttl: Option<u64>,
    #[prost(bytes = "vec", optional, tag = "7")]
    pub_key: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "8")]
    signature_v2: Option<Vec<u8>>,
    #[prost(bytes = "vec", optional, tag = "9")]
    data: Option<Vec<u8>>,
}

/// Decodes and encodes records.
pub struct RecordCodec;

impl RecordCodec {
    /// Decode, requiring a current signature.
    pub fn decode(bytes: &[u8]) -> Result<Record, DecodeError> {
        Self::decode_with(bytes, LegacySignaturePolicy::Reject)
    }

    /// Decode under a legacy policy. With [`LegacySignaturePolicy::Accept`] a
    /// record may carry only the legacy signature; a record with neither
    /// signature always fails.
    pub fn decode_with(bytes: &[u8], policy: LegacySignaturePolicy) -> Result<Record, DecodeError> {
        Self::decode_limited(bytes, policy, MAX_RECORD_SIZE)
    }

    /// [`RecordCodec::decode_with`] with an explicit size limit.
    pub fn decode_limited(
        bytes: &[u8],
        policy: LegacySignaturePolicy,
        limit: usize,
    ) -> Result<Record, DecodeError> {
        if bytes.len() > limit {
            return Err(DecodeError::TooLarge {
                size: bytes.len(),
                limit,
            });
        }

        let entry =
            IpnsEntryProto::decode(bytes).map_err(|e| DecodeError::Malformed(e.to_string()))?;

        let value = entry.value.ok_or(DecodeError::MissingField("value"))?;
        let validity_type = entry
            .validity_type
            .ok_or(DecodeError::MissingField("validityType"))?;
        let validity = entry.validity.ok_or(DecodeError::MissingField("validity"))?;

        match (&entry.signature_v2, &entry.signature_v1, policy) {
            (Some(_), _, _) => {}
            (None, Some(_), LegacySignaturePolicy::Accept) => {}
            (None, _, _) => return Err(DecodeError::MissingField("signatureV2")),
        }

        Ok(Record {
            value,
            validity_type: ValidityType::from_wire(validity_type),
            validity,
            sequence: entry.sequence.unwrap_or(0),
            ttl: entry.ttl,
            signature_legacy: entry.signature_v1,
            signature_current: entry.signature_v2,
            public_key: entry.pub_key,
            data: entry.data,
        })
    }

    /// Encode in tag order. `sequence` is always written, so a record
    /// decoded without one re-encodes two bytes longer.
    pub fn encode(record: &Record) -> Vec<u8> {
        IpnsEntryProto {
            value: Some(record.value.clone()),
            signature_v1: record.signature_legacy.clone(),
            validity_type: Some(record.validity_type.to_wire()),
            validity: Some(record.validity.clone()),
            sequence: Some(record.sequence),
            ttl: record.ttl,
            pub_key: record.public_key.clone(),
            signature_v2: record.signature_current.clone(),
            data: record.data.clone(),
        }
        .encode_to_vec()
    }
}
