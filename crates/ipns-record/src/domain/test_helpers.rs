//! Record fixtures shared by the domain tests.

use super::entities::{Record, ValidityType};
use super::payload::{canonical_data, current_payload, legacy_payload};
use ipns_crypto::signing::Keypair;

/// An unsigned-looking record with every field populated.
///
/// The signature bytes are placeholders; pass the record through
/// [`sign_current`] to get a verifiable one.
pub fn sample_record() -> Record {
    Record {
        value: b"/ipfs/bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi".to_vec(),
        validity_type: ValidityType::Eol,
        validity: b"2030-01-01T00:00:00Z".to_vec(),
        sequence: 1,
        ttl: Some(3_600_000_000_000),
        signature_legacy: None,
        signature_current: Some(vec![0u8; 64]),
        public_key: None,
        data: None,
    }
}

/// Fill in `data` and sign the current payload of `record` with `keypair`.
pub fn sign_current(keypair: &Keypair, mut record: Record) -> Record {
    record.data = Some(canonical_data(&record).expect("encodable record"));
    record.signature_current = Some(
        keypair
            .sign(&current_payload(&record).expect("encodable record"))
            .expect("signing failed"),
    );
    record
}

/// Sign the legacy payload of `record` with `keypair`.
pub fn sign_legacy(keypair: &Keypair, mut record: Record) -> Record {
    record.signature_legacy = Some(
        keypair
            .sign(&legacy_payload(&record))
            .expect("signing failed"),
    );
    record
}

/// Attach the encoded public key of `keypair`.
pub fn embed_key(keypair: &Keypair, mut record: Record) -> Record {
    record.public_key = Some(keypair.public().expect("public key").to_protobuf());
    record
}
