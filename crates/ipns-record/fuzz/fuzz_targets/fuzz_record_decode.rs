//! Fuzz target for record decoding and the verification pipeline.
//!
//! Arbitrary bytes must never panic the decoder, and any record that decodes
//! must re-encode to something that decodes to the same record.
//!
//! ## Running
//!
//! ```bash
//! cd crates/ipns-record
//! cargo +nightly fuzz run fuzz_record_decode
//! ```

#![no_main]

use ipns_record::{
    LegacySignaturePolicy, RecordCodec, RecordVerificationApi, RecordVerificationService,
    SystemClock, VerifierConfig,
};
use libfuzzer_sys::fuzz_target;

/// Fuzz input: a record plus the identity it is checked against.
#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    /// Identity token text
    identity: String,
    /// Encoded record bytes
    record: Vec<u8>,
    /// Accept legacy-only records
    accept_legacy: bool,
}

fuzz_target!(|input: FuzzInput| {
    let policy = if input.accept_legacy {
        LegacySignaturePolicy::Accept
    } else {
        LegacySignaturePolicy::Reject
    };

    if let Ok(record) = RecordCodec::decode_with(&input.record, policy) {
        // Re-encoding writes an absent sequence, which can push it past the limit
        let reencoded = RecordCodec::encode(&record);
        let again = RecordCodec::decode_limited(&reencoded, policy, usize::MAX)
            .expect("re-encoded record must decode");
        assert_eq!(again, record);
    }

    let config = VerifierConfig {
        legacy_signatures: policy,
        ..Default::default()
    };
    if let Ok(service) = RecordVerificationService::new(config, SystemClock) {
        let _ = service.verify(&input.identity, &input.record);
    }
});
