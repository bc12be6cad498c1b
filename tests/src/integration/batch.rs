//! # Batch Verification
//!
//! Items are verified independently and in parallel; one bad item never
//! affects another, and results keep request order.

#[cfg(test)]
mod tests {
    use crate::fixtures::{default_service, identity_of, keypair, RecordBuilder, ALL_KEY_TYPES};
    use ipns_crypto::KeyType;
    use ipns_record::{BatchItem, BatchVerificationRequest, RecordVerificationApi};

    #[test]
    fn test_mixed_batch() {
        let mut items: Vec<BatchItem> = ALL_KEY_TYPES
            .iter()
            .map(|&key_type| BatchItem {
                identity: identity_of(keypair(key_type)),
                record: RecordBuilder::new().encode(keypair(key_type)),
            })
            .collect();
        // Signed by Ed25519, presented as secp256k1
        items.push(BatchItem {
            identity: identity_of(keypair(KeyType::Secp256k1)),
            record: RecordBuilder::new().encode(keypair(KeyType::Ed25519)),
        });
        items.push(BatchItem {
            identity: "not an identity".into(),
            record: Vec::new(),
        });

        let result = default_service().batch_verify(&BatchVerificationRequest { items });

        assert!(!result.all_valid);
        assert_eq!(result.valid_count, 4);
        assert_eq!(result.invalid_count, 2);
        for (i, key_type) in ALL_KEY_TYPES.iter().enumerate() {
            assert_eq!(result.results[i].as_ref().unwrap().key_type, *key_type);
        }
        assert_eq!(result.results[4].as_ref().unwrap_err().kind(), "SignatureError");
        assert_eq!(result.results[5].as_ref().unwrap_err().kind(), "DecodeError");
    }

    #[test]
    fn test_large_uniform_batch() {
        let signer = keypair(KeyType::Ed25519);
        let items = (0..200u64)
            .map(|sequence| BatchItem {
                identity: identity_of(signer),
                record: RecordBuilder::new().sequence(sequence).encode(signer),
            })
            .collect();

        let result = default_service().batch_verify(&BatchVerificationRequest { items });

        assert!(result.all_valid);
        assert_eq!(result.valid_count, 200);
        for (sequence, outcome) in result.results.iter().enumerate() {
            assert_eq!(outcome.as_ref().unwrap().sequence, sequence as u64);
        }
    }

    #[test]
    fn test_empty_batch() {
        let result = default_service().batch_verify(&BatchVerificationRequest::default());

        assert!(result.all_valid);
        assert_eq!(result.valid_count, 0);
        assert_eq!(result.invalid_count, 0);
    }
}
