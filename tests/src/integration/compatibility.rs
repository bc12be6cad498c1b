//! # Legacy Signature Compatibility
//!
//! Records signed only over `value || validity` are rejected unless the
//! caller selects `LegacySignaturePolicy::Accept`. The current signature,
//! when present, is the only one ever checked.

#[cfg(test)]
mod tests {
    use crate::fixtures::{default_service, identity_of, keypair, service_with, RecordBuilder};
    use ipns_crypto::KeyType;
    use ipns_record::{
        DecodeError, LegacySignaturePolicy, RecordVerificationApi, SignatureError,
        SignatureScheme, VerificationError, VerifierConfig,
    };

    fn lenient() -> VerifierConfig {
        VerifierConfig {
            legacy_signatures: LegacySignaturePolicy::Accept,
            ..Default::default()
        }
    }

    #[test]
    fn test_legacy_only_rejected_by_default() {
        let signer = keypair(KeyType::Ed25519);
        let bytes = RecordBuilder::new().legacy_only().encode(signer);

        assert_eq!(
            default_service().verify(&identity_of(signer), &bytes),
            Err(VerificationError::Decode(DecodeError::MissingField("signatureV2")))
        );
    }

    #[test]
    fn test_legacy_only_decoded_record_rejected_by_default() {
        let signer = keypair(KeyType::Ed25519);
        let record = RecordBuilder::new().legacy_only().build(signer);

        assert_eq!(
            default_service().verify_record(&identity_of(signer), &record),
            Err(SignatureError::MissingCurrentSignature.into())
        );
    }

    #[test]
    fn test_legacy_only_accepted_when_opted_in() {
        for key_type in [KeyType::Ed25519, KeyType::Secp256k1, KeyType::Rsa] {
            let signer = keypair(key_type);
            let bytes = RecordBuilder::new().legacy_only().encode(signer);

            let verified = service_with(lenient())
                .verify(&identity_of(signer), &bytes)
                .unwrap_or_else(|e| panic!("{key_type}: {e}"));
            assert_eq!(verified.scheme, SignatureScheme::Legacy);
        }
    }

    #[test]
    fn test_dual_signed_uses_current() {
        let signer = keypair(KeyType::Secp256k1);
        let bytes = RecordBuilder::new().dual_signed().encode(signer);

        for config in [VerifierConfig::default(), lenient()] {
            let verified = service_with(config)
                .verify(&identity_of(signer), &bytes)
                .unwrap();
            assert_eq!(verified.scheme, SignatureScheme::Current);
        }
    }

    #[test]
    fn test_legacy_signature_does_not_cover_sequence() {
        // Sequence is outside the legacy payload; only the current scheme binds it
        let signer = keypair(KeyType::Ed25519);
        let mut record = RecordBuilder::new().legacy_only().sequence(1).build(signer);
        record.sequence = 99;

        let verified = service_with(lenient())
            .verify_record(&identity_of(signer), &record)
            .unwrap();
        assert_eq!(verified.sequence, 99);
    }
}
