//! # Reference Scenarios
//!
//! 1. **Compact key, no embedded key**: the identity inlines the key
//! 2. **Large key, embedded key**: RSA identity with matching `publicKey`
//! 3. **Large key, foreign embedded key**: `publicKey` hashes elsewhere
//! 4. **Round trip per key type**: sign, encode, verify, compare fields
//! 5. **Identity forms**: the same records named by base36 and base32 CIDs

#[cfg(test)]
mod tests {
    use crate::fixtures::{
        default_service, identity_of, keypair, RecordBuilder, ALL_KEY_TYPES, DEFAULT_VALIDITY,
    };
    use chrono::{DateTime, TimeZone, Utc};
    use ipns_crypto::signing::test_keys;
    use ipns_crypto::KeyType;
    use ipns_record::{
        KeyResolutionError, RecordVerificationApi, SignatureScheme, VerificationError,
    };
    use std::time::Duration;

    // =============================================================================
    // SCENARIO A: COMPACT-CURVE IDENTITY
    // =============================================================================

    #[test]
    fn test_scenario_a_inline_identity() {
        let signer = keypair(KeyType::Ed25519);
        let bytes = RecordBuilder::new()
            .value("target-A")
            .validity("2030-01-01T00:00:00Z")
            .sequence(1)
            .encode(signer);

        let verified = default_service()
            .verify(&identity_of(signer), &bytes)
            .unwrap();

        assert_eq!(verified.value, b"target-A");
        assert_eq!(
            verified.eol,
            Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(verified.ttl, None);
        assert_eq!(verified.sequence, 1);
    }

    #[test]
    fn test_scenario_a_with_namespace_prefix() {
        let signer = keypair(KeyType::Secp256k1);
        let bytes = RecordBuilder::new().value("target-A").encode(signer);

        let identity = format!("/ipns/{}", identity_of(signer));
        assert!(default_service().verify(&identity, &bytes).is_ok());
    }

    // =============================================================================
    // SCENARIO B: EMBEDDED RSA KEY
    // =============================================================================

    #[test]
    fn test_scenario_b_embedded_key() {
        let signer = keypair(KeyType::Rsa);
        let record = RecordBuilder::new().value("target-B").build(signer);
        assert!(record.public_key.is_some());

        let verified = default_service()
            .verify_record(&identity_of(signer), &record)
            .unwrap();

        assert_eq!(verified.key_type, KeyType::Rsa);
        assert_eq!(verified.signer, identity_of(signer));
    }

    // =============================================================================
    // SCENARIO C: FOREIGN EMBEDDED KEY
    // =============================================================================

    #[test]
    fn test_scenario_c_foreign_key() {
        let signer = keypair(KeyType::Rsa);
        let foreign = test_keys::rsa_2048_alt();
        let bytes = RecordBuilder::new()
            .with_key_bytes(foreign.public().unwrap().to_protobuf())
            .encode(signer);

        assert_eq!(
            default_service().verify(&identity_of(signer), &bytes),
            Err(VerificationError::KeyResolution(KeyResolutionError::KeyMismatch))
        );
    }

    #[test]
    fn test_scenario_c_record_fully_signed_by_foreign_key() {
        // A validly signed record from another key, presented under our identity
        let owner = keypair(KeyType::Rsa);
        let attacker = test_keys::rsa_2048_alt();
        let bytes = RecordBuilder::new().encode(attacker);

        let err = default_service()
            .verify(&identity_of(owner), &bytes)
            .unwrap_err();
        assert_eq!(err.kind(), "KeyResolutionError");
    }

    // =============================================================================
    // ROUND TRIP PER KEY TYPE
    // =============================================================================

    #[test]
    fn test_every_key_type_verifies() {
        let eol: DateTime<Utc> = "2031-07-04T10:20:30.5Z".parse().unwrap();

        for key_type in ALL_KEY_TYPES {
            let signer = keypair(key_type);
            let bytes = RecordBuilder::new()
                .value(format!("/ipfs/{key_type}"))
                .validity("2031-07-04T10:20:30.5Z")
                .sequence(u64::MAX)
                .ttl(30_000_000_000)
                .encode(signer);

            let verified = default_service()
                .verify(&identity_of(signer), &bytes)
                .unwrap_or_else(|e| panic!("{key_type}: {e}"));

            assert_eq!(verified.value, format!("/ipfs/{key_type}").into_bytes());
            assert_eq!(verified.eol, eol);
            assert_eq!(verified.ttl, Some(Duration::from_secs(30)));
            assert_eq!(verified.sequence, u64::MAX);
            assert_eq!(verified.key_type, key_type);
            assert_eq!(verified.scheme, SignatureScheme::Current);
        }
    }

    #[test]
    fn test_embedded_key_alongside_inline_identity() {
        let signer = keypair(KeyType::Ed25519);
        let bytes = RecordBuilder::new().with_embedded_key().encode(signer);

        assert!(default_service()
            .verify(&identity_of(signer), &bytes)
            .is_ok());
    }

    #[test]
    fn test_hashed_identity_without_embedded_key() {
        let signer = keypair(KeyType::Ecdsa);
        let bytes = RecordBuilder::new().without_key().encode(signer);

        assert_eq!(
            default_service().verify(&identity_of(signer), &bytes),
            Err(KeyResolutionError::NoKeySource.into())
        );
    }

    #[test]
    fn test_default_validity_constant() {
        let verified = default_service()
            .verify(
                &identity_of(keypair(KeyType::Ed25519)),
                &RecordBuilder::new().encode(keypair(KeyType::Ed25519)),
            )
            .unwrap();

        assert_eq!(
            ipns_record::format_validity(verified.eol),
            DEFAULT_VALIDITY
        );
    }

    // =============================================================================
    // IDENTITY TEXT FORMS
    // =============================================================================

    #[test]
    fn test_cid_identity_forms_per_key_type() {
        for key_type in ALL_KEY_TYPES {
            let signer = keypair(key_type);
            let bytes = RecordBuilder::new().encode(signer);
            let mut cid = vec![0x01, 0x72];
            cid.extend(bs58::decode(identity_of(signer)).into_vec().unwrap());

            for base in [multibase::Base::Base36Lower, multibase::Base::Base32Lower] {
                let identity = format!("/ipns/{}", multibase::encode(base, &cid));
                let verified = default_service().verify(&identity, &bytes);
                assert!(verified.is_ok(), "{key_type} {identity}: {verified:?}");
            }
        }
    }
}
