//! # Validity Window
//!
//! EOL parsing, TTL pass-through and opt-in expiry enforcement, end to end.

#[cfg(test)]
mod tests {
    use crate::fixtures::{default_service, identity_of, keypair, RecordBuilder};
    use chrono::{TimeZone, Utc};
    use ipns_crypto::KeyType;
    use ipns_record::{
        FixedClock, RecordVerificationApi, RecordVerificationService, ValidityError,
        ValidityType, VerificationError, VerifierConfig,
    };
    use std::time::Duration;

    fn verify_validity(validity: &str) -> Result<chrono::DateTime<Utc>, VerificationError> {
        let signer = keypair(KeyType::Ed25519);
        let bytes = RecordBuilder::new().validity(validity).encode(signer);
        default_service()
            .verify(&identity_of(signer), &bytes)
            .map(|v| v.eol)
    }

    #[test]
    fn test_timestamp_forms() {
        let expected = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(verify_validity("2030-01-01T00:00:00Z"), Ok(expected));
        assert_eq!(verify_validity("2030-01-01T05:30:00+05:30"), Ok(expected));
        assert_eq!(verify_validity("2029-12-31T19:00:00-05:00"), Ok(expected));
        assert_eq!(
            verify_validity("2030-01-01T00:00:00.000000001Z"),
            Ok(expected + chrono::Duration::nanoseconds(1))
        );
    }

    #[test]
    fn test_signed_garbage_validity() {
        for text in ["", "next tuesday", "2030-02-30T00:00:00Z", "1893456000"] {
            assert!(
                matches!(
                    verify_validity(text),
                    Err(VerificationError::Validity(ValidityError::Unparsable { .. }))
                ),
                "{text:?}"
            );
        }
    }

    #[test]
    fn test_signed_unknown_validity_type() {
        let signer = keypair(KeyType::Ed25519);
        let bytes = RecordBuilder::new()
            .validity_type(ValidityType::Unrecognized(1))
            .encode(signer);

        assert_eq!(
            default_service().verify(&identity_of(signer), &bytes),
            Err(ValidityError::UnrecognizedType(1).into())
        );
    }

    #[test]
    fn test_ttl_is_independent_of_eol() {
        // TTL far beyond EOL is still reported verbatim
        let signer = keypair(KeyType::Ed25519);
        let bytes = RecordBuilder::new()
            .validity("2000-01-01T00:00:00Z")
            .ttl(u64::MAX)
            .encode(signer);

        let verified = default_service()
            .verify(&identity_of(signer), &bytes)
            .unwrap();
        assert_eq!(verified.ttl, Some(Duration::from_nanos(u64::MAX)));
        assert_eq!(verified.ttl_nanos(), Some(u64::MAX));
    }

    #[test]
    fn test_expired_record_only_fails_when_enforced() {
        let signer = keypair(KeyType::Ed25519);
        let bytes = RecordBuilder::new()
            .validity("2000-01-01T00:00:00Z")
            .encode(signer);
        let now = FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

        assert!(default_service()
            .verify(&identity_of(signer), &bytes)
            .is_ok());

        let strict = RecordVerificationService::new(
            VerifierConfig {
                reject_expired: true,
                ..Default::default()
            },
            now,
        )
        .unwrap();
        assert_eq!(
            strict.verify(&identity_of(signer), &bytes),
            Err(ValidityError::Expired {
                eol: "2000-01-01T00:00:00Z".into()
            }
            .into())
        );
    }
}
