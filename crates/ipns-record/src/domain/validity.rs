//! # Validity Window
//!
//! EOL parsing, the TTL hint, and optional expiry enforcement. TTL is
//! advisory and never compared against EOL.

use super::entities::{Record, ValidityType};
use super::errors::ValidityError;
use chrono::{DateTime, SecondsFormat, Utc};
use std::time::Duration;

/// End of life of `record`.
///
/// Accepts RFC 3339 with `Z` or a numeric offset and up to nanosecond
/// fractional seconds; the result is normalized to UTC.
pub fn compute_eol(record: &Record) -> Result<DateTime<Utc>, ValidityError> {
    if let ValidityType::Unrecognized(other) = record.validity_type {
        return Err(ValidityError::UnrecognizedType(other));
    }

    let text = std::str::from_utf8(&record.validity).map_err(|_| ValidityError::NotUtf8)?;
    DateTime::parse_from_rfc3339(text)
        .map(|eol| eol.with_timezone(&Utc))
        .map_err(|e| ValidityError::Unparsable {
            text: text.to_string(),
            reason: e.to_string(),
        })
}

/// Cache hint carried by the record, if any.
pub fn ttl_hint(record: &Record) -> Option<Duration> {
    record.ttl.map(Duration::from_nanos)
}

/// Render a timestamp the way records carry it: RFC 3339, UTC `Z`, fractional
/// seconds only when non-zero.
pub fn format_validity(eol: DateTime<Utc>) -> String {
    eol.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Fail if `eol` is earlier than `now`. A record is still live at its EOL.
pub fn check_not_expired(eol: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), ValidityError> {
    if eol < now {
        return Err(ValidityError::Expired {
            eol: format_validity(eol),
        });
    }
    Ok(())
}
