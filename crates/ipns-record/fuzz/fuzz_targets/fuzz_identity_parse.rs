//! Fuzz target for identity token parsing.
//!
//! ## Running
//!
//! ```bash
//! cd crates/ipns-record
//! cargo +nightly fuzz run fuzz_identity_parse
//! ```

#![no_main]

use ipns_record::{parse_identity, resolve_identity};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|token: &str| {
    let parsed = parse_identity(token);
    let resolved = resolve_identity(token);

    // Resolution only adds key extraction on top of parsing
    match (&parsed, &resolved) {
        (Ok(multihash), Ok(identity)) => {
            assert_eq!(multihash, &identity.multihash);
            assert_eq!(identity.public_key.is_some(), multihash.is_inline());
        }
        (Err(_), Ok(_)) => panic!("resolved an unparsable identity"),
        _ => {}
    }
});
