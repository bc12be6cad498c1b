//! # Domain Layer
//!
//! Decoding, key resolution, signature and validity checks. Pure functions
//! with no I/O; the inner layer of the hexagonal architecture.

pub mod codec;
pub mod entities;
pub mod errors;
pub mod identity;
pub mod key_resolver;
pub mod payload;
pub mod validity;
pub mod verifier;

#[cfg(test)]
pub mod test_helpers;
