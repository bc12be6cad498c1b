//! # Adapters Layer
//!
//! Implementations of the outbound ports.

pub mod clock;

pub use clock::{FixedClock, SystemClock};
