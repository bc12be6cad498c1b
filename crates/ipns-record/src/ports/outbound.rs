//! # Outbound Ports (Driven Ports / SPI)
//!
//! Dependencies the verifier needs from its environment.

use chrono::{DateTime, Utc};

/// Source of the current time, consulted only for expiry enforcement.
pub trait Clock: Send + Sync {
    /// Current time.
    fn now(&self) -> DateTime<Utc>;
}
