//! Timeout helpers used across the crate.
//!
//! Transfer primitives take a `Duration`; callers coming from millisecond
//! based configuration can use these helpers.

use std::time::Duration;

/// Timeout used for descriptor reads performed during matching.
pub const DESCRIPTOR_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
