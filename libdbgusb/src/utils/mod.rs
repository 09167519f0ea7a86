//! Utilities for libdbgusb: small, reusable helpers used across the crate.
//!
//! Bit-vector primitives (used to track claimed interfaces), hex rendering
//! for serial numbers and log lines, and timeout conversion.

pub mod bits;
pub mod hex;
pub mod timeout;

pub use bits::Bitmap;
pub use hex::*;
pub use timeout::*;
