// libdbgusb/src/lib.rs

//! libdbgusb
//!
//! USB adapter discovery for hardware debug probes: find one device by
//! vendor/product id and serial number, pick its bulk endpoint pair and
//! drive control/bulk transfers on it.

pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod serial;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the value types are available for consumers and for `prelude`.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
