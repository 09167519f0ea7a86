#![cfg(feature = "usb")]

//! Helpers for tests that run against real adapters.
//!
//! These are compiled with `--features usb` only. When no adapter is
//! attached (CI etc.) the helpers return `Ok(None)` instead of failing.

use libdbgusb::device::{AdapterQuery, DeviceHandle};
use libdbgusb::transport::RusbBus;
use libdbgusb::{Error, Result};

/// ST-Link V2 / V2-1 / V3 product ids
pub const STLINK_PIDS: [u16; 4] = [0x3748, 0x374b, 0x374f, 0x3753];

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Open any attached ST-Link, optionally filtered by the serial in the
/// `STLINK_SERIAL` environment variable.
///
/// - Ok(Some(handle)) : an adapter was found
/// - Ok(None) : nothing attached
/// - Err(e) : any other failure
pub fn open_stlink() -> Result<Option<DeviceHandle<RusbBus>>> {
    let mut query = AdapterQuery::new();
    for pid in STLINK_PIDS {
        query = query.id(0x0483, pid);
    }
    if let Ok(serial) = std::env::var("STLINK_SERIAL") {
        query = query.serial(serial);
    }
    match query.open() {
        Ok(h) => Ok(Some(h)),
        Err(Error::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}
