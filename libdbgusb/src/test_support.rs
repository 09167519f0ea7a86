//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockBus setup so tests across the crate
//! and the tests/ directory build simulated adapters the same way.
#![allow(dead_code)]

use crate::transport::descriptor::{ConfigDescriptor, InterfaceDescriptor};
use crate::transport::mock::{MockBus, MockDevice};
use crate::constants::{STLINK_LEGACY_SERIAL_LEN, STLINK_SERIAL_LEN};

/// Raw legacy ST-Link serial descriptor carrying `bytes`.
#[doc(hidden)]
pub fn stlink_legacy_serial(bytes: [u8; 12]) -> Vec<u8> {
    let mut raw = vec![STLINK_LEGACY_SERIAL_LEN, 0x03];
    for b in bytes {
        raw.extend_from_slice(&[b, 0x00]);
    }
    raw
}

/// Raw current ST-Link serial descriptor carrying `text`.
#[doc(hidden)]
pub fn stlink_serial(text: &[u8; 24]) -> Vec<u8> {
    let mut raw = vec![STLINK_SERIAL_LEN, 0x03];
    for &c in text {
        raw.extend_from_slice(&[c, 0x00]);
    }
    raw
}

/// A single-configuration vendor interface with one bulk IN and one bulk
/// OUT endpoint, the layout most debug probes use.
#[doc(hidden)]
pub fn bulk_config(interface: u8, read_ep: u8, write_ep: u8) -> ConfigDescriptor {
    ConfigDescriptor::new(1).with_interface(
        InterfaceDescriptor::new(interface, 0xff, 0xff, 0xff)
            .with_endpoint(read_ep, 0x02)
            .with_endpoint(write_ep, 0x02),
    )
}

/// Simulated adapter with a bulk interface 0 (eps 0x81/0x01).
#[doc(hidden)]
pub fn bulk_adapter(vendor_id: u16, product_id: u16) -> MockDevice {
    MockDevice::new(vendor_id, product_id).with_config(bulk_config(0, 0x81, 0x01))
}

/// Bus with the given devices attached.
#[doc(hidden)]
pub fn bus_with(devices: Vec<MockDevice>) -> MockBus {
    MockBus::new(devices)
}
