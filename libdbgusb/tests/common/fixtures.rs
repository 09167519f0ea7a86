// fixtures.rs: commonly used simulated adapters and descriptors

use libdbgusb::test_support;
use libdbgusb::transport::descriptor::{ConfigDescriptor, InterfaceDescriptor};
use libdbgusb::transport::mock::MockDevice;
use libdbgusb::types::{IdTable, UsbId};

pub const STLINK_V2: UsbId = UsbId::new(0x0483, 0x3748);
pub const STLINK_V2_1: UsbId = UsbId::new(0x0483, 0x374b);
pub const JLINK: UsbId = UsbId::new(0x1366, 0x0101);

pub fn stlink_table() -> IdTable {
    IdTable::from_terminated(
        &[STLINK_V2.vendor_id, STLINK_V2_1.vendor_id, 0],
        &[STLINK_V2.product_id, STLINK_V2_1.product_id, 0],
    )
}

pub fn legacy_serial_bytes() -> [u8; 12] {
    [0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0, 0x11, 0x22, 0x33, 0x44]
}

pub const LEGACY_SERIAL: &str = "123456789ABCDEF011223344";
pub const MODERN_SERIAL: &[u8; 24] = b"0670FF484957847167071621";

/// ST-Link with the legacy serial layout and a vendor bulk interface
pub fn legacy_stlink() -> MockDevice {
    test_support::bulk_adapter(STLINK_V2.vendor_id, STLINK_V2.product_id)
        .with_raw_serial(test_support::stlink_legacy_serial(legacy_serial_bytes()))
}

/// ST-Link with the current serial layout
pub fn modern_stlink(serial: &[u8; 24]) -> MockDevice {
    test_support::bulk_adapter(STLINK_V2_1.vendor_id, STLINK_V2_1.product_id)
        .with_raw_serial(test_support::stlink_serial(serial))
}

/// Composite CMSIS-DAP style device: HID interface first, then a vendor
/// bulk interface, then a CDC data interface.
pub fn composite_adapter(id: UsbId, serial: &str) -> MockDevice {
    MockDevice::new(id.vendor_id, id.product_id)
        .with_serial(serial)
        .with_config(
            ConfigDescriptor::new(1)
                .with_interface(
                    InterfaceDescriptor::new(0, 0x03, 0x00, 0x00)
                        .with_endpoint(0x81, 0x03)
                        .with_endpoint(0x01, 0x03),
                )
                .with_interface(
                    InterfaceDescriptor::new(1, 0xff, 0x00, 0x00)
                        .with_endpoint(0x02, 0x02)
                        .with_endpoint(0x82, 0x02)
                        .with_endpoint(0x83, 0x02),
                )
                .with_interface(
                    InterfaceDescriptor::new(2, 0x0a, 0x00, 0x00)
                        .with_endpoint(0x84, 0x02)
                        .with_endpoint(0x04, 0x02),
                ),
        )
}
