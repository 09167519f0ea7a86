// libdbgusb/src/serial/mod.rs

//! Serial number resolution for opened devices.
//!
//! How a device's serial descriptor must be read depends on its vendor:
//! ST-Link adapters need their raw descriptor decoded, everyone else uses
//! the library's ASCII string conversion.

mod stlink;

pub use stlink::decode_stlink_serial;

use crate::constants::{LANG_ID_EN_US, SERIAL_DESCRIPTOR_READ_LEN, STLINK_VENDOR_ID};
use crate::transport::{DeviceDescriptor, UsbBus};
use crate::types::SerialString;
use crate::{Error, Result};

/// Serial descriptor encodings, selected by vendor id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialEncoding {
    /// Raw descriptor in one of the two ST-Link layouts
    StLink,
    /// Standard string descriptor
    Ascii,
}

impl SerialEncoding {
    pub fn for_vendor(vendor_id: u16) -> Self {
        match vendor_id {
            STLINK_VENDOR_ID => Self::StLink,
            _ => Self::Ascii,
        }
    }
}

/// Read and decode the serial number of an open device.
///
/// Returns `Error::NotFound` when the device declares no serial string.
pub fn read_serial<B: UsbBus>(
    bus: &mut B,
    handle: &B::Handle,
    desc: &DeviceDescriptor,
) -> Result<SerialString> {
    let index = desc.serial_number_index.ok_or(Error::NotFound)?;

    match SerialEncoding::for_vendor(desc.vendor_id) {
        SerialEncoding::StLink => {
            let mut raw = [0u8; SERIAL_DESCRIPTOR_READ_LEN];
            let n = bus.read_string_descriptor(handle, index, LANG_ID_EN_US, &mut raw)?;
            #[cfg(feature = "diagnostics")]
            log::trace!(
                "serial descriptor of {}: {}",
                desc.id(),
                crate::utils::bytes_to_hex_spaced(&raw[..n])
            );
            decode_stlink_serial(&raw[..n])
        }
        SerialEncoding::Ascii => Ok(SerialString::from(bus.read_string_ascii(handle, index)?)),
    }
}

/// True when the device's serial number equals `wanted` exactly. Read and
/// decode failures are logged and count as a mismatch.
pub fn serial_matches<B: UsbBus>(
    bus: &mut B,
    handle: &B::Handle,
    desc: &DeviceDescriptor,
    wanted: &str,
) -> bool {
    if desc.serial_number_index.is_none() {
        log::debug!("device {} has no serial number string", desc.id());
        return false;
    }

    match read_serial(bus, handle, desc) {
        Ok(serial) if serial.matches(wanted) => true,
        Ok(serial) => {
            log::debug!(
                "Device serial number '{}' doesn't match requested serial '{}'",
                serial,
                wanted
            );
            false
        }
        Err(e) => {
            log::error!("reading serial number of {} failed: {}", desc.id(), e);
            false
        }
    }
}
