// libdbgusb/src/device/matcher.rs

//! Locating one adapter among all attached USB devices.

use crate::device::handle::DeviceHandle;
use crate::serial::serial_matches;
use crate::transport::UsbBus;
use crate::types::IdTable;
use crate::{Error, Result};

/// Why a device was passed over during a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The device descriptor could not be read
    DescriptorUnavailable,
    /// vid/pid not in the candidate table
    IdMismatch,
    /// Matched by id but could not be opened
    OpenFailed,
    /// Matched by id but the serial number differs or is unreadable
    SerialMismatch,
}

/// Outcome of examining one enumerated device
pub enum Candidate<H> {
    Accepted(H),
    Rejected(Rejection),
}

/// Examine a single enumerated device. A device that is opened but then
/// rejected is closed before returning.
pub fn examine<B: UsbBus>(
    bus: &mut B,
    device: &B::Device,
    ids: &IdTable,
    serial: Option<&str>,
) -> Candidate<B::Handle> {
    let desc = match bus.device_descriptor(device) {
        Ok(desc) => desc,
        Err(_) => return Candidate::Rejected(Rejection::DescriptorUnavailable),
    };

    if !ids.contains(desc.id()) {
        return Candidate::Rejected(Rejection::IdMismatch);
    }

    let handle = match bus.open(device) {
        Ok(handle) => handle,
        Err(e) => {
            log::error!("opening {} failed: {}", desc.id(), e);
            return Candidate::Rejected(Rejection::OpenFailed);
        }
    };

    // The device must be open before its string descriptors can be read
    if let Some(wanted) = serial {
        if !serial_matches(bus, &handle, &desc, wanted) {
            bus.close(handle);
            return Candidate::Rejected(Rejection::SerialMismatch);
        }
    }

    log::debug!("selected device {}", desc.id());
    Candidate::Accepted(handle)
}

/// Open the first attached device whose id is in `ids` and, if `serial` is
/// given, whose serial number equals it.
///
/// The bus becomes owned by the returned handle. Per-device failures only
/// move the scan on to the next device; `Error::NotFound` is returned when
/// no device qualifies.
pub fn open_with<B: UsbBus>(
    mut bus: B,
    ids: &IdTable,
    serial: Option<&str>,
) -> Result<DeviceHandle<B>> {
    let devices = bus.devices().unwrap_or_else(|e| {
        log::debug!("device enumeration failed: {}", e);
        Vec::new()
    });

    let mut serial_mismatch = false;
    let mut found = None;
    for device in &devices {
        match examine(&mut bus, device, ids, serial) {
            Candidate::Accepted(handle) => {
                found = Some(handle);
                break;
            }
            Candidate::Rejected(Rejection::SerialMismatch) => serial_mismatch = true,
            Candidate::Rejected(_) => {}
        }
    }
    drop(devices);

    match found {
        Some(handle) => Ok(DeviceHandle::new(bus, handle)),
        None => {
            if serial_mismatch {
                log::debug!("No device matches the serial string");
            }
            Err(Error::NotFound)
        }
    }
}

/// Open an adapter through a fresh libusb context.
#[cfg(feature = "usb")]
pub fn open(
    ids: &IdTable,
    serial: Option<&str>,
) -> Result<DeviceHandle<crate::transport::RusbBus>> {
    let bus = crate::transport::RusbBus::new()?;
    open_with(bus, ids, serial)
}
