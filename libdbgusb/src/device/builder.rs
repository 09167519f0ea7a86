// libdbgusb/src/device/builder.rs

use crate::device::handle::DeviceHandle;
use crate::device::matcher::open_with;
use crate::transport::UsbBus;
use crate::types::{IdTable, UsbId};
use crate::Result;

/// Helper describing which adapter to open.
#[derive(Debug, Clone, Default)]
pub struct AdapterQuery {
    ids: Vec<UsbId>,
    serial: Option<String>,
}

impl AdapterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept devices with this vendor/product id. Order of calls is the
    /// order of the candidate table.
    pub fn id(mut self, vendor_id: u16, product_id: u16) -> Self {
        self.ids.push(UsbId::new(vendor_id, product_id));
        self
    }

    pub fn ids(mut self, ids: &IdTable) -> Self {
        self.ids.extend(ids.iter().copied());
        self
    }

    /// Only accept the device with this exact serial number
    pub fn serial(mut self, serial: impl Into<String>) -> Self {
        self.serial = Some(serial.into());
        self
    }

    pub fn id_table(&self) -> IdTable {
        IdTable::new(&self.ids)
    }

    pub fn serial_filter(&self) -> Option<&str> {
        self.serial.as_deref()
    }

    /// Run the query against `bus`.
    pub fn open_with<B: UsbBus>(&self, bus: B) -> Result<DeviceHandle<B>> {
        open_with(bus, &self.id_table(), self.serial_filter())
    }

    /// Run the query against a fresh libusb context.
    #[cfg(feature = "usb")]
    pub fn open(&self) -> Result<DeviceHandle<crate::transport::RusbBus>> {
        crate::device::matcher::open(&self.id_table(), self.serial_filter())
    }
}
