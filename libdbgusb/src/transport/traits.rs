// libdbgusb/src/transport/traits.rs

use std::time::Duration;

use crate::transport::descriptor::{ConfigDescriptor, DeviceDescriptor};
use crate::Result;

/// Result of a bulk transfer: the byte count the bus reported together with
/// its status. A failed transfer may still have moved some bytes.
#[derive(Debug)]
pub struct TransferOutcome {
    pub transferred: usize,
    pub status: Result<()>,
}

impl TransferOutcome {
    pub fn ok(transferred: usize) -> Self {
        Self {
            transferred,
            status: Ok(()),
        }
    }
}

/// UsbBus abstracts the host USB library away from matching and selection
/// logic. One value of an implementing type is one library context.
pub trait UsbBus {
    /// An enumerated, not yet opened, device
    type Device;
    /// An open device
    type Handle;

    /// Snapshot of all attached devices, in enumeration order.
    fn devices(&mut self) -> Result<Vec<Self::Device>>;

    /// Read the device descriptor of an enumerated device
    fn device_descriptor(&self, device: &Self::Device) -> Result<DeviceDescriptor>;

    fn open(&mut self, device: &Self::Device) -> Result<Self::Handle>;

    /// Close an open device. The handle is consumed.
    fn close(&mut self, handle: Self::Handle);

    /// Read the device descriptor of an open device
    fn handle_descriptor(&self, handle: &Self::Handle) -> Result<DeviceDescriptor>;

    /// Read a string descriptor without decoding it. Returns the number of
    /// bytes written to `buf`.
    fn read_string_descriptor(
        &mut self,
        handle: &Self::Handle,
        index: u8,
        lang_id: u16,
        buf: &mut [u8],
    ) -> Result<usize>;

    /// Read a string descriptor converted to ASCII by the library.
    fn read_string_ascii(&mut self, handle: &Self::Handle, index: u8) -> Result<String>;

    fn active_config_descriptor(&self, handle: &Self::Handle) -> Result<ConfigDescriptor>;

    fn config_descriptor(&self, handle: &Self::Handle, index: u8) -> Result<ConfigDescriptor>;

    /// bConfigurationValue of the active configuration
    fn active_configuration(&self, handle: &Self::Handle) -> Result<u8>;

    fn set_configuration(&mut self, handle: &mut Self::Handle, value: u8) -> Result<()>;

    fn claim_interface(&mut self, handle: &mut Self::Handle, interface: u8) -> Result<()>;

    fn release_interface(&mut self, handle: &mut Self::Handle, interface: u8) -> Result<()>;

    /// Issue a control transfer. Bit 7 of `request_type` selects the
    /// direction: device-to-host fills `buf`, host-to-device sends it.
    #[allow(clippy::too_many_arguments)]
    fn control_transfer(
        &mut self,
        handle: &mut Self::Handle,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        buf: &mut [u8],
        timeout: Duration,
    ) -> Result<usize>;

    /// Issue a bulk transfer. The endpoint address direction bit selects
    /// read (IN) or write (OUT).
    fn bulk_transfer(
        &mut self,
        handle: &mut Self::Handle,
        endpoint: u8,
        buf: &mut [u8],
        timeout: Duration,
    ) -> TransferOutcome;
}
