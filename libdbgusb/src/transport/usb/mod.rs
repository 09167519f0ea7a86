// libdbgusb/src/transport/usb/mod.rs

#![cfg(feature = "usb")]

use std::time::Duration;

use rusb::{Context, Device, DeviceHandle, UsbContext};

use crate::constants::{
    DESCRIPTOR_TYPE_STRING, ENDPOINT_DIR_IN, REQUEST_DIR_IN, REQUEST_GET_DESCRIPTOR,
};
use crate::transport::descriptor::{ConfigDescriptor, DeviceDescriptor};
use crate::transport::traits::{TransferOutcome, UsbBus};
use crate::{Error, Result};

mod descriptor;
use descriptor::{config_snapshot, read_device_descriptor};

/// libusb-1.0 backed bus. Each value owns its own libusb context, so the
/// context lives exactly as long as the handle opened through it.
pub struct RusbBus {
    context: Context,
}

impl RusbBus {
    /// Create a fresh libusb context.
    pub fn new() -> Result<Self> {
        let context = Context::new().map_err(|e| Error::Init(e.to_string()))?;
        Ok(Self { context })
    }

    pub fn context(&self) -> &Context {
        &self.context
    }
}

impl UsbBus for RusbBus {
    type Device = Device<Context>;
    type Handle = DeviceHandle<Context>;

    fn devices(&mut self) -> Result<Vec<Device<Context>>> {
        // The libusb list is released when `list` goes out of scope; the
        // collected devices hold their own references.
        let list = self.context.devices()?;
        Ok(list.iter().collect())
    }

    fn device_descriptor(&self, device: &Device<Context>) -> Result<DeviceDescriptor> {
        Ok(read_device_descriptor(device)?)
    }

    fn open(&mut self, device: &Device<Context>) -> Result<DeviceHandle<Context>> {
        Ok(device.open()?)
    }

    fn close(&mut self, handle: DeviceHandle<Context>) {
        drop(handle);
    }

    fn handle_descriptor(&self, handle: &DeviceHandle<Context>) -> Result<DeviceDescriptor> {
        Ok(read_device_descriptor(&handle.device())?)
    }

    fn read_string_descriptor(
        &mut self,
        handle: &DeviceHandle<Context>,
        index: u8,
        lang_id: u16,
        buf: &mut [u8],
    ) -> Result<usize> {
        // Plain GET_DESCRIPTOR so the raw bytes reach the caller undecoded
        let value = (u16::from(DESCRIPTOR_TYPE_STRING) << 8) | u16::from(index);
        let n = handle.read_control(
            REQUEST_DIR_IN,
            REQUEST_GET_DESCRIPTOR,
            value,
            lang_id,
            buf,
            crate::utils::ms(crate::utils::DESCRIPTOR_TIMEOUT_MS),
        )?;
        Ok(n)
    }

    fn read_string_ascii(&mut self, handle: &DeviceHandle<Context>, index: u8) -> Result<String> {
        Ok(handle.read_string_descriptor_ascii(index)?)
    }

    fn active_config_descriptor(&self, handle: &DeviceHandle<Context>) -> Result<ConfigDescriptor> {
        let config = handle.device().active_config_descriptor()?;
        Ok(config_snapshot(&config))
    }

    fn config_descriptor(
        &self,
        handle: &DeviceHandle<Context>,
        index: u8,
    ) -> Result<ConfigDescriptor> {
        let config = handle.device().config_descriptor(index)?;
        Ok(config_snapshot(&config))
    }

    fn active_configuration(&self, handle: &DeviceHandle<Context>) -> Result<u8> {
        Ok(handle.active_configuration()?)
    }

    fn set_configuration(&mut self, handle: &mut DeviceHandle<Context>, value: u8) -> Result<()> {
        Ok(handle.set_active_configuration(value)?)
    }

    fn claim_interface(&mut self, handle: &mut DeviceHandle<Context>, interface: u8) -> Result<()> {
        Ok(handle.claim_interface(interface)?)
    }

    fn release_interface(
        &mut self,
        handle: &mut DeviceHandle<Context>,
        interface: u8,
    ) -> Result<()> {
        Ok(handle.release_interface(interface)?)
    }

    fn control_transfer(
        &mut self,
        handle: &mut DeviceHandle<Context>,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        buf: &mut [u8],
        timeout: Duration,
    ) -> Result<usize> {
        let n = if request_type & REQUEST_DIR_IN != 0 {
            handle.read_control(request_type, request, value, index, buf, timeout)?
        } else {
            handle.write_control(request_type, request, value, index, buf, timeout)?
        };
        Ok(n)
    }

    fn bulk_transfer(
        &mut self,
        handle: &mut DeviceHandle<Context>,
        endpoint: u8,
        buf: &mut [u8],
        timeout: Duration,
    ) -> TransferOutcome {
        let result = if endpoint & ENDPOINT_DIR_IN != 0 {
            handle.read_bulk(endpoint, buf, timeout)
        } else {
            handle.write_bulk(endpoint, buf, timeout)
        };
        // rusb drops the partial count on failure
        match result {
            Ok(n) => TransferOutcome::ok(n),
            Err(e) => TransferOutcome {
                transferred: 0,
                status: Err(e.into()),
            },
        }
    }
}
