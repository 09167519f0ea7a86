// libdbgusb/src/transport/mock.rs

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use crate::constants::{DESCRIPTOR_TYPE_STRING, ENDPOINT_DIR_IN, REQUEST_DIR_IN};
use crate::transport::descriptor::{ConfigDescriptor, DeviceDescriptor};
use crate::transport::traits::{TransferOutcome, UsbBus};
use crate::{Error, Result};

/// Encode `s` as a standard UTF-16LE string descriptor.
pub fn string_descriptor(s: &str) -> Vec<u8> {
    let mut out = vec![0u8, DESCRIPTOR_TYPE_STRING];
    for unit in s.encode_utf16() {
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out[0] = out.len() as u8;
    out
}

/// Simulated device attached to a MockBus.
#[derive(Debug, Clone, Default)]
pub struct MockDevice {
    pub descriptor: DeviceDescriptor,
    /// Testing hook: device_descriptor fails for this device
    pub descriptor_error: bool,
    /// Testing hook: open fails for this device
    pub open_error: bool,
    /// Testing hook: claim_interface fails for this device
    pub claim_error: bool,
    /// Raw string descriptors by index
    pub strings: HashMap<u8, Vec<u8>>,
    /// Configuration descriptors by index
    pub configs: Vec<ConfigDescriptor>,
    /// bConfigurationValue currently active
    pub active_config: u8,
    /// Queued payloads returned by bulk and control IN transfers
    pub responses: VecDeque<Vec<u8>>,
    /// Testing hook: next bulk transfer fails after moving this many bytes
    pub bulk_failure: Option<usize>,
    /// Testing hook: control transfers fail
    pub control_error: bool,
}

impl MockDevice {
    pub fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            descriptor: DeviceDescriptor::new(vendor_id, product_id),
            ..Default::default()
        }
    }

    /// Attach a raw serial string descriptor at index 3.
    pub fn with_raw_serial(mut self, raw: Vec<u8>) -> Self {
        self.descriptor.serial_number_index = Some(3);
        self.strings.insert(3, raw);
        self
    }

    /// Attach a standard UTF-16 serial string descriptor at index 3.
    pub fn with_serial(self, serial: &str) -> Self {
        self.with_raw_serial(string_descriptor(serial))
    }

    /// Add a configuration. The first one added becomes active.
    pub fn with_config(mut self, config: ConfigDescriptor) -> Self {
        if self.configs.is_empty() {
            self.active_config = config.number;
        }
        self.configs.push(config);
        self
    }

    pub fn with_descriptor_error(mut self) -> Self {
        self.descriptor_error = true;
        self
    }

    pub fn with_open_error(mut self) -> Self {
        self.open_error = true;
        self
    }

    pub fn with_claim_error(mut self) -> Self {
        self.claim_error = true;
        self
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(resp);
    }
}

/// Handle into a MockBus device
#[derive(Debug, PartialEq, Eq)]
pub struct MockHandle {
    pub index: usize,
}

/// A recorded control transfer: (request_type, request, value, index, data)
pub type ControlCall = (u8, u8, u16, u16, Vec<u8>);

/// Mock bus for unit tests. Devices are addressed by their index in
/// `devices`; every state-changing call is recorded for assertions.
#[derive(Debug, Default)]
pub struct MockBus {
    pub devices: Vec<MockDevice>,
    /// Testing hook: enumeration fails
    pub enumerate_error: bool,
    pub opened: Vec<usize>,
    pub closed: Vec<usize>,
    pub claimed: Vec<(usize, u8)>,
    pub released: Vec<(usize, u8)>,
    pub set_config_calls: Vec<(usize, u8)>,
    pub string_reads: Vec<(usize, u8)>,
    pub control_calls: Vec<ControlCall>,
    /// Bulk OUT payloads: (endpoint, data)
    pub bulk_writes: Vec<(u8, Vec<u8>)>,
}

impl MockBus {
    pub fn new(devices: Vec<MockDevice>) -> Self {
        Self {
            devices,
            ..Default::default()
        }
    }

    /// Indices opened and not yet closed
    pub fn open_handles(&self) -> Vec<usize> {
        let mut open = self.opened.clone();
        for idx in &self.closed {
            if let Some(pos) = open.iter().position(|o| o == idx) {
                open.remove(pos);
            }
        }
        open
    }

    fn device(&self, index: usize) -> Result<&MockDevice> {
        self.devices
            .get(index)
            .ok_or_else(|| Error::Transport(format!("no such device {}", index)))
    }

    fn device_mut(&mut self, index: usize) -> Result<&mut MockDevice> {
        self.devices
            .get_mut(index)
            .ok_or_else(|| Error::Transport(format!("no such device {}", index)))
    }
}

impl UsbBus for MockBus {
    type Device = usize;
    type Handle = MockHandle;

    fn devices(&mut self) -> Result<Vec<usize>> {
        if self.enumerate_error {
            return Err(Error::Transport("enumeration failed".into()));
        }
        Ok((0..self.devices.len()).collect())
    }

    fn device_descriptor(&self, device: &usize) -> Result<DeviceDescriptor> {
        let dev = self.device(*device)?;
        if dev.descriptor_error {
            return Err(Error::Transport("descriptor unavailable".into()));
        }
        Ok(dev.descriptor)
    }

    fn open(&mut self, device: &usize) -> Result<MockHandle> {
        if self.device(*device)?.open_error {
            return Err(Error::Transport("access denied".into()));
        }
        self.opened.push(*device);
        Ok(MockHandle { index: *device })
    }

    fn close(&mut self, handle: MockHandle) {
        self.closed.push(handle.index);
    }

    fn handle_descriptor(&self, handle: &MockHandle) -> Result<DeviceDescriptor> {
        Ok(self.device(handle.index)?.descriptor)
    }

    fn read_string_descriptor(
        &mut self,
        handle: &MockHandle,
        index: u8,
        _lang_id: u16,
        buf: &mut [u8],
    ) -> Result<usize> {
        self.string_reads.push((handle.index, index));
        let raw = self
            .device(handle.index)?
            .strings
            .get(&index)
            .ok_or_else(|| Error::Transport(format!("no string descriptor {}", index)))?;
        let n = raw.len().min(buf.len());
        buf[..n].copy_from_slice(&raw[..n]);
        Ok(n)
    }

    fn read_string_ascii(&mut self, handle: &MockHandle, index: u8) -> Result<String> {
        let mut buf = [0u8; 255];
        let n = self.read_string_descriptor(handle, index, 0, &mut buf)?;
        let declared = usize::from(buf[0]).min(n);
        // Same conversion libusb performs: non-ASCII code units become '?'
        Ok(buf[2.min(declared)..declared]
            .chunks_exact(2)
            .map(|unit| match (unit[0], unit[1]) {
                (lo, 0) if lo < 0x80 => char::from(lo),
                _ => '?',
            })
            .collect())
    }

    fn active_config_descriptor(&self, handle: &MockHandle) -> Result<ConfigDescriptor> {
        let dev = self.device(handle.index)?;
        dev.configs
            .iter()
            .find(|c| c.number == dev.active_config)
            .cloned()
            .ok_or_else(|| Error::Transport("device is unconfigured".into()))
    }

    fn config_descriptor(&self, handle: &MockHandle, index: u8) -> Result<ConfigDescriptor> {
        self.device(handle.index)?
            .configs
            .get(usize::from(index))
            .cloned()
            .ok_or_else(|| Error::Transport(format!("no configuration {}", index)))
    }

    fn active_configuration(&self, handle: &MockHandle) -> Result<u8> {
        Ok(self.device(handle.index)?.active_config)
    }

    fn set_configuration(&mut self, handle: &mut MockHandle, value: u8) -> Result<()> {
        self.set_config_calls.push((handle.index, value));
        self.device_mut(handle.index)?.active_config = value;
        Ok(())
    }

    fn claim_interface(&mut self, handle: &mut MockHandle, interface: u8) -> Result<()> {
        if self.device(handle.index)?.claim_error {
            return Err(Error::Transport("interface busy".into()));
        }
        self.claimed.push((handle.index, interface));
        Ok(())
    }

    fn release_interface(&mut self, handle: &mut MockHandle, interface: u8) -> Result<()> {
        self.released.push((handle.index, interface));
        Ok(())
    }

    fn control_transfer(
        &mut self,
        handle: &mut MockHandle,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        buf: &mut [u8],
        _timeout: Duration,
    ) -> Result<usize> {
        let dev = self.device_mut(handle.index)?;
        if dev.control_error {
            return Err(Error::Timeout);
        }
        let n = if request_type & REQUEST_DIR_IN != 0 {
            let resp = dev.responses.pop_front().unwrap_or_default();
            let n = resp.len().min(buf.len());
            buf[..n].copy_from_slice(&resp[..n]);
            n
        } else {
            buf.len()
        };
        self.control_calls
            .push((request_type, request, value, index, buf[..n].to_vec()));
        Ok(n)
    }

    fn bulk_transfer(
        &mut self,
        handle: &mut MockHandle,
        endpoint: u8,
        buf: &mut [u8],
        _timeout: Duration,
    ) -> TransferOutcome {
        let dev = match self.device_mut(handle.index) {
            Ok(dev) => dev,
            Err(e) => {
                return TransferOutcome {
                    transferred: 0,
                    status: Err(e),
                };
            }
        };
        let failure = dev.bulk_failure.take();

        let n = if endpoint & ENDPOINT_DIR_IN != 0 {
            match dev.responses.pop_front() {
                Some(resp) => {
                    let n = resp.len().min(buf.len());
                    buf[..n].copy_from_slice(&resp[..n]);
                    n
                }
                None => {
                    return TransferOutcome {
                        transferred: 0,
                        status: Err(Error::Timeout),
                    };
                }
            }
        } else {
            buf.len()
        };

        let n = failure.map_or(n, |partial| partial.min(n));
        if endpoint & ENDPOINT_DIR_IN == 0 {
            self.bulk_writes.push((endpoint, buf[..n].to_vec()));
        }

        match failure {
            Some(_) => TransferOutcome {
                transferred: n,
                status: Err(Error::Timeout),
            },
            None => TransferOutcome::ok(n),
        }
    }
}
