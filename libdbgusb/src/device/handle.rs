// libdbgusb/src/device/handle.rs

use std::time::Duration;

use crate::constants::MAX_INTERFACES;
use crate::device::selector::select_interface;
use crate::transport::UsbBus;
use crate::types::{EndpointPair, InterfaceFilter};
use crate::utils::Bitmap;
use crate::{Error, Result};

/// An open, exclusively owned adapter.
///
/// The handle owns the bus context it was opened through, so closing it also
/// tears the context down. `close` consumes the handle; dropping an unclosed
/// handle closes it as well.
pub struct DeviceHandle<B: UsbBus> {
    bus: B,
    raw: Option<B::Handle>,
    endpoints: EndpointPair,
    claimed: Bitmap,
}

impl<B: UsbBus> DeviceHandle<B> {
    pub(crate) fn new(bus: B, raw: B::Handle) -> Self {
        Self {
            bus,
            raw: Some(raw),
            endpoints: EndpointPair::default(),
            claimed: Bitmap::new(MAX_INTERFACES),
        }
    }

    fn parts(&mut self) -> (&mut B, &mut B::Handle) {
        let raw = self
            .raw
            .as_mut()
            .expect("DeviceHandle is only emptied by close/drop");
        (&mut self.bus, raw)
    }

    fn raw(&self) -> &B::Handle {
        self.raw
            .as_ref()
            .expect("DeviceHandle is only emptied by close/drop")
    }

    /// Product id from the device descriptor (read on every call).
    pub fn product_id(&self) -> Result<u16> {
        Ok(self.bus.handle_descriptor(self.raw())?.product_id)
    }

    /// Endpoints found by the last successful `choose_interface`
    pub fn endpoints(&self) -> EndpointPair {
        self.endpoints
    }

    /// Interface numbers claimed through this handle
    pub fn claimed_interfaces(&self) -> impl Iterator<Item = u8> + '_ {
        self.claimed.iter_ones().map(|nr| nr as u8)
    }

    /// Underlying bus, for diagnostics
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Pick the read/write endpoint pair on the first interface that
    /// satisfies `filter` and claim that interface.
    ///
    /// Returns `Error::NotFound` when the configuration cannot be read, no
    /// interface qualifies or the claim is refused; nothing stays claimed in
    /// that case.
    pub fn choose_interface(&mut self, filter: &InterfaceFilter) -> Result<EndpointPair> {
        let selection = {
            let config = match self.bus.active_config_descriptor(self.raw()) {
                Ok(config) => config,
                Err(e) => {
                    log::error!("reading active configuration failed: {}", e);
                    return Err(Error::NotFound);
                }
            };
            #[cfg(feature = "diagnostics")]
            log::trace!("active configuration: {:?}", config);
            select_interface(&config, filter)
        };

        let Some(selection) = selection else {
            log::debug!("no interface matches {:?}", filter);
            return Err(Error::NotFound);
        };

        log::debug!("Claiming interface {}", selection.interface_number);
        let (bus, raw) = self.parts();
        if let Err(e) = bus.claim_interface(raw, selection.interface_number) {
            log::error!(
                "claiming interface {} failed: {}",
                selection.interface_number,
                e
            );
            return Err(Error::NotFound);
        }

        self.claimed.set(usize::from(selection.interface_number));
        self.endpoints = selection.endpoints;
        Ok(selection.endpoints)
    }

    /// Switch to the configuration stored at descriptor `index`, unless it is
    /// already active. Reselecting the active configuration resets some
    /// adapters, so the request is skipped in that case.
    pub fn set_configuration(&mut self, index: u8) -> Result<()> {
        let current = self.bus.active_configuration(self.raw())?;
        let target = self.bus.config_descriptor(self.raw(), index)?.number;

        if current == target {
            log::debug!("configuration {} already active", target);
            return Ok(());
        }

        let (bus, raw) = self.parts();
        bus.set_configuration(raw, target)
    }

    /// Control transfer. Returns the number of bytes transferred; failures
    /// are logged and reported as zero.
    #[allow(clippy::too_many_arguments)]
    pub fn control_transfer(
        &mut self,
        request_type: u8,
        request: u8,
        value: u16,
        index: u16,
        buf: &mut [u8],
        timeout: Duration,
    ) -> usize {
        let (bus, raw) = self.parts();
        match bus.control_transfer(raw, request_type, request, value, index, buf, timeout) {
            Ok(n) => n,
            Err(e) => {
                log::debug!(
                    "control transfer {:02x}/{:02x} failed: {}",
                    request_type,
                    request,
                    e
                );
                0
            }
        }
    }

    /// Bulk OUT transfer. Returns the byte count the bus reported; callers
    /// detect failure by a short count.
    pub fn bulk_write(&mut self, endpoint: u8, buf: &mut [u8], timeout: Duration) -> usize {
        self.bulk(endpoint, buf, timeout)
    }

    /// Bulk IN transfer. Returns the byte count the bus reported; callers
    /// detect failure by a short count.
    pub fn bulk_read(&mut self, endpoint: u8, buf: &mut [u8], timeout: Duration) -> usize {
        self.bulk(endpoint, buf, timeout)
    }

    fn bulk(&mut self, endpoint: u8, buf: &mut [u8], timeout: Duration) -> usize {
        let (bus, raw) = self.parts();
        let outcome = bus.bulk_transfer(raw, endpoint, buf, timeout);
        if let Err(e) = &outcome.status {
            log::debug!(
                "bulk transfer on ep {:02x}: {} ({} of {} bytes)",
                endpoint,
                e,
                outcome.transferred,
                buf.len()
            );
        }
        outcome.transferred
    }

    /// Release claimed interfaces, close the device and drop the bus context.
    pub fn close(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let Some(mut raw) = self.raw.take() else {
            return;
        };
        for nr in self.claimed.iter_ones().collect::<Vec<_>>() {
            if let Err(e) = self.bus.release_interface(&mut raw, nr as u8) {
                log::debug!("releasing interface {} failed: {}", nr, e);
            }
        }
        self.claimed.zero();
        self.bus.close(raw);
    }
}

impl<B: UsbBus> Drop for DeviceHandle<B> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
