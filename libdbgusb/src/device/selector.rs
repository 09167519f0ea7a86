// libdbgusb/src/device/selector.rs

//! Interface/endpoint selection over a configuration descriptor snapshot.

use crate::transport::descriptor::{ConfigDescriptor, EndpointDescriptor, InterfaceDescriptor};
use crate::types::{Direction, EndpointPair, InterfaceFilter};

/// Interface chosen by `select_interface` and the endpoints found on it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub interface_number: u8,
    pub endpoints: EndpointPair,
}

impl InterfaceFilter {
    /// Class/subclass/protocol constraints against an interface
    pub fn matches_interface(&self, desc: &InterfaceDescriptor) -> bool {
        self.class.is_none_or(|c| c == desc.class_code)
            && self.subclass.is_none_or(|s| s == desc.sub_class_code)
            && self.protocol.is_none_or(|p| p == desc.protocol_code)
    }

    /// Transfer type constraint against an endpoint
    pub fn matches_endpoint(&self, ep: &EndpointDescriptor) -> bool {
        self.transfer_type.is_none_or(|t| t == ep.transfer_type())
    }
}

/// Walk the first alternate setting of every interface satisfying `filter`
/// and collect the first IN and the first OUT endpoint of the requested
/// transfer type. The pair carries over from one interface to the next; the
/// interface on which it becomes complete is the one selected.
pub fn select_interface(config: &ConfigDescriptor, filter: &InterfaceFilter) -> Option<Selection> {
    let mut endpoints = EndpointPair::default();
    for interface in &config.interfaces {
        let Some(desc) = interface.first_alt_setting() else {
            continue;
        };
        if !filter.matches_interface(desc) {
            continue;
        }

        for ep in desc.endpoints.iter().filter(|ep| filter.matches_endpoint(ep)) {
            log::debug!(
                "usb ep {} {:02x}",
                match ep.direction() {
                    Direction::In => "in",
                    Direction::Out => "out",
                },
                ep.address
            );
            match ep.direction() {
                Direction::In if endpoints.read == 0 => endpoints.read = ep.address,
                Direction::Out if endpoints.write == 0 => endpoints.write = ep.address,
                _ => {}
            }

            if endpoints.is_complete() {
                return Some(Selection {
                    interface_number: desc.interface_number,
                    endpoints,
                });
            }
        }
    }
    None
}
