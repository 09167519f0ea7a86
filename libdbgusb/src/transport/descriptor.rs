// libdbgusb/src/transport/descriptor.rs

//! Owned snapshots of the standard device and configuration descriptors.
//!
//! Backends build these on demand; nothing here is cached between calls.

use crate::types::{Direction, TransferType, UsbId};

/// Identity fields of the standard device descriptor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceDescriptor {
    pub vendor_id: u16,
    pub product_id: u16,
    /// iSerialNumber, `None` when the device declares no serial string
    pub serial_number_index: Option<u8>,
    pub num_configurations: u8,
}

impl DeviceDescriptor {
    pub fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
            serial_number_index: None,
            num_configurations: 1,
        }
    }

    pub fn id(&self) -> UsbId {
        UsbId::new(self.vendor_id, self.product_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    pub address: u8,
    pub attributes: u8,
}

impl EndpointDescriptor {
    pub fn new(address: u8, attributes: u8) -> Self {
        Self {
            address,
            attributes,
        }
    }

    pub fn direction(&self) -> Direction {
        Direction::from_address(self.address)
    }

    pub fn transfer_type(&self) -> TransferType {
        TransferType::from_attributes(self.attributes)
    }
}

/// One alternate setting of an interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDescriptor {
    pub interface_number: u8,
    pub alternate_setting: u8,
    pub class_code: u8,
    pub sub_class_code: u8,
    pub protocol_code: u8,
    pub endpoints: Vec<EndpointDescriptor>,
}

impl InterfaceDescriptor {
    pub fn new(interface_number: u8, class_code: u8, sub_class_code: u8, protocol_code: u8) -> Self {
        Self {
            interface_number,
            alternate_setting: 0,
            class_code,
            sub_class_code,
            protocol_code,
            endpoints: Vec::new(),
        }
    }

    pub fn with_endpoint(mut self, address: u8, attributes: u8) -> Self {
        self.endpoints
            .push(EndpointDescriptor::new(address, attributes));
        self
    }
}

/// An interface and all of its alternate settings, in descriptor order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub alt_settings: Vec<InterfaceDescriptor>,
}

impl Interface {
    pub fn first_alt_setting(&self) -> Option<&InterfaceDescriptor> {
        self.alt_settings.first()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDescriptor {
    /// bConfigurationValue
    pub number: u8,
    pub interfaces: Vec<Interface>,
}

impl ConfigDescriptor {
    pub fn new(number: u8) -> Self {
        Self {
            number,
            interfaces: Vec::new(),
        }
    }

    /// Append an interface with a single alternate setting.
    pub fn with_interface(mut self, desc: InterfaceDescriptor) -> Self {
        self.interfaces.push(Interface {
            alt_settings: vec![desc],
        });
        self
    }

    /// Append an interface with several alternate settings.
    pub fn with_alt_settings(mut self, alt_settings: Vec<InterfaceDescriptor>) -> Self {
        self.interfaces.push(Interface { alt_settings });
        self
    }
}
