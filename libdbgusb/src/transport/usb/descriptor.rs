// libdbgusb/src/transport/usb/descriptor.rs

use rusb::UsbContext;

use crate::transport::descriptor::{
    ConfigDescriptor, DeviceDescriptor, EndpointDescriptor, Interface, InterfaceDescriptor,
};

/// Snapshot the identity fields of a libusb device descriptor.
pub fn device_snapshot(desc: &rusb::DeviceDescriptor) -> DeviceDescriptor {
    DeviceDescriptor {
        vendor_id: desc.vendor_id(),
        product_id: desc.product_id(),
        serial_number_index: desc.serial_number_string_index(),
        num_configurations: desc.num_configurations(),
    }
}

/// Copy a libusb configuration tree into an owned snapshot. The libusb
/// descriptor is freed when `config` is dropped by the caller.
pub fn config_snapshot(config: &rusb::ConfigDescriptor) -> ConfigDescriptor {
    ConfigDescriptor {
        number: config.number(),
        interfaces: config
            .interfaces()
            .map(|interface| Interface {
                alt_settings: interface
                    .descriptors()
                    .map(|alt| InterfaceDescriptor {
                        interface_number: alt.interface_number(),
                        alternate_setting: alt.setting_number(),
                        class_code: alt.class_code(),
                        sub_class_code: alt.sub_class_code(),
                        protocol_code: alt.protocol_code(),
                        endpoints: alt
                            .endpoint_descriptors()
                            .map(|ep| EndpointDescriptor {
                                address: ep.address(),
                                attributes: raw_attributes(&ep),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// rusb splits bmAttributes into enums; rebuild the transfer type bits.
fn raw_attributes(ep: &rusb::EndpointDescriptor) -> u8 {
    match ep.transfer_type() {
        rusb::TransferType::Control => 0,
        rusb::TransferType::Isochronous => 1,
        rusb::TransferType::Bulk => 2,
        rusb::TransferType::Interrupt => 3,
    }
}

/// Read the device descriptor of any rusb device
pub fn read_device_descriptor<T: UsbContext>(
    device: &rusb::Device<T>,
) -> rusb::Result<DeviceDescriptor> {
    device.device_descriptor().map(|d| device_snapshot(&d))
}
