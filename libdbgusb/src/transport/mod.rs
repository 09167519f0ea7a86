// libdbgusb/src/transport/mod.rs

pub mod descriptor;
pub mod mock;
pub mod traits;
#[cfg(feature = "usb")]
pub mod usb;

pub use descriptor::{
    ConfigDescriptor, DeviceDescriptor, EndpointDescriptor, Interface, InterfaceDescriptor,
};
pub use mock::{MockBus, MockDevice};
pub use traits::{TransferOutcome, UsbBus};
#[cfg(feature = "usb")]
pub use usb::RusbBus;
