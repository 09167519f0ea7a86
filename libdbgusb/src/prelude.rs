// libdbgusb/src/prelude.rs

pub use crate::device::{AdapterQuery, DeviceHandle};
pub use crate::transport::{MockBus, MockDevice, UsbBus};
#[cfg(feature = "usb")]
pub use crate::transport::RusbBus;
pub use crate::{
    Direction, EndpointPair, Error, IdTable, InterfaceFilter, Result, SerialString, TransferType,
    UsbId,
};

// Re-export small utilities for convenience
pub use crate::utils::ms;
