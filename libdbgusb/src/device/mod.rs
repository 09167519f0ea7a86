// libdbgusb/src/device/mod.rs

pub mod builder;
pub mod handle;
pub mod matcher;
pub mod selector;

pub use builder::AdapterQuery;
pub use handle::DeviceHandle;
#[cfg(feature = "usb")]
pub use matcher::open;
pub use matcher::{examine, open_with, Candidate, Rejection};
pub use selector::{select_interface, Selection};
