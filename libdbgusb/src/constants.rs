// libdbgusb/src/constants.rs
//! USB constants shared by the matcher, serial resolver and selector

/// Vendor id of the ST-Link family, whose serial descriptors need decoding
pub const STLINK_VENDOR_ID: u16 = 0x0483;

/// Language id used for raw string descriptor reads (US English)
pub const LANG_ID_EN_US: u16 = 0x0409;

/// Number of bytes requested when reading a raw serial string descriptor
pub const SERIAL_DESCRIPTOR_READ_LEN: usize = 64;

/// Maximum number of visible characters in a decoded ST-Link serial
pub const SERIAL_MAX_LEN: usize = 24;

/// Declared descriptor length of the legacy ST-Link serial layout
pub const STLINK_LEGACY_SERIAL_LEN: u8 = 26;

/// Declared descriptor length of the current ST-Link serial layout
pub const STLINK_SERIAL_LEN: u8 = 50;

/// bEndpointAddress direction bit (set = IN)
pub const ENDPOINT_DIR_IN: u8 = 0x80;

/// bmAttributes transfer type mask
pub const TRANSFER_TYPE_MASK: u8 = 0x03;

/// bmRequestType direction bit (set = device to host)
pub const REQUEST_DIR_IN: u8 = 0x80;

/// GET_DESCRIPTOR standard request and the string descriptor type
pub const REQUEST_GET_DESCRIPTOR: u8 = 0x06;
pub const DESCRIPTOR_TYPE_STRING: u8 = 0x03;

/// Interface numbers are a single byte on the wire
pub const MAX_INTERFACES: usize = 256;
