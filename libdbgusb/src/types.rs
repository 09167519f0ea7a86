// libdbgusb/src/types.rs

use derive_more::Display;
use std::convert::TryFrom;

use crate::constants::{ENDPOINT_DIR_IN, SERIAL_MAX_LEN, TRANSFER_TYPE_MASK};
use crate::Error;

/// Vendor/product id pair
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{:04x}:{:04x}", vendor_id, product_id)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UsbId {
    pub vendor_id: u16,
    pub product_id: u16,
}

impl UsbId {
    pub const fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
        }
    }
}

/// Ordered table of candidate ids for one open attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdTable(Vec<UsbId>);

impl IdTable {
    pub fn new(ids: &[UsbId]) -> Self {
        Self(ids.to_vec())
    }

    /// Build a table from parallel vendor/product arrays terminated by a zero
    /// vendor id. Reading stops at the sentinel, or at the end of the shorter
    /// array when no sentinel is present.
    pub fn from_terminated(vids: &[u16], pids: &[u16]) -> Self {
        Self(
            vids.iter()
                .zip(pids)
                .take_while(|&(&vid, _)| vid != 0)
                .map(|(&vid, &pid)| UsbId::new(vid, pid))
                .collect(),
        )
    }

    /// Index of the first entry equal to `id`.
    pub fn position(&self, id: UsbId) -> Option<usize> {
        self.0.iter().position(|&entry| entry == id)
    }

    pub fn contains(&self, id: UsbId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UsbId> {
        self.0.iter()
    }
}

impl From<&[(u16, u16)]> for IdTable {
    fn from(pairs: &[(u16, u16)]) -> Self {
        Self(pairs.iter().map(|&(v, p)| UsbId::new(v, p)).collect())
    }
}

/// Canonical serial number string
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
pub struct SerialString(String);

impl SerialString {
    /// Build a serial from raw descriptor characters. Input stops at the
    /// first NUL byte.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(
            bytes
                .iter()
                .take_while(|&&b| b != 0)
                .map(|&b| char::from(b))
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact, case-sensitive comparison with a caller supplied serial.
    pub fn matches(&self, wanted: &str) -> bool {
        self.0 == wanted
    }
}

impl From<String> for SerialString {
    fn from(s: String) -> Self {
        Self(s.split('\0').next().unwrap_or_default().to_string())
    }
}

impl TryFrom<&str> for SerialString {
    type Error = Error;

    /// Accepts only canonical decoded serials (at most 24 characters).
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.len() > SERIAL_MAX_LEN {
            return Err(Error::InvalidLength {
                expected: SERIAL_MAX_LEN,
                actual: s.len(),
            });
        }
        Ok(Self(s.to_string()))
    }
}

/// Endpoint transfer type from the low two bits of bmAttributes
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransferType {
    Control = 0,
    Isochronous = 1,
    Bulk = 2,
    Interrupt = 3,
}

impl TransferType {
    pub fn from_attributes(attributes: u8) -> Self {
        match attributes & TRANSFER_TYPE_MASK {
            0 => Self::Control,
            1 => Self::Isochronous,
            2 => Self::Bulk,
            _ => Self::Interrupt,
        }
    }
}

/// Endpoint direction from the high bit of bEndpointAddress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    pub fn from_address(address: u8) -> Self {
        if address & ENDPOINT_DIR_IN != 0 {
            Self::In
        } else {
            Self::Out
        }
    }
}

/// Read/write endpoint addresses. Zero means unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndpointPair {
    pub read: u8,
    pub write: u8,
}

impl EndpointPair {
    pub fn is_complete(&self) -> bool {
        self.read != 0 && self.write != 0
    }
}

/// Constraints used when choosing an interface. `None` means don't care.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterfaceFilter {
    pub class: Option<u8>,
    pub subclass: Option<u8>,
    pub protocol: Option<u8>,
    pub transfer_type: Option<TransferType>,
}

impl InterfaceFilter {
    pub fn any() -> Self {
        Self::default()
    }

    /// Build a filter from integer constraints where a non-positive value
    /// means "don't care". Values that do not fit a descriptor byte are
    /// ignored as well; transfer types are masked to their two low bits.
    pub fn from_raw(class: i32, subclass: i32, protocol: i32, transfer_type: i32) -> Self {
        fn positive(v: i32) -> Option<u8> {
            u8::try_from(v).ok().filter(|&b| b > 0)
        }
        Self {
            class: positive(class),
            subclass: positive(subclass),
            protocol: positive(protocol),
            transfer_type: positive(transfer_type).map(TransferType::from_attributes),
        }
    }

    pub fn class(mut self, class: u8) -> Self {
        self.class = Some(class);
        self
    }

    pub fn subclass(mut self, subclass: u8) -> Self {
        self.subclass = Some(subclass);
        self
    }

    pub fn protocol(mut self, protocol: u8) -> Self {
        self.protocol = Some(protocol);
        self
    }

    pub fn transfer_type(mut self, transfer_type: TransferType) -> Self {
        self.transfer_type = Some(transfer_type);
        self
    }
}
