// libdbgusb/src/serial/stlink.rs

//! ST-Link serial descriptor decoding.
//!
//! Older ST-Link firmware reports its 12 serial bytes as raw values padded
//! to UTF-16 code units instead of as text; newer firmware reports 24 ASCII
//! characters. The declared descriptor length tells the two apart.

use crate::constants::{SERIAL_MAX_LEN, STLINK_LEGACY_SERIAL_LEN, STLINK_SERIAL_LEN};
use crate::types::SerialString;
use crate::utils::bytes_to_hex_upper;
use crate::{Error, Result};

/// Decode a raw ST-Link serial string descriptor.
pub fn decode_stlink_serial(raw: &[u8]) -> Result<SerialString> {
    let declared = *raw
        .first()
        .ok_or_else(|| Error::Decode("empty serial descriptor".into()))?;

    if raw.len() < usize::from(declared) {
        return Err(Error::Decode(format!(
            "truncated serial descriptor ({} of {} bytes)",
            raw.len(),
            declared
        )));
    }

    match declared {
        STLINK_LEGACY_SERIAL_LEN => {
            let bytes: Vec<u8> = code_units(raw).take(SERIAL_MAX_LEN / 2).collect();
            Ok(SerialString::from(bytes_to_hex_upper(&bytes)))
        }
        STLINK_SERIAL_LEN => {
            let chars: Vec<u8> = code_units(raw).take(SERIAL_MAX_LEN).collect();
            Ok(SerialString::from_bytes(&chars))
        }
        other => Err(Error::Decode(format!(
            "unexpected serial length ({}) in descriptor",
            other
        ))),
    }
}

/// Low byte of every UTF-16 code unit after the two byte header
fn code_units(raw: &[u8]) -> impl Iterator<Item = u8> + '_ {
    raw.iter().skip(2).step_by(2).copied()
}
