// libdbgusb/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// The USB context could not be created.
    #[error("usb context initialization failed: {0}")]
    Init(String),

    #[error("device not found")]
    NotFound,

    /// A serial-number descriptor had a layout we do not understand.
    #[error("serial decode error: {0}")]
    Decode(String),

    // USB 実装を後から有効化できるように optional dependency にしている
    #[cfg(feature = "usb")]
    #[error("usb error: {0}")]
    Usb(#[from] rusb::Error),

    /// Bus failure reported by a non-libusb backend.
    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid buffer length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("operation timed out")]
    Timeout,
}

pub type Result<T> = std::result::Result<T, Error>;
