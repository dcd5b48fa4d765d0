//! Error types for data parsing in airthings-types.

use thiserror::Error;

/// Errors that can occur when parsing Airthings sensor data.
///
/// This error type is platform-agnostic and does not include
/// BLE-specific errors (those belong in airthings-core).
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Sensor payload was shorter than the decoder requires.
    #[error("sensor payload requires {expected} bytes, got {actual}")]
    InsufficientBytes {
        /// Number of bytes the decoder expects.
        expected: usize,
        /// Number of bytes actually received.
        actual: usize,
    },

    /// A decoded value was outside its valid range or had an unexpected marker.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// The model number prefix of a serial number is not a known Airthings model.
    #[error("unknown Airthings model number: {0}")]
    UnknownModel(u32),

    /// The device model is recognized but its sensor format cannot be decoded.
    #[error("unsupported Airthings device: {0}")]
    UnsupportedDevice(String),
}

/// Result type alias using airthings-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
