//! Error types for airthings-core.
//!
//! This module defines all error types that can occur when communicating with
//! Airthings devices via Bluetooth Low Energy. There is no retry or recovery
//! policy beyond the scan retry helper in [`crate::scan`]: callers are
//! expected to surface these errors and terminate the operation with the
//! diagnostic intact.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur when communicating with Airthings devices.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Bluetooth Low Energy error.
    #[error("Bluetooth error: {0}")]
    Bluetooth(#[from] btleplug::Error),

    /// Device not found during scan or connection.
    #[error("Device not found: {0}")]
    DeviceNotFound(DeviceNotFoundReason),

    /// Operation attempted while not connected to device.
    #[error("Not connected to device")]
    NotConnected,

    /// Required BLE characteristic not found on device.
    #[error("Characteristic not found: {uuid} (searched in {service_count} services)")]
    CharacteristicNotFound {
        /// The UUID that was not found.
        uuid: String,
        /// Number of services that were searched.
        service_count: usize,
    },

    /// The device is not a supported Airthings device.
    ///
    /// Raised for models that use the command/response protocol (Corentium
    /// Home 2, View Plus) and for devices whose model could not be detected.
    #[error("Unsupported Airthings device: {model}")]
    UnsupportedDevice {
        /// Product name or model identifier of the device.
        model: String,
    },

    /// Failed to parse data received from device.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Operation timed out.
    #[error("Operation '{operation}' timed out after {duration:?}")]
    Timeout {
        /// The operation that timed out.
        operation: String,
        /// The timeout duration.
        duration: Duration,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reason why a device was not found.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new reasons
/// in future versions without breaking downstream code.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum DeviceNotFoundReason {
    /// No devices found during scan.
    NoDevicesInRange,
    /// Device with specified name/address not found.
    NotFound {
        /// The identifier that was searched for.
        identifier: String,
    },
    /// No Bluetooth adapter available.
    NoAdapter,
}

impl std::fmt::Display for DeviceNotFoundReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoDevicesInRange => write!(f, "no devices in range"),
            Self::NotFound { identifier } => write!(f, "device '{}' not found", identifier),
            Self::NoAdapter => write!(f, "no Bluetooth adapter available"),
        }
    }
}

impl Error {
    /// Create a device not found error for a specific identifier.
    pub fn device_not_found(identifier: impl Into<String>) -> Self {
        Self::DeviceNotFound(DeviceNotFoundReason::NotFound {
            identifier: identifier.into(),
        })
    }

    /// Create a timeout error with operation context.
    pub fn timeout(operation: impl Into<String>, duration: Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            duration,
        }
    }

    /// Create a characteristic not found error.
    pub fn characteristic_not_found(uuid: impl Into<String>, service_count: usize) -> Self {
        Self::CharacteristicNotFound {
            uuid: uuid.into(),
            service_count,
        }
    }

    /// Create an unsupported device error.
    pub fn unsupported_device(model: impl Into<String>) -> Self {
        Self::UnsupportedDevice {
            model: model.into(),
        }
    }
}

impl From<airthings_types::ParseError> for Error {
    fn from(err: airthings_types::ParseError) -> Self {
        match err {
            airthings_types::ParseError::UnsupportedDevice(model) => {
                Error::UnsupportedDevice { model }
            }
            other => Error::InvalidData(other.to_string()),
        }
    }
}

/// Result type alias using airthings-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::device_not_found("AA:BB:CC:DD:EE:FF");
        assert!(err.to_string().contains("AA:BB:CC:DD:EE:FF"));

        let err = Error::NotConnected;
        assert_eq!(err.to_string(), "Not connected to device");

        let err = Error::characteristic_not_found("0x2A19", 5);
        assert!(err.to_string().contains("0x2A19"));
        assert!(err.to_string().contains("5 services"));

        let err = Error::unsupported_device("Corentium Home 2");
        assert!(err.to_string().contains("Corentium Home 2"));

        let err = Error::timeout("read sensors", Duration::from_secs(10));
        assert!(err.to_string().contains("read sensors"));
        assert!(err.to_string().contains("10s"));
    }

    #[test]
    fn test_device_not_found_reasons() {
        let err = Error::DeviceNotFound(DeviceNotFoundReason::NoAdapter);
        assert!(err.to_string().contains("no Bluetooth adapter"));

        let err = Error::DeviceNotFound(DeviceNotFoundReason::NoDevicesInRange);
        assert!(err.to_string().contains("no devices in range"));
    }

    #[test]
    fn test_parse_error_conversion() {
        let parse_err = airthings_types::ParseError::InsufficientBytes {
            expected: 20,
            actual: 4,
        };
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::InvalidData(_)));

        let parse_err =
            airthings_types::ParseError::UnsupportedDevice("Airthings View Plus".to_string());
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::UnsupportedDevice { .. }));
    }

    #[test]
    fn test_btleplug_error_conversion() {
        // btleplug::Error doesn't have public constructors for most variants,
        // but we can verify the From impl exists by checking the type compiles
        fn _assert_from_impl<T: From<btleplug::Error>>() {}
        _assert_from_impl::<Error>();
    }
}
