//! Platform-agnostic types for Airthings air quality sensors.
//!
//! This crate provides the shared types used by airthings-core:
//!
//! - Device model identification from serial numbers
//! - Sensor reading structures with byte-level decoders
//! - Device information structures
//! - UUID constants for BLE services and characteristics
//! - Error types for data parsing
//!
//! # Example
//!
//! ```
//! use airthings_types::{DeviceType, SensorReadings};
//!
//! let device_type = DeviceType::from_serial(2930123456).unwrap();
//! assert_eq!(device_type, DeviceType::WavePlus);
//! assert!(device_type.is_readable());
//! ```

pub mod error;
pub mod types;
pub mod uuid;

pub use error::{ParseError, ParseResult};
pub use types::{DeviceInfo, DeviceType, SensorReadings, radon_bq_to_pci};
pub use uuid as uuids;
