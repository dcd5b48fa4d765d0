//! Core BLE library for Airthings air quality sensors.
//!
//! This crate provides low-level Bluetooth Low Energy (BLE) communication
//! with Airthings sensors including the Wave Plus, Wave (2nd gen), and
//! Wave Mini devices.
//!
//! # Features
//!
//! - **Device discovery**: Scan for nearby Airthings devices via BLE
//! - **Sensor readings**: Radon, temperature, pressure, humidity, CO₂, VOC
//! - **Device info**: Model, serial number, firmware and hardware revisions
//! - **Retry logic**: Scanning with exponential backoff
//! - **Mock devices**: Test without BLE hardware via [`MockDevice`]
//!
//! # Supported Devices
//!
//! | Device | Sensors |
//! |--------|---------|
//! | Wave Plus | Radon, Temperature, Pressure, Humidity, CO₂, VOC |
//! | Wave (2nd gen) | Radon, Temperature, Humidity |
//! | Wave Mini | Temperature, Humidity, VOC |
//!
//! View Plus, Corentium Home 2, and first generation Wave devices are
//! detected during scanning but use a command/response protocol that this
//! crate does not speak. Reading from them returns
//! [`Error::UnsupportedDevice`].
//!
//! # Platform Differences
//!
//! Device identification varies by platform due to differences in BLE implementations:
//!
//! - **macOS**: Devices are identified by a UUID assigned by CoreBluetooth. This UUID
//!   is stable for a given device on a given Mac, but differs between Macs. The UUID
//!   is not the same as the device's MAC address.
//!
//! - **Linux/Windows**: Devices are identified by their Bluetooth MAC address
//!   (e.g., `AA:BB:CC:DD:EE:FF`). This is consistent across machines.
//!
//! # Quick Start
//!
//! ```no_run
//! use airthings_core::{Device, scan};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Scan for Airthings devices
//!     let devices = scan::scan_for_devices().await?;
//!     println!("Found {} devices", devices.len());
//!
//!     // Connect to a device
//!     let device = Device::connect("AA:BB:CC:DD:EE:FF").await?;
//!
//!     // Read current values
//!     let readings = device.read_sensors().await?;
//!     if let Some(radon) = readings.radon_short {
//!         println!("Radon: {} Bq/m3", radon);
//!     }
//!
//!     // Read device info
//!     let info = device.read_device_info().await?;
//!     println!("Serial: {}", info.serial);
//!
//!     device.disconnect().await?;
//!     Ok(())
//! }
//! ```

pub mod device;
pub mod error;
pub mod mock;
pub mod scan;
pub mod traits;
pub mod util;

// Core exports
pub use device::{ConnectionConfig, Device};
pub use error::{DeviceNotFoundReason, Error, Result};
pub use mock::{MockDevice, MockDeviceBuilder};
pub use scan::{
    DiscoveredDevice, ScanOptions, is_airthings_device, parse_serial_number, scan_for_devices,
    scan_with_options, scan_with_retry,
};
pub use traits::AirthingsDevice;
pub use util::{create_identifier, format_peripheral_id, normalize_address};

/// Type alias for a shared device reference.
///
/// This is the recommended way to share a `Device` across multiple tasks.
/// Since `Device` intentionally does not implement `Clone` (to prevent
/// connection ownership ambiguity), wrapping it in `Arc` is the standard
/// pattern for concurrent access.
pub type SharedDevice = std::sync::Arc<Device>;

// Re-export from airthings-types
pub use airthings_types::uuid as uuids;
pub use airthings_types::{DeviceInfo, DeviceType, ParseError, SensorReadings, radon_bq_to_pci};
