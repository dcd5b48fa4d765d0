//! Trait abstractions for Airthings device operations.
//!
//! This module provides the [`AirthingsDevice`] trait that abstracts over
//! real Bluetooth devices and mock devices for testing.

use async_trait::async_trait;

use airthings_types::{DeviceInfo, DeviceType, SensorReadings};

use crate::error::Result;

/// Trait abstracting Airthings device operations.
///
/// This trait enables writing code that works with both real Bluetooth devices
/// and mock devices for testing. Implement this trait for any type that can
/// provide Airthings sensor data.
///
/// # Example
///
/// ```ignore
/// use airthings_core::{AirthingsDevice, Result};
///
/// async fn print_readings<D: AirthingsDevice>(device: &D) -> Result<()> {
///     let readings = device.read_sensors().await?;
///     if let Some(co2) = readings.co2 {
///         println!("CO2: {} ppm", co2);
///     }
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait AirthingsDevice: Send + Sync {
    // --- Connection Management ---

    /// Check if the device is connected.
    async fn is_connected(&self) -> bool;

    /// Connect to the device.
    ///
    /// For devices that are already connected, this should be a no-op.
    /// For devices that support reconnection, this should attempt to reconnect.
    ///
    /// The default implementation returns `Ok(())` for backwards compatibility.
    async fn connect(&self) -> Result<()> {
        Ok(())
    }

    /// Disconnect from the device.
    async fn disconnect(&self) -> Result<()>;

    // --- Device Identity ---

    /// Get the device name, if available.
    fn name(&self) -> Option<&str>;

    /// Get the device address or identifier.
    ///
    /// On Linux/Windows this is typically the MAC address.
    /// On macOS this is a UUID since MAC addresses are not exposed.
    fn address(&self) -> &str;

    /// Get the serial number from the advertisement, if available.
    fn serial(&self) -> Option<u32>;

    /// Get the detected device type, if available.
    fn device_type(&self) -> Option<DeviceType>;

    // --- Sensor Readings ---

    /// Read the current sensor values.
    async fn read_sensors(&self) -> Result<SensorReadings>;

    /// Read device information (model, serial, firmware version, etc.).
    async fn read_device_info(&self) -> Result<DeviceInfo>;

    // --- Battery ---

    /// Read the battery level (0-100).
    async fn read_battery(&self) -> Result<u8>;

    /// Read the current RSSI (signal strength) in dBm.
    ///
    /// More negative values indicate weaker signals.
    /// Typical values range from -30 (strong) to -90 (weak).
    async fn read_rssi(&self) -> Result<i16>;
}
