//! Mock device implementation for testing.
//!
//! This module provides a mock device that can be used for unit testing
//! without requiring actual BLE hardware.
//!
//! The [`MockDevice`] implements the [`AirthingsDevice`] trait, allowing it to
//! be used interchangeably with real devices in generic code.
//!
//! # Features
//!
//! - **Failure injection**: Set the device to fail on specific operations
//! - **Latency simulation**: Add artificial delays to simulate slow BLE responses
//! - **Transient failures**: Fail a fixed number of operations, then succeed

use std::sync::atomic::{AtomicBool, AtomicI16, AtomicU32, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use airthings_types::{DeviceInfo, DeviceType, SensorReadings};

use crate::error::{Error, Result};
use crate::traits::AirthingsDevice;

/// A mock Airthings device for testing.
///
/// Implements the [`AirthingsDevice`] trait for use in generic code and
/// testing.
///
/// # Example
///
/// ```
/// use airthings_core::{MockDevice, AirthingsDevice};
/// use airthings_types::DeviceType;
///
/// #[tokio::main]
/// async fn main() {
///     let device = MockDevice::new("Test", DeviceType::WavePlus);
///     device.connect().await.unwrap();
///
///     // Can use through trait
///     async fn read_via_trait<D: AirthingsDevice>(d: &D) {
///         let _ = d.read_sensors().await;
///     }
///     read_via_trait(&device).await;
/// }
/// ```
pub struct MockDevice {
    name: String,
    address: String,
    device_type: DeviceType,
    serial: u32,
    connected: AtomicBool,
    readings: RwLock<SensorReadings>,
    device_info: RwLock<DeviceInfo>,
    battery: RwLock<u8>,
    rssi: AtomicI16,
    read_count: AtomicU32,
    should_fail: AtomicBool,
    fail_message: RwLock<String>,
    /// Simulated read latency in milliseconds (0 = no delay).
    read_latency_ms: AtomicU64,
    /// Simulated connect latency in milliseconds (0 = no delay).
    connect_latency_ms: AtomicU64,
    /// Number of operations to fail before succeeding (0 = always succeed/fail based on should_fail).
    fail_count: AtomicU32,
    /// Current count of failures (decremented on each failure).
    remaining_failures: AtomicU32,
}

impl std::fmt::Debug for MockDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockDevice")
            .field("name", &self.name)
            .field("address", &self.address)
            .field("device_type", &self.device_type)
            .field("connected", &self.connected.load(Ordering::Relaxed))
            .finish()
    }
}

impl MockDevice {
    /// Create a new mock device with default values.
    pub fn new(name: &str, device_type: DeviceType) -> Self {
        let serial = device_type.model_number() * 1_000_000 + 123_456;
        Self {
            name: name.to_string(),
            address: format!("MOCK-{:06X}", rand::random::<u32>() % 0xFFFFFF),
            device_type,
            serial,
            connected: AtomicBool::new(false),
            readings: RwLock::new(Self::default_readings()),
            device_info: RwLock::new(Self::default_info(name, serial)),
            battery: RwLock::new(85),
            rssi: AtomicI16::new(-50),
            read_count: AtomicU32::new(0),
            should_fail: AtomicBool::new(false),
            fail_message: RwLock::new("Mock failure".to_string()),
            read_latency_ms: AtomicU64::new(0),
            connect_latency_ms: AtomicU64::new(0),
            fail_count: AtomicU32::new(0),
            remaining_failures: AtomicU32::new(0),
        }
    }

    fn default_readings() -> SensorReadings {
        SensorReadings {
            humidity: Some(45.0),
            radon_short: Some(100),
            radon_long: Some(120),
            temperature: Some(22.5),
            pressure: Some(1003.2),
            co2: Some(800),
            voc: Some(150),
            battery: Some(85),
        }
    }

    fn default_info(name: &str, serial: u32) -> DeviceInfo {
        DeviceInfo {
            name: name.to_string(),
            model: (serial / 1_000_000).to_string(),
            serial: serial.to_string(),
            firmware: "R-SUB-1.3.5".to_string(),
            hardware: "REV A".to_string(),
            manufacturer: "Airthings AS".to_string(),
        }
    }

    /// Connect to the mock device.
    pub async fn connect(&self) -> Result<()> {
        use crate::error::DeviceNotFoundReason;

        // Simulate connect latency
        let latency = self.connect_latency_ms.load(Ordering::Relaxed);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }

        // Check for transient failures first
        if self.remaining_failures.load(Ordering::Relaxed) > 0 {
            self.remaining_failures.fetch_sub(1, Ordering::Relaxed);
            return Err(Error::DeviceNotFound(DeviceNotFoundReason::NotFound {
                identifier: self.name.clone(),
            }));
        }

        if self.should_fail.load(Ordering::Relaxed) {
            return Err(Error::DeviceNotFound(DeviceNotFoundReason::NotFound {
                identifier: self.name.clone(),
            }));
        }
        self.connected.store(true, Ordering::Relaxed);
        Ok(())
    }

    /// Disconnect from the mock device.
    pub async fn disconnect(&self) -> Result<()> {
        self.connected.store(false, Ordering::Relaxed);
        Ok(())
    }

    /// Check if connected (sync method for internal use).
    pub fn is_connected_sync(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }

    /// Get the device name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the device address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Get the device type.
    pub fn device_type(&self) -> DeviceType {
        self.device_type
    }

    /// Get the serial number.
    pub fn serial(&self) -> u32 {
        self.serial
    }

    /// Read current sensor values.
    pub async fn read_sensors(&self) -> Result<SensorReadings> {
        self.check_connected()?;
        self.check_should_fail().await?;

        if !self.device_type.is_readable() {
            return Err(Error::unsupported_device(self.device_type.product_name()));
        }

        self.read_count.fetch_add(1, Ordering::Relaxed);
        Ok(*self.readings.read().await)
    }

    /// Read battery level.
    pub async fn read_battery(&self) -> Result<u8> {
        self.check_connected()?;
        self.check_should_fail().await?;
        Ok(*self.battery.read().await)
    }

    /// Read RSSI (signal strength).
    pub async fn read_rssi(&self) -> Result<i16> {
        self.check_connected()?;
        self.check_should_fail().await?;
        Ok(self.rssi.load(Ordering::Relaxed))
    }

    /// Read device info.
    pub async fn read_device_info(&self) -> Result<DeviceInfo> {
        self.check_connected()?;
        self.check_should_fail().await?;
        Ok(self.device_info.read().await.clone())
    }

    fn check_connected(&self) -> Result<()> {
        if !self.connected.load(Ordering::Relaxed) {
            Err(Error::NotConnected)
        } else {
            Ok(())
        }
    }

    async fn check_should_fail(&self) -> Result<()> {
        // Simulate read latency
        let latency = self.read_latency_ms.load(Ordering::Relaxed);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }

        // Check for transient failures first
        if self.remaining_failures.load(Ordering::Relaxed) > 0 {
            self.remaining_failures.fetch_sub(1, Ordering::Relaxed);
            return Err(Error::InvalidData(self.fail_message.read().await.clone()));
        }

        if self.should_fail.load(Ordering::Relaxed) {
            Err(Error::InvalidData(self.fail_message.read().await.clone()))
        } else {
            Ok(())
        }
    }

    // --- Test control methods ---

    /// Set the current sensor readings for testing.
    pub async fn set_readings(&self, readings: SensorReadings) {
        *self.readings.write().await = readings;
    }

    /// Set radon levels directly (Bq/m³).
    pub async fn set_radon(&self, short: u32, long: u32) {
        let mut readings = self.readings.write().await;
        readings.radon_short = Some(short);
        readings.radon_long = Some(long);
    }

    /// Set temperature directly.
    pub async fn set_temperature(&self, temp: f32) {
        self.readings.write().await.temperature = Some(temp);
    }

    /// Set CO2 level directly.
    pub async fn set_co2(&self, co2: u16) {
        self.readings.write().await.co2 = Some(co2);
    }

    /// Set battery level.
    pub async fn set_battery(&self, level: u8) {
        *self.battery.write().await = level;
        self.readings.write().await.battery = Some(level);
    }

    /// Set RSSI (signal strength) for testing.
    pub fn set_rssi(&self, rssi: i16) {
        self.rssi.store(rssi, Ordering::Relaxed);
    }

    /// Make the device fail on next operation.
    pub async fn set_should_fail(&self, fail: bool, message: Option<&str>) {
        self.should_fail.store(fail, Ordering::Relaxed);
        if let Some(msg) = message {
            *self.fail_message.write().await = msg.to_string();
        }
    }

    /// Get the number of read operations performed.
    pub fn read_count(&self) -> u32 {
        self.read_count.load(Ordering::Relaxed)
    }

    /// Reset read count.
    pub fn reset_read_count(&self) {
        self.read_count.store(0, Ordering::Relaxed);
    }

    /// Set simulated read latency.
    ///
    /// Each read operation will be delayed by this duration.
    /// Set to `Duration::ZERO` to disable latency simulation.
    pub fn set_read_latency(&self, latency: Duration) {
        self.read_latency_ms
            .store(latency.as_millis() as u64, Ordering::Relaxed);
    }

    /// Set simulated connect latency.
    ///
    /// Connect operations will be delayed by this duration.
    /// Set to `Duration::ZERO` to disable latency simulation.
    pub fn set_connect_latency(&self, latency: Duration) {
        self.connect_latency_ms
            .store(latency.as_millis() as u64, Ordering::Relaxed);
    }

    /// Configure transient failures.
    ///
    /// The device will fail the next `count` operations, then succeed.
    /// This is useful for testing retry logic.
    ///
    /// # Example
    ///
    /// ```
    /// use airthings_core::MockDevice;
    /// use airthings_types::DeviceType;
    ///
    /// let device = MockDevice::new("Test", DeviceType::WavePlus);
    /// // First 3 connect attempts will fail, 4th will succeed
    /// device.set_transient_failures(3);
    /// ```
    pub fn set_transient_failures(&self, count: u32) {
        self.fail_count.store(count, Ordering::Relaxed);
        self.remaining_failures.store(count, Ordering::Relaxed);
    }

    /// Reset transient failure counter.
    pub fn reset_transient_failures(&self) {
        self.remaining_failures
            .store(self.fail_count.load(Ordering::Relaxed), Ordering::Relaxed);
    }

    /// Get the number of remaining transient failures.
    pub fn remaining_failures(&self) -> u32 {
        self.remaining_failures.load(Ordering::Relaxed)
    }
}

// Implement the AirthingsDevice trait for MockDevice
#[async_trait]
impl AirthingsDevice for MockDevice {
    async fn is_connected(&self) -> bool {
        self.is_connected_sync()
    }

    async fn connect(&self) -> Result<()> {
        MockDevice::connect(self).await
    }

    async fn disconnect(&self) -> Result<()> {
        MockDevice::disconnect(self).await
    }

    fn name(&self) -> Option<&str> {
        Some(MockDevice::name(self))
    }

    fn address(&self) -> &str {
        MockDevice::address(self)
    }

    fn serial(&self) -> Option<u32> {
        Some(MockDevice::serial(self))
    }

    fn device_type(&self) -> Option<DeviceType> {
        Some(MockDevice::device_type(self))
    }

    async fn read_sensors(&self) -> Result<SensorReadings> {
        MockDevice::read_sensors(self).await
    }

    async fn read_device_info(&self) -> Result<DeviceInfo> {
        MockDevice::read_device_info(self).await
    }

    async fn read_battery(&self) -> Result<u8> {
        MockDevice::read_battery(self).await
    }

    async fn read_rssi(&self) -> Result<i16> {
        MockDevice::read_rssi(self).await
    }
}

/// Builder for creating mock devices with custom settings.
#[derive(Debug)]
pub struct MockDeviceBuilder {
    name: String,
    device_type: DeviceType,
    humidity: Option<f32>,
    radon_short: Option<u32>,
    radon_long: Option<u32>,
    temperature: Option<f32>,
    pressure: Option<f32>,
    co2: Option<u16>,
    voc: Option<u16>,
    battery: u8,
    auto_connect: bool,
}

impl Default for MockDeviceBuilder {
    fn default() -> Self {
        Self {
            name: "Mock Wave+".to_string(),
            device_type: DeviceType::WavePlus,
            humidity: Some(45.0),
            radon_short: Some(100),
            radon_long: Some(120),
            temperature: Some(22.5),
            pressure: Some(1003.2),
            co2: Some(800),
            voc: Some(150),
            battery: 85,
            auto_connect: true,
        }
    }
}

impl MockDeviceBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the device name.
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Set the device type.
    #[must_use]
    pub fn device_type(mut self, device_type: DeviceType) -> Self {
        self.device_type = device_type;
        self
    }

    /// Set the relative humidity in percent.
    #[must_use]
    pub fn humidity(mut self, humidity: f32) -> Self {
        self.humidity = Some(humidity);
        self
    }

    /// Set the radon levels in Bq/m³.
    #[must_use]
    pub fn radon(mut self, short: u32, long: u32) -> Self {
        self.radon_short = Some(short);
        self.radon_long = Some(long);
        self
    }

    /// Set the temperature in °C.
    #[must_use]
    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Set the pressure in hPa.
    #[must_use]
    pub fn pressure(mut self, pressure: f32) -> Self {
        self.pressure = Some(pressure);
        self
    }

    /// Set the CO2 level in ppm.
    #[must_use]
    pub fn co2(mut self, co2: u16) -> Self {
        self.co2 = Some(co2);
        self
    }

    /// Set the VOC level in ppb.
    #[must_use]
    pub fn voc(mut self, voc: u16) -> Self {
        self.voc = Some(voc);
        self
    }

    /// Set the battery level.
    #[must_use]
    pub fn battery(mut self, battery: u8) -> Self {
        self.battery = battery;
        self
    }

    /// Set whether to auto-connect.
    #[must_use]
    pub fn auto_connect(mut self, auto: bool) -> Self {
        self.auto_connect = auto;
        self
    }

    /// Build the mock device.
    ///
    /// Note: This is a sync method that sets initial state directly.
    /// The device is created with the specified readings already set.
    #[must_use]
    pub fn build(self) -> MockDevice {
        let readings = SensorReadings {
            humidity: self.humidity,
            radon_short: self.radon_short,
            radon_long: self.radon_long,
            temperature: self.temperature,
            pressure: self.pressure,
            co2: self.co2,
            voc: self.voc,
            battery: Some(self.battery),
        };

        let serial = self.device_type.model_number() * 1_000_000 + 123_456;
        MockDevice {
            name: self.name.clone(),
            address: format!("MOCK-{:06X}", rand::random::<u32>() % 0xFFFFFF),
            device_type: self.device_type,
            serial,
            connected: AtomicBool::new(self.auto_connect),
            readings: RwLock::new(readings),
            device_info: RwLock::new(MockDevice::default_info(&self.name, serial)),
            battery: RwLock::new(self.battery),
            rssi: AtomicI16::new(-50),
            read_count: AtomicU32::new(0),
            should_fail: AtomicBool::new(false),
            fail_message: RwLock::new("Mock failure".to_string()),
            read_latency_ms: AtomicU64::new(0),
            connect_latency_ms: AtomicU64::new(0),
            fail_count: AtomicU32::new(0),
            remaining_failures: AtomicU32::new(0),
        }
    }
}
