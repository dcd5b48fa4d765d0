//! Airthings device connection and communication.
//!
//! This module provides the main interface for connecting to and
//! reading from Airthings sensors over Bluetooth Low Energy.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use btleplug::api::{Characteristic, Peripheral as _};
use btleplug::platform::{Adapter, Peripheral};
use tokio::sync::RwLock;
use tokio::time::timeout;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::scan::{ScanOptions, find_device, find_device_with_options, parse_serial_number};
use crate::traits::AirthingsDevice;
use crate::util::{create_identifier, format_peripheral_id};
use airthings_types::uuid::{
    BATTERY_LEVEL, DEVICE_NAME, FIRMWARE_REVISION, HARDWARE_REVISION, MANUFACTURER_ID,
    MANUFACTURER_NAME, MODEL_NUMBER, SERIAL_NUMBER, WAVE2_CURRENT_VALUES,
    WAVE_MINI_CURRENT_VALUES, WAVE_PLUS_CURRENT_VALUES,
};
use airthings_types::{DeviceInfo, DeviceType, SensorReadings};

/// Default timeout for BLE characteristic read operations.
const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Default timeout for BLE connection operations.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Default timeout for service discovery.
const DEFAULT_DISCOVERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for BLE connection timeouts.
///
/// Use this to customize timeout values for different environments,
/// for example longer timeouts through concrete walls or RF interference.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Timeout for establishing a BLE connection.
    pub connection_timeout: Duration,
    /// Timeout for BLE read operations.
    pub read_timeout: Duration,
    /// Timeout for service discovery after connection.
    pub discovery_timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            connection_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            discovery_timeout: DEFAULT_DISCOVERY_TIMEOUT,
        }
    }
}

impl ConnectionConfig {
    /// Create a new connection config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the connection timeout.
    #[must_use]
    pub fn connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Set the read timeout.
    #[must_use]
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Set the service discovery timeout.
    #[must_use]
    pub fn discovery_timeout(mut self, timeout: Duration) -> Self {
        self.discovery_timeout = timeout;
        self
    }
}

/// Represents a connected Airthings device.
///
/// # Note on Clone
///
/// This struct intentionally does not implement `Clone`. A `Device`
/// represents an active BLE connection with associated state. If you need to
/// share a device across multiple tasks, wrap it in `Arc<Device>`.
///
/// # Cleanup
///
/// Call [`Device::disconnect`] before dropping the device to properly release
/// BLE resources. If a Device is dropped without disconnecting, a warning is
/// logged and a best-effort cleanup is attempted.
pub struct Device {
    /// Kept alive for the lifetime of the peripheral connection; the
    /// peripheral may hold internal references to the adapter.
    #[allow(dead_code)]
    adapter: Adapter,
    /// The underlying BLE peripheral.
    peripheral: Peripheral,
    /// Cached device name.
    name: Option<String>,
    /// Device address or identifier (MAC address on Linux/Windows, UUID on macOS).
    address: String,
    /// Serial number parsed from the advertisement, if present.
    serial: Option<u32>,
    /// Detected device type.
    device_type: Option<DeviceType>,
    /// Cache of discovered characteristics by UUID for O(1) lookup.
    characteristics_cache: RwLock<HashMap<Uuid, Characteristic>>,
    /// Whether disconnect has been called (for Drop warning).
    disconnected: AtomicBool,
    /// Connection configuration (timeouts).
    config: ConnectionConfig,
}

impl std::fmt::Debug for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Device")
            .field("name", &self.name)
            .field("address", &self.address)
            .field("serial", &self.serial)
            .field("device_type", &self.device_type)
            .finish_non_exhaustive()
    }
}

impl Device {
    /// Connect to an Airthings device by MAC address, peripheral ID, or name.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use airthings_core::Device;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let device = Device::connect("AA:BB:CC:DD:EE:FF").await?;
    ///     let readings = device.read_sensors().await?;
    ///     println!("{:?}", readings);
    ///     device.disconnect().await?;
    ///     Ok(())
    /// }
    /// ```
    #[tracing::instrument(level = "info", skip_all, fields(identifier = %identifier))]
    pub async fn connect(identifier: &str) -> Result<Self> {
        Self::connect_with_config(identifier, ConnectionConfig::default()).await
    }

    /// Connect to an Airthings device with full configuration.
    #[tracing::instrument(level = "info", skip_all, fields(identifier = %identifier))]
    pub async fn connect_with_config(identifier: &str, config: ConnectionConfig) -> Result<Self> {
        let options = ScanOptions {
            duration: config.connection_timeout,
            // We're looking for a specific device, not only Airthings ones
            filter_airthings_only: false,
        };

        let (adapter, peripheral) = match find_device(identifier).await {
            Ok(result) => result,
            Err(_) => find_device_with_options(identifier, options).await?,
        };

        Self::from_peripheral_with_config(adapter, peripheral, config).await
    }

    /// Create a Device from an already-discovered peripheral.
    #[tracing::instrument(level = "info", skip_all)]
    pub async fn from_peripheral(adapter: Adapter, peripheral: Peripheral) -> Result<Self> {
        Self::from_peripheral_with_config(adapter, peripheral, ConnectionConfig::default()).await
    }

    /// Create a Device from an already-discovered peripheral with full configuration.
    #[tracing::instrument(level = "info", skip_all, fields(connect_timeout = ?config.connection_timeout))]
    pub async fn from_peripheral_with_config(
        adapter: Adapter,
        peripheral: Peripheral,
        config: ConnectionConfig,
    ) -> Result<Self> {
        info!("Connecting to device...");
        timeout(config.connection_timeout, peripheral.connect())
            .await
            .map_err(|_| Error::timeout("connect to device", config.connection_timeout))??;
        info!("Connected!");

        info!("Discovering services...");
        timeout(config.discovery_timeout, peripheral.discover_services())
            .await
            .map_err(|_| Error::timeout("discover services", config.discovery_timeout))??;

        let services = peripheral.services();
        debug!("Found {} services", services.len());

        // Build characteristics cache for O(1) lookups
        let mut characteristics_cache = HashMap::new();
        for service in &services {
            debug!("  Service: {}", service.uuid);
            for char in &service.characteristics {
                debug!("    Characteristic: {}", char.uuid);
                characteristics_cache.insert(char.uuid, char.clone());
            }
        }

        let properties = peripheral.properties().await?;
        let name = properties.as_ref().and_then(|p| p.local_name.clone());

        // On macOS the address may be 00:00:00:00:00:00, fall back to the
        // peripheral ID
        let address = properties
            .as_ref()
            .map(|p| create_identifier(&p.address.to_string(), &peripheral.id()))
            .unwrap_or_else(|| format_peripheral_id(&peripheral.id()));

        // Determine device type from the advertised serial number, with a
        // fallback probe of the discovered characteristics
        let serial = properties
            .as_ref()
            .and_then(|p| p.manufacturer_data.get(&MANUFACTURER_ID))
            .and_then(|data| parse_serial_number(data));
        let device_type = serial
            .and_then(DeviceType::from_serial)
            .or_else(|| detect_type_from_characteristics(&characteristics_cache));

        Ok(Self {
            adapter,
            peripheral,
            name,
            address,
            serial,
            device_type,
            characteristics_cache: RwLock::new(characteristics_cache),
            disconnected: AtomicBool::new(false),
            config,
        })
    }

    /// Check if the device is connected (queries BLE stack state).
    pub async fn is_connected(&self) -> bool {
        self.peripheral.is_connected().await.unwrap_or(false)
    }

    /// Disconnect from the device.
    #[tracing::instrument(level = "info", skip(self), fields(device_name = ?self.name))]
    pub async fn disconnect(&self) -> Result<()> {
        info!("Disconnecting from device...");
        self.disconnected.store(true, Ordering::SeqCst);
        self.peripheral.disconnect().await?;
        Ok(())
    }

    /// Get the device name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the device address or identifier.
    ///
    /// On Linux and Windows, this returns the Bluetooth MAC address
    /// (e.g., "AA:BB:CC:DD:EE:FF"). On macOS, this returns a UUID identifier
    /// since MAC addresses are not exposed.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Get the serial number parsed from the advertisement, if present.
    pub fn serial(&self) -> Option<u32> {
        self.serial
    }

    /// Get the detected device type.
    pub fn device_type(&self) -> Option<DeviceType> {
        self.device_type
    }

    /// Get the current connection configuration.
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Read the current RSSI (signal strength) of the connection.
    ///
    /// Returns the RSSI in dBm. More negative values indicate weaker signals.
    pub async fn read_rssi(&self) -> Result<i16> {
        let properties = self.peripheral.properties().await?;
        properties
            .and_then(|p| p.rssi)
            .ok_or_else(|| Error::InvalidData("RSSI not available".to_string()))
    }

    /// Find a characteristic by UUID using the cached lookup table.
    async fn find_characteristic(&self, uuid: Uuid) -> Result<Characteristic> {
        let cache = self.characteristics_cache.read().await;
        if let Some(char) = cache.get(&uuid) {
            return Ok(char.clone());
        }

        Err(Error::characteristic_not_found(
            uuid.to_string(),
            self.peripheral.services().len(),
        ))
    }

    /// Read a characteristic value by UUID.
    ///
    /// The read is wrapped in [`ConnectionConfig::read_timeout`] to prevent
    /// indefinite hangs on BLE operations.
    pub async fn read_characteristic(&self, uuid: Uuid) -> Result<Vec<u8>> {
        let characteristic = self.find_characteristic(uuid).await?;
        let data = timeout(self.config.read_timeout, self.peripheral.read(&characteristic))
            .await
            .map_err(|_| {
                Error::timeout(
                    format!("read characteristic {}", uuid),
                    self.config.read_timeout,
                )
            })??;
        Ok(data)
    }

    /// Read and decode the current sensor values.
    ///
    /// Selects the current-values characteristic for the detected device
    /// type, reads it, decodes the payload, and attaches the battery level
    /// when the standard battery service is available.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDevice`] for models without a direct
    /// current-values characteristic (e.g. Corentium Home 2, View Plus) and
    /// for devices whose model could not be detected.
    #[tracing::instrument(level = "debug", skip(self), fields(device_name = ?self.name, device_type = ?self.device_type))]
    pub async fn read_sensors(&self) -> Result<SensorReadings> {
        let device_type = self
            .device_type
            .ok_or_else(|| Error::unsupported_device(self.model_label()))?;

        let characteristic = device_type
            .readings_characteristic()
            .ok_or_else(|| Error::unsupported_device(device_type.product_name()))?;

        let data = self.read_characteristic(characteristic).await?;
        let mut readings = SensorReadings::from_bytes_for_device(&data, device_type)?;

        // Battery is optional; not every model exposes the standard service
        match self.read_battery().await {
            Ok(battery) => readings = readings.with_battery(battery),
            Err(e) => debug!("Battery level not available: {}", e),
        }

        Ok(readings)
    }

    /// Read the battery level (0-100) from the standard battery service.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn read_battery(&self) -> Result<u8> {
        let data = self.read_characteristic(BATTERY_LEVEL).await?;
        if data.is_empty() {
            return Err(Error::InvalidData("Empty battery data".to_string()));
        }
        Ok(data[0])
    }

    /// Read device information.
    ///
    /// Reads all device info characteristics in parallel for better
    /// performance. Missing characteristics yield empty strings.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn read_device_info(&self) -> Result<DeviceInfo> {
        fn read_string(data: Vec<u8>) -> String {
            String::from_utf8(data)
                .unwrap_or_default()
                .trim_end_matches('\0')
                .to_string()
        }

        let (
            name_result,
            model_result,
            serial_result,
            firmware_result,
            hardware_result,
            manufacturer_result,
        ) = tokio::join!(
            self.read_characteristic(DEVICE_NAME),
            self.read_characteristic(MODEL_NUMBER),
            self.read_characteristic(SERIAL_NUMBER),
            self.read_characteristic(FIRMWARE_REVISION),
            self.read_characteristic(HARDWARE_REVISION),
            self.read_characteristic(MANUFACTURER_NAME),
        );

        let name = name_result
            .map(read_string)
            .unwrap_or_else(|_| self.name.clone().unwrap_or_default());
        let model = model_result.map(read_string).unwrap_or_else(|_| {
            self.device_type
                .map(|t| t.model_number().to_string())
                .unwrap_or_default()
        });
        let serial = serial_result.map(read_string).unwrap_or_else(|_| {
            self.serial.map(|s| s.to_string()).unwrap_or_default()
        });
        let firmware = firmware_result.map(read_string).unwrap_or_default();
        let hardware = hardware_result.map(read_string).unwrap_or_default();
        let manufacturer = manufacturer_result.map(read_string).unwrap_or_default();

        Ok(DeviceInfo {
            name,
            model,
            serial,
            firmware,
            hardware,
            manufacturer,
        })
    }

    /// Get the number of cached characteristics.
    ///
    /// Useful for debugging and testing to verify service discovery worked.
    pub async fn cached_characteristic_count(&self) -> usize {
        self.characteristics_cache.read().await.len()
    }

    fn model_label(&self) -> String {
        match self.serial {
            Some(serial) => format!("model {}", serial / 1_000_000),
            None => "unknown model".to_string(),
        }
    }
}

/// Probe the discovered characteristics for a known current-values UUID.
///
/// Used when the device type could not be derived from the advertisement,
/// e.g. when connecting directly by address without catching an advertisement
/// that carries manufacturer data.
fn detect_type_from_characteristics(
    characteristics: &HashMap<Uuid, Characteristic>,
) -> Option<DeviceType> {
    if characteristics.contains_key(&WAVE_PLUS_CURRENT_VALUES) {
        Some(DeviceType::WavePlus)
    } else if characteristics.contains_key(&WAVE2_CURRENT_VALUES) {
        Some(DeviceType::Wave2)
    } else if characteristics.contains_key(&WAVE_MINI_CURRENT_VALUES) {
        Some(DeviceType::WaveMini)
    } else {
        None
    }
}

// NOTE: Drop performs best-effort cleanup if disconnect() was not called.
// The cleanup is spawned as a background task and may not complete during
// shutdown. For reliable cleanup, callers SHOULD explicitly call
// `device.disconnect().await` before dropping the Device.
impl Drop for Device {
    fn drop(&mut self) {
        if !self.disconnected.load(Ordering::SeqCst) {
            self.disconnected.store(true, Ordering::SeqCst);

            warn!(
                device_name = ?self.name,
                device_address = %self.address,
                "Device dropped without calling disconnect() - performing best-effort cleanup"
            );

            let peripheral = self.peripheral.clone();
            let address = self.address.clone();

            // May fail if the runtime is shutting down
            if let Ok(handle) = tokio::runtime::Handle::try_current() {
                handle.spawn(async move {
                    if let Err(e) = peripheral.disconnect().await {
                        debug!(
                            device_address = %address,
                            error = %e,
                            "Best-effort disconnect failed (device may already be disconnected)"
                        );
                    }
                });
            }
        }
    }
}

#[async_trait]
impl AirthingsDevice for Device {
    async fn is_connected(&self) -> bool {
        Device::is_connected(self).await
    }

    async fn disconnect(&self) -> Result<()> {
        Device::disconnect(self).await
    }

    fn name(&self) -> Option<&str> {
        Device::name(self)
    }

    fn address(&self) -> &str {
        Device::address(self)
    }

    fn serial(&self) -> Option<u32> {
        Device::serial(self)
    }

    fn device_type(&self) -> Option<DeviceType> {
        Device::device_type(self)
    }

    async fn read_sensors(&self) -> Result<SensorReadings> {
        Device::read_sensors(self).await
    }

    async fn read_device_info(&self) -> Result<DeviceInfo> {
        Device::read_device_info(self).await
    }

    async fn read_battery(&self) -> Result<u8> {
        Device::read_battery(self).await
    }

    async fn read_rssi(&self) -> Result<i16> {
        Device::read_rssi(self).await
    }
}
