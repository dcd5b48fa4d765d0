//! Device discovery and scanning.
//!
//! This module provides functionality to scan for Airthings devices
//! using Bluetooth Low Energy.
//!
//! Airthings devices are recognized by the Airthings manufacturer ID
//! (0x0334) in their advertisements. The manufacturer data carries the
//! device serial number, whose 4-digit prefix identifies the model.

use std::time::Duration;

use btleplug::api::{Central, Manager as _, Peripheral as _, PeripheralProperties, ScanFilter};
use btleplug::platform::{Adapter, Manager, Peripheral, PeripheralId};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::util::{create_identifier, format_peripheral_id, normalize_address};
use airthings_types::DeviceType;
use airthings_types::uuid::{
    MANUFACTURER_ID, WAVE2_SERVICE, WAVE_MINI_SERVICE, WAVE_PLUS_SERVICE,
};

/// Information about a discovered Airthings device.
#[derive(Debug, Clone)]
pub struct DiscoveredDevice {
    /// The advertised device name.
    pub name: Option<String>,
    /// The peripheral ID for connecting.
    pub id: PeripheralId,
    /// The BLE address as a string (may be zeros on macOS, use `id` instead).
    pub address: String,
    /// A connection identifier (peripheral ID on macOS, address on other platforms).
    pub identifier: String,
    /// RSSI signal strength.
    pub rssi: Option<i16>,
    /// Serial number parsed from the manufacturer data, if present.
    pub serial: Option<u32>,
    /// Device type derived from the serial number.
    pub device_type: Option<DeviceType>,
    /// Whether the device identified itself as an Airthings device.
    pub is_airthings: bool,
    /// Raw Airthings manufacturer data from the advertisement (if available).
    pub manufacturer_data: Option<Vec<u8>>,
}

/// Options for scanning.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// How long to scan for devices.
    pub duration: Duration,
    /// Only return devices that appear to be Airthings devices.
    pub filter_airthings_only: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(8),
            filter_airthings_only: true,
        }
    }
}

impl ScanOptions {
    /// Create new scan options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scan duration.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set scan duration in seconds.
    pub fn duration_secs(mut self, secs: u64) -> Self {
        self.duration = Duration::from_secs(secs);
        self
    }

    /// Set whether to filter for Airthings devices only.
    pub fn filter_airthings_only(mut self, filter: bool) -> Self {
        self.filter_airthings_only = filter;
        self
    }

    /// Scan for all BLE devices, not just Airthings.
    pub fn all_devices(self) -> Self {
        self.filter_airthings_only(false)
    }
}

/// Get the first available Bluetooth adapter.
pub async fn get_adapter() -> Result<Adapter> {
    use crate::error::DeviceNotFoundReason;

    let manager = Manager::new().await?;
    let adapters = manager.adapters().await?;

    adapters
        .into_iter()
        .next()
        .ok_or(Error::DeviceNotFound(DeviceNotFoundReason::NoAdapter))
}

/// Scan for Airthings devices in range.
///
/// Returns a list of discovered devices, or an error if the scan failed.
/// An empty list indicates no devices were found (not an error).
///
/// # Errors
///
/// Returns an error if:
/// - No Bluetooth adapter is available
/// - Bluetooth is not enabled
/// - The scan could not be started or stopped
pub async fn scan_for_devices() -> Result<Vec<DiscoveredDevice>> {
    scan_with_options(ScanOptions::default()).await
}

/// Scan for devices with custom options.
pub async fn scan_with_options(options: ScanOptions) -> Result<Vec<DiscoveredDevice>> {
    let adapter = get_adapter().await?;
    scan_with_adapter(&adapter, options).await
}

/// Scan for devices with retry logic for flaky Bluetooth environments.
///
/// This function will retry the scan up to `max_retries` times if:
/// - The scan fails due to a Bluetooth error
/// - No devices are found (when `retry_on_empty` is true)
///
/// A delay is applied between retries, starting at 500ms and doubling each
/// attempt, capped at 5 seconds.
pub async fn scan_with_retry(
    options: ScanOptions,
    max_retries: u32,
    retry_on_empty: bool,
) -> Result<Vec<DiscoveredDevice>> {
    let mut attempt = 0;
    let mut delay = Duration::from_millis(500);

    loop {
        match scan_with_options(options.clone()).await {
            Ok(devices) if devices.is_empty() && retry_on_empty && attempt < max_retries => {
                attempt += 1;
                warn!("No devices found, retrying ({}/{})...", attempt, max_retries);
                sleep(delay).await;
                delay = delay.saturating_mul(2).min(Duration::from_secs(5));
            }
            Ok(devices) => return Ok(devices),
            Err(e) if attempt < max_retries => {
                attempt += 1;
                warn!("Scan failed ({}), retrying ({}/{})...", e, attempt, max_retries);
                sleep(delay).await;
                delay = delay.saturating_mul(2).min(Duration::from_secs(5));
            }
            Err(e) => return Err(e),
        }
    }
}

/// Scan for devices using a specific adapter.
pub async fn scan_with_adapter(
    adapter: &Adapter,
    options: ScanOptions,
) -> Result<Vec<DiscoveredDevice>> {
    info!(
        "Starting BLE scan for {} seconds...",
        options.duration.as_secs()
    );

    adapter.start_scan(ScanFilter::default()).await?;
    sleep(options.duration).await;
    adapter.stop_scan().await?;

    let peripherals = adapter.peripherals().await?;
    let mut discovered = Vec::new();

    for peripheral in peripherals {
        match process_peripheral(&peripheral, options.filter_airthings_only).await {
            Ok(Some(device)) => {
                info!(
                    "Found Airthings device: {:?} ({:?})",
                    device.name, device.device_type
                );
                discovered.push(device);
            }
            Ok(None) => {
                // Not an Airthings device or filtered out
            }
            Err(e) => {
                debug!("Error processing peripheral: {}", e);
            }
        }
    }

    info!("Scan complete. Found {} device(s)", discovered.len());
    Ok(discovered)
}

/// Process a peripheral and determine if it's an Airthings device.
async fn process_peripheral(
    peripheral: &Peripheral,
    filter_airthings_only: bool,
) -> Result<Option<DiscoveredDevice>> {
    let properties = peripheral.properties().await?;
    let properties = match properties {
        Some(p) => p,
        None => return Ok(None),
    };

    let is_airthings = is_airthings_device(&properties);
    if filter_airthings_only && !is_airthings {
        return Ok(None);
    }

    let id = peripheral.id();
    let address = properties.address.to_string();
    let name = properties.local_name.clone();
    let rssi = properties.rssi;

    let manufacturer_data = properties.manufacturer_data.get(&MANUFACTURER_ID).cloned();
    let serial = manufacturer_data
        .as_deref()
        .and_then(parse_serial_number);
    let device_type = serial.and_then(DeviceType::from_serial);

    // Use peripheral ID string on macOS (where the address is all zeros),
    // the address everywhere else
    let identifier = create_identifier(&address, &id);

    Ok(Some(DiscoveredDevice {
        name,
        id,
        address,
        identifier,
        rssi,
        serial,
        device_type,
        is_airthings,
        manufacturer_data,
    }))
}

/// Parse the device serial number from Airthings manufacturer data.
///
/// The advertisement carries 6 bytes of manufacturer data; the first four
/// are the serial number as a little-endian u32. Serial numbers are 10
/// digits, the first four of which encode the model.
pub fn parse_serial_number(data: &[u8]) -> Option<u32> {
    if data.len() < 4 {
        return None;
    }
    let serial = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    // A valid serial is 10 digits
    if serial >= 1_000_000_000 {
        Some(serial)
    } else {
        None
    }
}

/// Check if a peripheral is an Airthings device based on its properties.
pub fn is_airthings_device(properties: &PeripheralProperties) -> bool {
    // Check manufacturer data for the Airthings manufacturer ID
    if properties.manufacturer_data.contains_key(&MANUFACTURER_ID) {
        return true;
    }

    // Check advertised and service-data UUIDs for Airthings services
    let airthings_services = [WAVE_PLUS_SERVICE, WAVE2_SERVICE, WAVE_MINI_SERVICE];
    for service_uuid in properties.service_data.keys() {
        if airthings_services.contains(service_uuid) {
            return true;
        }
    }
    for service_uuid in &properties.services {
        if airthings_services.contains(service_uuid) {
            return true;
        }
    }

    // Check device name
    if let Some(name) = &properties.local_name {
        let name_lower = name.to_lowercase();
        if name_lower.contains("airthings") || name_lower.contains("corentium") {
            return true;
        }
    }

    false
}

/// Find a specific device by address, peripheral ID, or name.
pub async fn find_device(identifier: &str) -> Result<(Adapter, Peripheral)> {
    find_device_with_options(identifier, ScanOptions::default()).await
}

/// Find a specific device by address, peripheral ID, or name with custom options.
///
/// This function uses a retry strategy to improve reliability:
/// 1. First checks if the device is already known (cached from previous scans)
/// 2. Performs up to 3 scan attempts with increasing durations
///
/// This helps with BLE reliability issues where devices may not appear
/// on every scan due to advertisement timing.
pub async fn find_device_with_options(
    identifier: &str,
    options: ScanOptions,
) -> Result<(Adapter, Peripheral)> {
    let adapter = get_adapter().await?;
    let identifier_lower = identifier.to_lowercase();

    info!("Looking for device: {}", identifier);

    // Check if device is already known (cached from previous scans)
    if let Some(peripheral) = find_peripheral_by_identifier(&adapter, &identifier_lower).await? {
        info!("Found device in cache (no scan needed)");
        return Ok((adapter, peripheral));
    }

    // BLE advertisements can be missed due to timing, so try multiple times
    // with increasing scan durations
    let max_attempts: u32 = 3;
    let base_duration = options.duration.as_millis() as u64 / 2;
    let base_duration = Duration::from_millis(base_duration.max(2000));

    for attempt in 1..=max_attempts {
        let scan_duration = base_duration * attempt;
        info!(
            "Scan attempt {}/{} ({}s)...",
            attempt,
            max_attempts,
            scan_duration.as_secs()
        );

        adapter.start_scan(ScanFilter::default()).await?;
        sleep(scan_duration).await;
        adapter.stop_scan().await?;

        if let Some(peripheral) =
            find_peripheral_by_identifier(&adapter, &identifier_lower).await?
        {
            info!("Found device on attempt {}", attempt);
            return Ok((adapter, peripheral));
        }

        if attempt < max_attempts {
            warn!("Device not found, retrying...");
        }
    }

    warn!(
        "Device not found after {} attempts: {}",
        max_attempts, identifier
    );
    Err(Error::device_not_found(identifier))
}

/// Search through known peripherals to find one matching the identifier.
async fn find_peripheral_by_identifier(
    adapter: &Adapter,
    identifier_lower: &str,
) -> Result<Option<Peripheral>> {
    let peripherals = adapter.peripherals().await?;

    for peripheral in peripherals {
        if let Ok(Some(props)) = peripheral.properties().await {
            let address = props.address.to_string().to_lowercase();
            let peripheral_id = format_peripheral_id(&peripheral.id()).to_lowercase();

            // Check peripheral ID match (macOS uses UUIDs)
            if peripheral_id.contains(identifier_lower) {
                debug!("Matched by peripheral ID: {}", peripheral_id);
                return Ok(Some(peripheral));
            }

            // Check address match (Linux/Windows use MAC addresses),
            // accepting colon-less form
            if address != "00:00:00:00:00:00"
                && normalize_address(&address) == normalize_address(identifier_lower)
            {
                debug!("Matched by address: {}", address);
                return Ok(Some(peripheral));
            }

            // Check name match (partial match supported)
            if let Some(name) = &props.local_name
                && name.to_lowercase().contains(identifier_lower)
            {
                debug!("Matched by name: {}", name);
                return Ok(Some(peripheral));
            }
        }
    }

    Ok(None)
}
