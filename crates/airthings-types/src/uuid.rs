//! Bluetooth UUIDs for Airthings devices.
//!
//! This module contains the UUIDs needed to identify and communicate with
//! Airthings sensors over Bluetooth Low Energy.

use uuid::{Uuid, uuid};

// --- Airthings Service UUIDs ---

/// Airthings manufacturer ID for BLE advertisements.
pub const MANUFACTURER_ID: u16 = 0x0334;

/// Wave Plus sensor service.
pub const WAVE_PLUS_SERVICE: Uuid = uuid!("b42e1c08-ade7-11e4-89d3-123b93f75cba");

/// Wave (2nd gen) sensor service.
pub const WAVE2_SERVICE: Uuid = uuid!("b42e4a8e-ade7-11e4-89d3-123b93f75cba");

/// Wave Mini sensor service.
pub const WAVE_MINI_SERVICE: Uuid = uuid!("b42e3882-ade7-11e4-89d3-123b93f75cba");

// --- Airthings Characteristic UUIDs ---

/// Current sensor values characteristic - Wave Plus.
pub const WAVE_PLUS_CURRENT_VALUES: Uuid = uuid!("b42e2a68-ade7-11e4-89d3-123b93f75cba");

/// Current sensor values characteristic - Wave (2nd gen).
pub const WAVE2_CURRENT_VALUES: Uuid = uuid!("b42e4dcc-ade7-11e4-89d3-123b93f75cba");

/// Current sensor values characteristic - Wave Mini.
pub const WAVE_MINI_CURRENT_VALUES: Uuid = uuid!("b42e3b98-ade7-11e4-89d3-123b93f75cba");

// --- Standard BLE Service UUIDs ---

/// Generic Access Profile (GAP) service.
pub const GAP_SERVICE: Uuid = uuid!("00001800-0000-1000-8000-00805f9b34fb");

/// Device Information service.
pub const DEVICE_INFO_SERVICE: Uuid = uuid!("0000180a-0000-1000-8000-00805f9b34fb");

/// Battery service.
pub const BATTERY_SERVICE: Uuid = uuid!("0000180f-0000-1000-8000-00805f9b34fb");

// --- Device Information Characteristic UUIDs ---

/// Device name characteristic.
pub const DEVICE_NAME: Uuid = uuid!("00002a00-0000-1000-8000-00805f9b34fb");

/// Model number string characteristic.
pub const MODEL_NUMBER: Uuid = uuid!("00002a24-0000-1000-8000-00805f9b34fb");

/// Serial number string characteristic.
pub const SERIAL_NUMBER: Uuid = uuid!("00002a25-0000-1000-8000-00805f9b34fb");

/// Firmware revision string characteristic.
pub const FIRMWARE_REVISION: Uuid = uuid!("00002a26-0000-1000-8000-00805f9b34fb");

/// Hardware revision string characteristic.
pub const HARDWARE_REVISION: Uuid = uuid!("00002a27-0000-1000-8000-00805f9b34fb");

/// Manufacturer name string characteristic.
pub const MANUFACTURER_NAME: Uuid = uuid!("00002a29-0000-1000-8000-00805f9b34fb");

// --- Battery Characteristic UUIDs ---

/// Battery level characteristic.
pub const BATTERY_LEVEL: Uuid = uuid!("00002a19-0000-1000-8000-00805f9b34fb");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manufacturer_id() {
        // Airthings AS company identifier
        assert_eq!(MANUFACTURER_ID, 0x0334);
        assert_eq!(MANUFACTURER_ID, 820);
    }

    #[test]
    fn test_current_values_uuids_are_distinct() {
        assert_ne!(WAVE_PLUS_CURRENT_VALUES, WAVE2_CURRENT_VALUES);
        assert_ne!(WAVE2_CURRENT_VALUES, WAVE_MINI_CURRENT_VALUES);
        assert_ne!(WAVE_PLUS_CURRENT_VALUES, WAVE_MINI_CURRENT_VALUES);
    }

    #[test]
    fn test_service_uuids_are_distinct() {
        assert_ne!(WAVE_PLUS_SERVICE, WAVE2_SERVICE);
        assert_ne!(WAVE2_SERVICE, WAVE_MINI_SERVICE);
    }

    #[test]
    fn test_airthings_characteristic_prefix() {
        // All Airthings-specific UUIDs share the b42e prefix
        let airthings_uuids = [
            WAVE_PLUS_SERVICE,
            WAVE2_SERVICE,
            WAVE_MINI_SERVICE,
            WAVE_PLUS_CURRENT_VALUES,
            WAVE2_CURRENT_VALUES,
            WAVE_MINI_CURRENT_VALUES,
        ];

        for uuid in airthings_uuids {
            assert!(
                uuid.to_string().starts_with("b42e"),
                "UUID {} should start with b42e",
                uuid
            );
        }
    }

    #[test]
    fn test_standard_ble_characteristic_prefix() {
        // Standard BLE characteristics use 16-bit UUIDs (00002aXX)
        let standard_uuids = [
            DEVICE_NAME,
            MODEL_NUMBER,
            SERIAL_NUMBER,
            FIRMWARE_REVISION,
            HARDWARE_REVISION,
            MANUFACTURER_NAME,
            BATTERY_LEVEL,
        ];

        for uuid in standard_uuids {
            assert!(
                uuid.to_string().starts_with("00002a"),
                "UUID {} should start with 00002a",
                uuid
            );
        }
    }
}
