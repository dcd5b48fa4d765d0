//! Core types for Airthings sensor data.

use core::fmt;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Radon readings above this raw value are sensor error markers, not
/// concentrations.
const RADON_MAX_VALID: u16 = 16383;

/// Type of Airthings device.
///
/// Airthings serial numbers are 10 digits; the first four digits encode the
/// model. `DeviceType` is derived from that prefix, which is carried in the
/// manufacturer data of every Airthings BLE advertisement.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new device types
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum DeviceType {
    /// Airthings Wave (1st gen) radon sensor.
    Wave,
    /// Airthings Wave Mini temperature, humidity, and VOC sensor.
    WaveMini,
    /// Airthings Wave Plus radon, CO2, and VOC sensor.
    WavePlus,
    /// Airthings Wave (2nd gen) radon sensor.
    Wave2,
    /// Airthings View Plus display unit.
    ViewPlus,
    /// Airthings Corentium Home 2 radon sensor.
    CorentiumHome2,
}

impl DeviceType {
    /// Detect the device type from a 10-digit serial number.
    ///
    /// # Examples
    ///
    /// ```
    /// use airthings_types::DeviceType;
    ///
    /// assert_eq!(DeviceType::from_serial(2930123456), Some(DeviceType::WavePlus));
    /// assert_eq!(DeviceType::from_serial(2950000001), Some(DeviceType::Wave2));
    /// assert_eq!(DeviceType::from_serial(1234567890), None);
    /// ```
    #[must_use]
    pub fn from_serial(serial: u32) -> Option<Self> {
        Self::from_model_number(serial / 1_000_000)
    }

    /// Detect the device type from a 4-digit model number.
    #[must_use]
    pub fn from_model_number(model: u32) -> Option<Self> {
        match model {
            2410 => Some(DeviceType::CorentiumHome2),
            2900 => Some(DeviceType::Wave),
            2920 => Some(DeviceType::WaveMini),
            2930 => Some(DeviceType::WavePlus),
            2950 => Some(DeviceType::Wave2),
            2960 => Some(DeviceType::ViewPlus),
            _ => None,
        }
    }

    /// The 4-digit model number prefix for this device type.
    #[must_use]
    pub fn model_number(&self) -> u32 {
        match self {
            DeviceType::CorentiumHome2 => 2410,
            DeviceType::Wave => 2900,
            DeviceType::WaveMini => 2920,
            DeviceType::WavePlus => 2930,
            DeviceType::Wave2 => 2950,
            DeviceType::ViewPlus => 2960,
        }
    }

    /// The marketing name of the product.
    #[must_use]
    pub fn product_name(&self) -> &'static str {
        match self {
            DeviceType::CorentiumHome2 => "Corentium Home 2",
            DeviceType::Wave => "Airthings Wave",
            DeviceType::WaveMini => "Airthings Wave Mini",
            DeviceType::WavePlus => "Airthings Wave+",
            DeviceType::Wave2 => "Airthings Wave (2nd gen)",
            DeviceType::ViewPlus => "Airthings View Plus",
        }
    }

    /// Whether current sensor values can be read from a single GATT
    /// characteristic on this device.
    ///
    /// Newer devices (Corentium Home 2, View Plus) use a command/response
    /// protocol instead and are reported as unsupported.
    #[must_use]
    pub fn is_readable(&self) -> bool {
        matches!(
            self,
            DeviceType::WaveMini | DeviceType::WavePlus | DeviceType::Wave2
        )
    }

    /// Returns the BLE characteristic UUID holding the current sensor values,
    /// if this device exposes one.
    #[must_use]
    pub fn readings_characteristic(&self) -> Option<uuid::Uuid> {
        match self {
            DeviceType::WaveMini => Some(crate::uuid::WAVE_MINI_CURRENT_VALUES),
            DeviceType::WavePlus => Some(crate::uuid::WAVE_PLUS_CURRENT_VALUES),
            DeviceType::Wave2 => Some(crate::uuid::WAVE2_CURRENT_VALUES),
            _ => None,
        }
    }
}

impl TryFrom<u32> for DeviceType {
    type Error = ParseError;

    /// Convert a 4-digit model number to a `DeviceType`.
    fn try_from(model: u32) -> Result<Self, Self::Error> {
        Self::from_model_number(model).ok_or(ParseError::UnknownModel(model))
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.product_name())
    }
}

/// Minimum number of bytes in a Wave Plus current-values payload.
pub const MIN_WAVE_PLUS_BYTES: usize = 20;

/// Minimum number of bytes in a Wave (2nd gen) current-values payload.
pub const MIN_WAVE2_BYTES: usize = 20;

/// Minimum number of bytes in a Wave Mini current-values payload.
pub const MIN_WAVE_MINI_BYTES: usize = 16;

/// Current sensor values from an Airthings device.
///
/// Every field is optional; a device populates only the sensors it carries:
/// - **Wave Plus**: humidity, radon, temperature, pressure, CO2, VOC
/// - **Wave (2nd gen)**: humidity, radon, temperature
/// - **Wave Mini**: humidity, temperature, VOC
///
/// Radon concentrations are reported in Bq/m³ (metric). Use
/// [`radon_bq_to_pci`] for pCi/L display.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorReadings {
    /// Relative humidity percentage (0-100).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub humidity: Option<f32>,
    /// Radon short-term (24h) average in Bq/m³.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub radon_short: Option<u32>,
    /// Radon long-term average in Bq/m³.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub radon_long: Option<u32>,
    /// Temperature in degrees Celsius.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub temperature: Option<f32>,
    /// Atmospheric pressure in hPa.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub pressure: Option<f32>,
    /// CO2 concentration in ppm.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub co2: Option<u16>,
    /// Total VOC concentration in ppb.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub voc: Option<u16>,
    /// Battery level percentage (0-100), when the device exposes the
    /// standard battery service.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub battery: Option<u8>,
}

/// Convert a radon concentration from Bq/m³ to pCi/L.
#[must_use]
pub fn radon_bq_to_pci(bq: u32) -> f64 {
    f64::from(bq) / 37.0
}

/// Radon values above 16383 are error markers; map them to `None`.
fn radon_value(raw: u16) -> Option<u32> {
    if raw <= RADON_MAX_VALID {
        Some(u32::from(raw))
    } else {
        None
    }
}

impl SensorReadings {
    /// Parse `SensorReadings` from a Wave Plus current-values payload.
    ///
    /// The 20-byte format is:
    /// - byte 0: payload version (must be 1)
    /// - byte 1: humidity (u8, divide by 2 for percent)
    /// - bytes 2-3: reserved
    /// - bytes 4-5: radon short-term average (u16 LE, Bq/m³)
    /// - bytes 6-7: radon long-term average (u16 LE, Bq/m³)
    /// - bytes 8-9: temperature (u16 LE, divide by 100 for Celsius)
    /// - bytes 10-11: pressure (u16 LE, divide by 50 for hPa)
    /// - bytes 12-13: CO2 (u16 LE, ppm)
    /// - bytes 14-15: VOC (u16 LE, ppb)
    /// - bytes 16-19: reserved
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InsufficientBytes`] for payloads shorter than
    /// [`MIN_WAVE_PLUS_BYTES`] and [`ParseError::InvalidValue`] for an
    /// unknown payload version.
    #[must_use = "parsing returns a Result that should be handled"]
    pub fn from_bytes_wave_plus(data: &[u8]) -> Result<Self, ParseError> {
        use bytes::Buf;

        if data.len() < MIN_WAVE_PLUS_BYTES {
            return Err(ParseError::InsufficientBytes {
                expected: MIN_WAVE_PLUS_BYTES,
                actual: data.len(),
            });
        }

        let mut buf = data;
        let version = buf.get_u8();
        if version != 1 {
            return Err(ParseError::InvalidValue(format!(
                "unknown Wave Plus payload version {version}"
            )));
        }

        let humidity_raw = buf.get_u8();
        buf.advance(2);
        let radon_short = buf.get_u16_le();
        let radon_long = buf.get_u16_le();
        let temp_raw = buf.get_u16_le();
        let pressure_raw = buf.get_u16_le();
        let co2 = buf.get_u16_le();
        let voc = buf.get_u16_le();

        Ok(SensorReadings {
            humidity: Some(f32::from(humidity_raw) / 2.0),
            radon_short: radon_value(radon_short),
            radon_long: radon_value(radon_long),
            temperature: Some(f32::from(temp_raw) / 100.0),
            pressure: Some(f32::from(pressure_raw) / 50.0),
            co2: Some(co2),
            voc: Some(voc),
            battery: None,
        })
    }

    /// Parse `SensorReadings` from a Wave (2nd gen) current-values payload.
    ///
    /// Shares the Wave Plus prefix layout but only humidity, radon, and
    /// temperature carry meaningful values.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InsufficientBytes`] for payloads shorter than
    /// [`MIN_WAVE2_BYTES`] and [`ParseError::InvalidValue`] for an unknown
    /// payload version.
    #[must_use = "parsing returns a Result that should be handled"]
    pub fn from_bytes_wave2(data: &[u8]) -> Result<Self, ParseError> {
        use bytes::Buf;

        if data.len() < MIN_WAVE2_BYTES {
            return Err(ParseError::InsufficientBytes {
                expected: MIN_WAVE2_BYTES,
                actual: data.len(),
            });
        }

        let mut buf = data;
        let version = buf.get_u8();
        if version != 1 {
            return Err(ParseError::InvalidValue(format!(
                "unknown Wave payload version {version}"
            )));
        }

        let humidity_raw = buf.get_u8();
        buf.advance(2);
        let radon_short = buf.get_u16_le();
        let radon_long = buf.get_u16_le();
        let temp_raw = buf.get_u16_le();

        Ok(SensorReadings {
            humidity: Some(f32::from(humidity_raw) / 2.0),
            radon_short: radon_value(radon_short),
            radon_long: radon_value(radon_long),
            temperature: Some(f32::from(temp_raw) / 100.0),
            pressure: None,
            co2: None,
            voc: None,
            battery: None,
        })
    }

    /// Parse `SensorReadings` from a Wave Mini current-values payload.
    ///
    /// The 16-byte format is:
    /// - bytes 0-1: reserved
    /// - bytes 2-3: temperature (u16 LE, Kelvin x100)
    /// - bytes 4-5: reserved
    /// - bytes 6-7: humidity (u16 LE, divide by 100 for percent)
    /// - bytes 8-9: VOC (u16 LE, ppb)
    /// - bytes 10-15: reserved
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InsufficientBytes`] for payloads shorter than
    /// [`MIN_WAVE_MINI_BYTES`].
    #[must_use = "parsing returns a Result that should be handled"]
    pub fn from_bytes_wave_mini(data: &[u8]) -> Result<Self, ParseError> {
        use bytes::Buf;

        if data.len() < MIN_WAVE_MINI_BYTES {
            return Err(ParseError::InsufficientBytes {
                expected: MIN_WAVE_MINI_BYTES,
                actual: data.len(),
            });
        }

        let mut buf = data;
        buf.advance(2);
        let temp_kelvin_raw = buf.get_u16_le();
        buf.advance(2);
        let humidity_raw = buf.get_u16_le();
        let voc = buf.get_u16_le();

        Ok(SensorReadings {
            humidity: Some(f32::from(humidity_raw) / 100.0),
            radon_short: None,
            radon_long: None,
            temperature: Some(f32::from(temp_kelvin_raw) / 100.0 - 273.15),
            pressure: None,
            co2: None,
            voc: Some(voc),
            battery: None,
        })
    }

    /// Parse `SensorReadings` from raw bytes based on device type.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnsupportedDevice`] for device types without a
    /// direct current-values characteristic, or the decoder's error for
    /// malformed payloads.
    #[must_use = "parsing returns a Result that should be handled"]
    pub fn from_bytes_for_device(
        data: &[u8],
        device_type: DeviceType,
    ) -> Result<Self, ParseError> {
        match device_type {
            DeviceType::WavePlus => Self::from_bytes_wave_plus(data),
            DeviceType::Wave2 => Self::from_bytes_wave2(data),
            DeviceType::WaveMini => Self::from_bytes_wave_mini(data),
            other => Err(ParseError::UnsupportedDevice(
                other.product_name().to_string(),
            )),
        }
    }

    /// Set the battery level.
    #[must_use]
    pub fn with_battery(mut self, battery: u8) -> Self {
        self.battery = Some(battery);
        self
    }

    /// A sorted sensor-name to numeric-value view of the populated readings.
    ///
    /// Names follow the Airthings app conventions; iteration order is
    /// alphabetical, matching the display order of the CLI.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        let mut map = BTreeMap::new();
        if let Some(v) = self.battery {
            map.insert("battery", f64::from(v));
        }
        if let Some(v) = self.co2 {
            map.insert("co2", f64::from(v));
        }
        if let Some(v) = self.humidity {
            map.insert("humidity", f64::from(v));
        }
        if let Some(v) = self.pressure {
            map.insert("pressure", f64::from(v));
        }
        if let Some(v) = self.radon_long {
            map.insert("radon_long_term_avg", f64::from(v));
        }
        if let Some(v) = self.radon_short {
            map.insert("radon_short_term_avg", f64::from(v));
        }
        if let Some(v) = self.temperature {
            map.insert("temperature", f64::from(v));
        }
        if let Some(v) = self.voc {
            map.insert("voc", f64::from(v));
        }
        map
    }
}

/// Device information from an Airthings sensor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceInfo {
    /// Device name.
    pub name: String,
    /// Model number.
    pub model: String,
    /// Serial number.
    pub serial: String,
    /// Firmware version.
    pub firmware: String,
    /// Hardware revision.
    pub hardware: String,
    /// Manufacturer name.
    pub manufacturer: String,
}

impl DeviceInfo {
    /// Create a builder for constructing `DeviceInfo`.
    pub fn builder() -> DeviceInfoBuilder {
        DeviceInfoBuilder::default()
    }
}

/// Builder for constructing `DeviceInfo`.
#[derive(Debug, Default, Clone)]
#[must_use]
pub struct DeviceInfoBuilder {
    info: DeviceInfo,
}

impl DeviceInfoBuilder {
    /// Set the device name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.info.name = name.into();
        self
    }

    /// Set the model number.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.info.model = model.into();
        self
    }

    /// Set the serial number.
    pub fn serial(mut self, serial: impl Into<String>) -> Self {
        self.info.serial = serial.into();
        self
    }

    /// Set the firmware version.
    pub fn firmware(mut self, firmware: impl Into<String>) -> Self {
        self.info.firmware = firmware.into();
        self
    }

    /// Set the hardware revision.
    pub fn hardware(mut self, hardware: impl Into<String>) -> Self {
        self.info.hardware = hardware.into();
        self
    }

    /// Set the manufacturer name.
    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.info.manufacturer = manufacturer.into();
        self
    }

    /// Build the `DeviceInfo`.
    #[must_use]
    pub fn build(self) -> DeviceInfo {
        self.info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave_plus_payload() -> [u8; 20] {
        // version 1, humidity 90 (45.0%), reserved x2,
        // radon short 100, radon long 120, temp 2250 (22.5C),
        // pressure 50160 (1003.2 hPa), co2 800, voc 150, reserved x4
        [
            1, 90, 0, 0, //
            100, 0, //
            120, 0, //
            0xCA, 0x08, // 2250
            0xF0, 0xC3, // 50160
            0x20, 0x03, // 800
            0x96, 0x00, // 150
            0, 0, 0, 0,
        ]
    }

    #[test]
    fn test_parse_wave_plus_from_valid_bytes() {
        let readings = SensorReadings::from_bytes_wave_plus(&wave_plus_payload()).unwrap();

        assert_eq!(readings.humidity, Some(45.0));
        assert_eq!(readings.radon_short, Some(100));
        assert_eq!(readings.radon_long, Some(120));
        assert!((readings.temperature.unwrap() - 22.5).abs() < 0.01);
        assert!((readings.pressure.unwrap() - 1003.2).abs() < 0.01);
        assert_eq!(readings.co2, Some(800));
        assert_eq!(readings.voc, Some(150));
        assert_eq!(readings.battery, None);
    }

    #[test]
    fn test_parse_wave_plus_insufficient_bytes() {
        let result = SensorReadings::from_bytes_wave_plus(&[1, 90, 0, 0]);

        assert!(matches!(
            result,
            Err(ParseError::InsufficientBytes {
                expected: 20,
                actual: 4
            })
        ));
    }

    #[test]
    fn test_parse_wave_plus_unknown_version() {
        let mut payload = wave_plus_payload();
        payload[0] = 2;

        let result = SensorReadings::from_bytes_wave_plus(&payload);
        assert!(matches!(result, Err(ParseError::InvalidValue(_))));
    }

    #[test]
    fn test_radon_error_marker_maps_to_none() {
        let mut payload = wave_plus_payload();
        // 16384 is the first invalid radon value
        payload[4] = 0x00;
        payload[5] = 0x40;

        let readings = SensorReadings::from_bytes_wave_plus(&payload).unwrap();
        assert_eq!(readings.radon_short, None);
        assert_eq!(readings.radon_long, Some(120));
    }

    #[test]
    fn test_radon_max_valid_value() {
        let mut payload = wave_plus_payload();
        // 16383 is still a valid concentration
        payload[4] = 0xFF;
        payload[5] = 0x3F;

        let readings = SensorReadings::from_bytes_wave_plus(&payload).unwrap();
        assert_eq!(readings.radon_short, Some(16383));
    }

    #[test]
    fn test_parse_wave2() {
        let readings = SensorReadings::from_bytes_wave2(&wave_plus_payload()).unwrap();

        assert_eq!(readings.humidity, Some(45.0));
        assert_eq!(readings.radon_short, Some(100));
        assert_eq!(readings.radon_long, Some(120));
        assert!((readings.temperature.unwrap() - 22.5).abs() < 0.01);
        // Wave (2nd gen) carries no pressure, CO2, or VOC sensor
        assert_eq!(readings.pressure, None);
        assert_eq!(readings.co2, None);
        assert_eq!(readings.voc, None);
    }

    #[test]
    fn test_parse_wave_mini_kelvin_conversion() {
        // temp 29565 = 295.65 K = 22.5C, humidity 4500 (45.0%), voc 200
        let payload: [u8; 16] = [
            0, 0, //
            0x7D, 0x73, // 29565
            0, 0, //
            0x94, 0x11, // 4500
            0xC8, 0x00, // 200
            0, 0, 0, 0, 0, 0,
        ];

        let readings = SensorReadings::from_bytes_wave_mini(&payload).unwrap();
        assert!((readings.temperature.unwrap() - 22.5).abs() < 0.01);
        assert_eq!(readings.humidity, Some(45.0));
        assert_eq!(readings.voc, Some(200));
        assert_eq!(readings.radon_short, None);
    }

    #[test]
    fn test_parse_wave_mini_insufficient_bytes() {
        let result = SensorReadings::from_bytes_wave_mini(&[0; 10]);
        assert!(matches!(
            result,
            Err(ParseError::InsufficientBytes {
                expected: 16,
                actual: 10
            })
        ));
    }

    #[test]
    fn test_from_bytes_for_device_dispatch() {
        let readings =
            SensorReadings::from_bytes_for_device(&wave_plus_payload(), DeviceType::WavePlus)
                .unwrap();
        assert_eq!(readings.co2, Some(800));

        let result =
            SensorReadings::from_bytes_for_device(&wave_plus_payload(), DeviceType::ViewPlus);
        assert!(matches!(result, Err(ParseError::UnsupportedDevice(_))));
    }

    #[test]
    fn test_device_type_from_serial() {
        assert_eq!(DeviceType::from_serial(2900123456), Some(DeviceType::Wave));
        assert_eq!(
            DeviceType::from_serial(2920123456),
            Some(DeviceType::WaveMini)
        );
        assert_eq!(
            DeviceType::from_serial(2930123456),
            Some(DeviceType::WavePlus)
        );
        assert_eq!(DeviceType::from_serial(2950123456), Some(DeviceType::Wave2));
        assert_eq!(
            DeviceType::from_serial(2960123456),
            Some(DeviceType::ViewPlus)
        );
        assert_eq!(
            DeviceType::from_serial(2410123456),
            Some(DeviceType::CorentiumHome2)
        );
        assert_eq!(DeviceType::from_serial(4100123456), None);
    }

    #[test]
    fn test_device_type_model_number_roundtrip() {
        for device_type in [
            DeviceType::Wave,
            DeviceType::WaveMini,
            DeviceType::WavePlus,
            DeviceType::Wave2,
            DeviceType::ViewPlus,
            DeviceType::CorentiumHome2,
        ] {
            assert_eq!(
                DeviceType::from_model_number(device_type.model_number()),
                Some(device_type)
            );
        }
    }

    #[test]
    fn test_device_type_readability() {
        assert!(DeviceType::WavePlus.is_readable());
        assert!(DeviceType::Wave2.is_readable());
        assert!(DeviceType::WaveMini.is_readable());
        assert!(!DeviceType::ViewPlus.is_readable());
        assert!(!DeviceType::CorentiumHome2.is_readable());
        assert!(!DeviceType::Wave.is_readable());
    }

    #[test]
    fn test_readings_characteristic_only_for_readable_devices() {
        assert!(DeviceType::WavePlus.readings_characteristic().is_some());
        assert!(DeviceType::ViewPlus.readings_characteristic().is_none());
    }

    #[test]
    fn test_unknown_model_try_from() {
        let err = DeviceType::try_from(1234u32).unwrap_err();
        assert!(err.to_string().contains("1234"));
    }

    #[test]
    fn test_to_map_is_sorted_and_skips_missing() {
        let readings = SensorReadings::from_bytes_wave_plus(&wave_plus_payload())
            .unwrap()
            .with_battery(77);

        let map = readings.to_map();
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(
            keys,
            vec![
                "battery",
                "co2",
                "humidity",
                "pressure",
                "radon_long_term_avg",
                "radon_short_term_avg",
                "temperature",
                "voc",
            ]
        );

        let mini = SensorReadings::from_bytes_wave_mini(&[0; 16]).unwrap();
        assert!(!mini.to_map().contains_key("co2"));
        assert!(!mini.to_map().contains_key("radon_short_term_avg"));
    }

    #[test]
    fn test_radon_unit_conversion() {
        assert!((radon_bq_to_pci(37) - 1.0).abs() < f64::EPSILON);
        assert!((radon_bq_to_pci(100) - 2.7027).abs() < 0.001);
    }

    #[test]
    fn test_device_info_builder() {
        let info = DeviceInfo::builder()
            .name("Airthings Wave+")
            .model("2930")
            .serial("2930123456")
            .firmware("G-BLE-1.5.3-master+0")
            .hardware("REV A")
            .manufacturer("Airthings AS")
            .build();

        assert_eq!(info.name, "Airthings Wave+");
        assert_eq!(info.serial, "2930123456");
        assert_eq!(info.manufacturer, "Airthings AS");
    }
}
