//! Output formatting for text and JSON output.

use anyhow::Result;
use airthings_core::DiscoveredDevice;
use airthings_types::{DeviceInfo, SensorReadings};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Formatting options for output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Disable colored output.
    pub no_color: bool,
    /// Use Fahrenheit for temperature and pCi/L for radon.
    pub imperial: bool,
}

impl FormatOptions {
    /// Create formatting options, honoring the `NO_COLOR` convention.
    pub fn new(imperial: bool) -> Self {
        Self {
            no_color: std::env::var_os("NO_COLOR").is_some(),
            imperial,
        }
    }
}

/// Unit label for a sensor key from [`SensorReadings::to_map`].
fn sensor_unit(key: &str, imperial: bool) -> &'static str {
    match key {
        "battery" | "humidity" => "%",
        "co2" => "ppm",
        "pressure" => "hPa",
        "radon_short_term_avg" | "radon_long_term_avg" => {
            if imperial {
                "pCi/L"
            } else {
                "Bq/m3"
            }
        }
        "temperature" => {
            if imperial {
                "F"
            } else {
                "C"
            }
        }
        "voc" => "ppb",
        _ => "",
    }
}

/// Convert a sensor value to imperial units where applicable.
fn convert_value(key: &str, value: f64, imperial: bool) -> f64 {
    if !imperial {
        return value;
    }
    match key {
        "temperature" => value * 9.0 / 5.0 + 32.0,
        "radon_short_term_avg" | "radon_long_term_avg" => value / 37.0,
        _ => value,
    }
}

/// Format a sensor value with an appropriate number of decimals.
fn format_value(key: &str, value: f64, imperial: bool) -> String {
    let converted = convert_value(key, value, imperial);
    match key {
        "temperature" | "humidity" | "pressure" => format!("{:.1}", converted),
        "radon_short_term_avg" | "radon_long_term_avg" if imperial => {
            format!("{:.2}", converted)
        }
        _ => format!("{:.0}", converted),
    }
}

// ============================================================================
// Scan formatting
// ============================================================================

/// Format discovered devices as text, one line per Airthings device.
#[must_use]
pub fn format_scan_text(devices: &[DiscoveredDevice], opts: &FormatOptions) -> String {
    let mut output = String::new();

    for device in devices.iter().filter(|d| d.is_airthings) {
        let model = device
            .device_type
            .map(|t| t.product_name())
            .unwrap_or("Airthings device");
        let serial = device
            .serial
            .map(|s| s.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let rssi = device
            .rssi
            .map(|r| format!("{} dBm", r))
            .unwrap_or_else(|| "n/a".to_string());

        if opts.no_color {
            output.push_str(&format!(
                "{} serial {} ({}) rssi {}\n",
                model, serial, device.address, rssi
            ));
        } else {
            output.push_str(&format!(
                "{} serial {} ({}) rssi {}\n",
                model.cyan().bold(),
                serial,
                device.address.dimmed(),
                rssi
            ));
        }
    }

    output
}

// ============================================================================
// Device info and readings formatting
// ============================================================================

/// Format device information as a key-value block.
#[must_use]
pub fn format_device_info(info: &DeviceInfo, opts: &FormatOptions) -> String {
    let mut output = String::new();

    let kv = |key: &str, value: &str| -> String {
        if value.is_empty() {
            return String::new();
        }
        if opts.no_color {
            format!("  {:>12}:  {}\n", key, value)
        } else {
            format!("  {:>12}:  {}\n", key.dimmed(), value)
        }
    };

    output.push_str(&kv("Name", &info.name));
    output.push_str(&kv("Model", &info.model));
    output.push_str(&kv("Serial", &info.serial));
    output.push_str(&kv("Firmware", &info.firmware));
    output.push_str(&kv("Hardware", &info.hardware));
    output.push_str(&kv("Manufacturer", &info.manufacturer));

    output
}

/// Format sensor readings as a key-value block, sorted by sensor name.
#[must_use]
pub fn format_readings(readings: &SensorReadings, opts: &FormatOptions) -> String {
    let mut output = String::new();

    for (key, value) in readings.to_map() {
        let display = format_value(key, value, opts.imperial);
        let unit = sensor_unit(key, opts.imperial);
        if opts.no_color {
            output.push_str(&format!("  {:>22}:  {} {}\n", key, display, unit));
        } else {
            output.push_str(&format!("  {:>22}:  {} {}\n", key.dimmed(), display, unit));
        }
    }

    output
}

/// Serialize device info and readings to JSON.
///
/// JSON output always uses SI units; unit conversion only applies to text
/// output. Devices that could not be read carry no `readings` field.
pub fn format_device_json(
    address: &str,
    info: Option<&DeviceInfo>,
    readings: Option<&SensorReadings>,
) -> Result<String> {
    #[derive(Serialize)]
    struct DeviceReport<'a> {
        address: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        info: Option<&'a DeviceInfo>,
        #[serde(skip_serializing_if = "Option::is_none")]
        readings: Option<&'a SensorReadings>,
    }

    let report = DeviceReport {
        address,
        info,
        readings,
    };
    Ok(serde_json::to_string_pretty(&report)? + "\n")
}

/// Serialize scan results with per-device readings to JSON.
///
/// Devices that could not be read (unsupported models) carry no `readings`
/// field.
pub fn format_scan_readings_json(
    entries: &[(&DiscoveredDevice, Option<SensorReadings>)],
) -> Result<String> {
    #[derive(Serialize)]
    struct Entry<'a> {
        name: Option<&'a str>,
        address: &'a str,
        serial: Option<u32>,
        model: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        readings: Option<&'a SensorReadings>,
    }

    let list: Vec<Entry> = entries
        .iter()
        .map(|(d, readings)| Entry {
            name: d.name.as_deref(),
            address: &d.address,
            serial: d.serial,
            model: d.device_type.map(|t| t.product_name()),
            readings: readings.as_ref(),
        })
        .collect();

    Ok(serde_json::to_string_pretty(&list)? + "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_opts() -> FormatOptions {
        FormatOptions {
            no_color: true,
            imperial: false,
        }
    }

    fn sample_readings() -> SensorReadings {
        SensorReadings {
            humidity: Some(45.0),
            radon_short: Some(100),
            radon_long: Some(74),
            temperature: Some(22.5),
            pressure: Some(1003.2),
            co2: Some(800),
            voc: Some(150),
            battery: Some(85),
        }
    }

    #[test]
    fn test_convert_temperature_to_fahrenheit() {
        assert!((convert_value("temperature", 22.5, true) - 72.5).abs() < 0.01);
        assert!((convert_value("temperature", 22.5, false) - 22.5).abs() < 0.01);
    }

    #[test]
    fn test_convert_radon_to_pci() {
        assert!((convert_value("radon_short_term_avg", 37.0, true) - 1.0).abs() < 0.001);
        assert!((convert_value("radon_long_term_avg", 74.0, true) - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_other_values_not_converted() {
        assert!((convert_value("co2", 800.0, true) - 800.0).abs() < 0.001);
        assert!((convert_value("pressure", 1003.2, true) - 1003.2).abs() < 0.001);
    }

    #[test]
    fn test_sensor_units() {
        assert_eq!(sensor_unit("co2", false), "ppm");
        assert_eq!(sensor_unit("radon_short_term_avg", false), "Bq/m3");
        assert_eq!(sensor_unit("radon_short_term_avg", true), "pCi/L");
        assert_eq!(sensor_unit("temperature", false), "C");
        assert_eq!(sensor_unit("temperature", true), "F");
    }

    #[test]
    fn test_format_readings_sorted_keys() {
        let output = format_readings(&sample_readings(), &test_opts());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[0].contains("battery"));
        assert!(lines[1].contains("co2"));
        assert!(lines[7].contains("voc"));
    }

    #[test]
    fn test_format_readings_imperial() {
        let opts = FormatOptions {
            no_color: true,
            imperial: true,
        };
        let output = format_readings(&sample_readings(), &opts);
        // 74 Bq/m3 = 2.00 pCi/L, 22.5 C = 72.5 F
        assert!(output.contains("2.00 pCi/L"));
        assert!(output.contains("72.5 F"));
    }

    #[test]
    fn test_format_readings_skips_missing_sensors() {
        let readings = SensorReadings {
            temperature: Some(20.0),
            humidity: Some(50.0),
            ..Default::default()
        };
        let output = format_readings(&readings, &test_opts());
        assert_eq!(output.lines().count(), 2);
        assert!(!output.contains("radon"));
    }

    #[test]
    fn test_format_device_info_skips_empty_fields() {
        let info = DeviceInfo {
            name: "Airthings Wave+".to_string(),
            model: "2930".to_string(),
            serial: "2930123456".to_string(),
            firmware: String::new(),
            hardware: String::new(),
            manufacturer: "Airthings AS".to_string(),
        };
        let output = format_device_info(&info, &test_opts());
        assert_eq!(output.lines().count(), 4);
        assert!(output.contains("2930123456"));
        assert!(!output.contains("Firmware"));
    }

    #[test]
    fn test_format_device_json_si_units() {
        let readings = sample_readings();
        let json = format_device_json("AA:BB:CC:DD:EE:FF", None, Some(&readings)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["address"], "AA:BB:CC:DD:EE:FF");
        assert_eq!(value["readings"]["radon_short"], 100);
        assert!(value.get("info").is_none());
    }

    #[test]
    fn test_format_device_json_omits_readings_when_unreadable() {
        let info = DeviceInfo {
            name: "Corentium Home 2".to_string(),
            model: "2410".to_string(),
            serial: "2410123456".to_string(),
            firmware: String::new(),
            hardware: String::new(),
            manufacturer: "Airthings AS".to_string(),
        };
        let json = format_device_json("AA:BB:CC:DD:EE:FF", Some(&info), None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["info"]["model"], "2410");
        assert!(value.get("readings").is_none());
    }

    // Note: DiscoveredDevice tests only run on macOS because btleplug's
    // PeripheralId constructor is not publicly accessible on other platforms.

    /// Create a test PeripheralId for macOS (uses UUID)
    #[cfg(target_os = "macos")]
    fn make_test_peripheral_id() -> btleplug::platform::PeripheralId {
        btleplug::platform::PeripheralId::from(uuid::Uuid::nil())
    }

    #[cfg(target_os = "macos")]
    fn make_test_device(
        name: Option<&str>,
        address: &str,
        serial: Option<u32>,
        is_airthings: bool,
    ) -> DiscoveredDevice {
        use airthings_types::DeviceType;

        DiscoveredDevice {
            name: name.map(|s| s.to_string()),
            id: make_test_peripheral_id(),
            address: address.to_string(),
            identifier: address.to_string(),
            rssi: Some(-60),
            serial,
            device_type: serial.and_then(DeviceType::from_serial),
            is_airthings,
            manufacturer_data: None,
        }
    }

    #[test]
    fn test_format_scan_text_empty() {
        let devices: Vec<DiscoveredDevice> = vec![];
        assert_eq!(format_scan_text(&devices, &test_opts()), "");
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_format_scan_text_one_line_per_airthings_device() {
        let devices = vec![
            make_test_device(Some("Airthings Wave+"), "AA:AA:AA:AA:AA:01", Some(2930000001), true),
            make_test_device(Some("Airthings Wave2"), "AA:AA:AA:AA:AA:02", Some(2950000002), true),
            make_test_device(Some("Fitness Tracker"), "BB:BB:BB:BB:BB:01", None, false),
            make_test_device(None, "BB:BB:BB:BB:BB:02", None, false),
            make_test_device(Some("Airthings Mini"), "AA:AA:AA:AA:AA:03", Some(2920000003), true),
        ];

        let output = format_scan_text(&devices, &test_opts());
        assert_eq!(output.lines().count(), 3);
        assert!(output.contains("2930000001"));
        assert!(!output.contains("BB:BB:BB:BB:BB:01"));
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_format_scan_readings_json_entries() {
        let wave = make_test_device(Some("Airthings Wave+"), "AA:AA:AA:AA:AA:01", Some(2930000001), true);
        let corentium = make_test_device(None, "AA:AA:AA:AA:AA:02", Some(2410000002), true);
        let entries = vec![
            (&wave, Some(sample_readings())),
            (&corentium, None),
        ];

        let json = format_scan_readings_json(&entries).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(|a| a.len()), Some(2));
        assert_eq!(value[0]["model"], "Airthings Wave+");
        assert_eq!(value[0]["readings"]["co2"], 800);
        assert!(value[1].get("readings").is_none());
    }
}
