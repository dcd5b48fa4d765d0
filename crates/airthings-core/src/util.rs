//! Utility functions for airthings-core.

use btleplug::platform::PeripheralId;

/// Format a peripheral ID as a string.
///
/// On macOS, peripheral IDs are UUIDs assigned by CoreBluetooth. On other
/// platforms they may be MAC addresses or other formats. This function
/// extracts the useful identifier string.
pub fn format_peripheral_id(id: &PeripheralId) -> String {
    format!("{:?}", id)
        .trim_start_matches("PeripheralId(")
        .trim_end_matches(')')
        .to_string()
}

/// Create an identifier string from an address and peripheral ID.
///
/// On macOS where addresses are 00:00:00:00:00:00, uses the peripheral ID.
/// On other platforms, uses the Bluetooth address.
pub fn create_identifier(address: &str, peripheral_id: &PeripheralId) -> String {
    if address == "00:00:00:00:00:00" {
        format_peripheral_id(peripheral_id)
    } else {
        address.to_string()
    }
}

/// Normalize a Bluetooth address for comparison: lowercase, no separators.
pub fn normalize_address(address: &str) -> String {
    address
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_address() {
        assert_eq!(normalize_address("AA:BB:CC:DD:EE:FF"), "aabbccddeeff");
        assert_eq!(normalize_address("aa-bb-cc-dd-ee-ff"), "aabbccddeeff");
        assert_eq!(normalize_address("aabbccddeeff"), "aabbccddeeff");
    }

    #[test]
    fn test_normalize_address_matches_mixed_forms() {
        assert_eq!(
            normalize_address("AA:BB:CC:DD:EE:FF"),
            normalize_address("aa:bb:cc:dd:ee:ff")
        );
        assert_eq!(
            normalize_address("AA:BB:CC:DD:EE:FF"),
            normalize_address("AABBCCDDEEFF")
        );
    }
}
