//! CLI Integration Tests
//!
//! These tests verify the CLI binary output and argument handling.
//! Tests that talk to real devices require hardware and are marked with
//! #[ignore].
//!
//! Run mock tests:
//! ```
//! cargo test --package airthings-cli --test cli_integration
//! ```
//!
//! Run hardware tests:
//! ```
//! cargo test --package airthings-cli --test cli_integration -- --ignored --nocapture
//! ```

use std::process::Command;

/// Get path to the airthings binary
fn get_binary_path() -> String {
    // Try release first, then debug
    let release_path = env!("CARGO_MANIFEST_DIR").to_string() + "/../../target/release/airthings";
    let debug_path = env!("CARGO_MANIFEST_DIR").to_string() + "/../../target/debug/airthings";

    if std::path::Path::new(&release_path).exists() {
        release_path
    } else if std::path::Path::new(&debug_path).exists() {
        debug_path
    } else {
        // Fall back to cargo run
        "cargo".to_string()
    }
}

/// Run the airthings command and return output
fn run_airthings(args: &[&str]) -> std::process::Output {
    let binary = get_binary_path();

    if binary == "cargo" {
        Command::new("cargo")
            .args(["run", "--package", "airthings-cli", "--"])
            .args(args)
            .output()
            .expect("Failed to run airthings via cargo")
    } else {
        Command::new(&binary)
            .args(args)
            .output()
            .expect("Failed to run airthings binary")
    }
}

// =============================================================================
// Help and Version Tests (no hardware required)
// =============================================================================

#[test]
fn test_help_output() {
    let output = run_airthings(&["--help"]);

    assert!(output.status.success(), "Help should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Airthings") || stdout.contains("airthings"),
        "Help should mention Airthings"
    );
    assert!(stdout.contains("--timeout"), "Help should list --timeout");
    assert!(stdout.contains("--connect"), "Help should list --connect");
    assert!(stdout.contains("--imperial"), "Help should list --imperial");
    assert!(stdout.contains("--format"), "Help should list --format");
}

#[test]
fn test_version_output() {
    let output = run_airthings(&["--version"]);

    assert!(output.status.success(), "Version should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Version output should contain the crate version"
    );
}

#[test]
fn test_rejects_unknown_flag() {
    let output = run_airthings(&["--frobnicate"]);
    assert!(!output.status.success(), "Unknown flag should fail");
}

#[test]
fn test_rejects_invalid_format() {
    let output = run_airthings(&["--format", "yaml"]);
    assert!(!output.status.success(), "Invalid format should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("yaml"), "Error should name the bad value");
}

#[test]
fn test_rejects_debug_with_quiet() {
    let output = run_airthings(&["--debug", "--quiet"]);
    assert!(
        !output.status.success(),
        "--debug and --quiet should conflict"
    );
}

// =============================================================================
// Hardware tests (require a BLE adapter and nearby devices)
// =============================================================================

#[test]
#[ignore = "requires BLE hardware"]
fn test_scan_runs() {
    let output = run_airthings(&["--timeout", "5", "--quiet"]);

    assert!(output.status.success(), "Scan should exit cleanly");
}

#[test]
#[ignore = "requires BLE hardware"]
fn test_connect_unknown_address_exits_cleanly() {
    // A well-formed address that no real device advertises
    let output = run_airthings(&["--timeout", "3", "--connect", "00:11:22:33:44:55", "--quiet"]);

    assert!(
        output.status.success(),
        "Unmatched --connect should exit cleanly with a hint"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("not found"),
        "Output should say the device was not found"
    );
}
