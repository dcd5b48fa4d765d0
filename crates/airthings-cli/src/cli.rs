//! CLI argument definitions using clap.

use clap::{Parser, ValueEnum};

/// Output format for scan and read results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Scan for Airthings air quality sensors over Bluetooth Low Energy.
///
/// Without `--connect`, lists every Airthings device found during the scan
/// and reads sensor values from the models that support direct readings.
/// With `--connect`, connects to the given device and prints its device
/// information and current sensor values.
#[derive(Debug, Parser)]
#[command(name = "airthings")]
#[command(author, version, about = "Scan and read Airthings air quality sensors over BLE")]
pub struct Cli {
    /// Scan duration in seconds
    #[arg(short, long, default_value = "8")]
    pub timeout: u64,

    /// Connect to a device by MAC address (or UUID on macOS)
    #[arg(short, long, value_name = "ADDRESS")]
    pub connect: Option<String>,

    /// Display temperature in Fahrenheit and radon in pCi/L
    #[arg(long)]
    pub imperial: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress non-essential output
    #[arg(short, long, conflicts_with = "debug")]
    pub quiet: bool,
}
