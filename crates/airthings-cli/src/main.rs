//! Command-line interface for Airthings air quality sensors.

mod cli;
mod format;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use airthings_core::scan::{ScanOptions, scan_with_options};
use airthings_core::{AirthingsDevice, Device, DiscoveredDevice, Error, normalize_address};
use airthings_types::SensorReadings;

use crate::cli::{Cli, OutputFormat};
use crate::format::FormatOptions;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // When quiet mode is enabled, suppress info-level logging
    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let opts = FormatOptions::new(cli.imperial);

    if !cli.quiet {
        info!("Scanning for Airthings devices ({}s)...", cli.timeout);
    }

    let devices = scan_with_options(scan_options(cli.timeout, cli.connect.is_some()))
        .await
        .context("Failed to scan for devices")?;

    match cli.connect {
        Some(ref target) => connect_and_read(target, &devices, cli.format, &opts).await,
        None => list_and_read(&devices, cli.format, &opts, cli.quiet).await,
    }
}

/// Scan options for the requested flow.
///
/// Address matching must see every device in range, so the Airthings filter
/// only applies to the listing flow.
fn scan_options(timeout: u64, connecting: bool) -> ScanOptions {
    ScanOptions::default()
        .duration_secs(timeout)
        .filter_airthings_only(!connecting)
}

/// Connect to a specific device and print its info and sensor values.
async fn connect_and_read(
    target: &str,
    devices: &[DiscoveredDevice],
    output_format: OutputFormat,
    opts: &FormatOptions,
) -> Result<()> {
    let wanted = normalize_address(target);
    let found = devices.iter().find(|d| {
        normalize_address(&d.address) == wanted || normalize_address(&d.identifier) == wanted
    });

    let Some(found) = found else {
        println!("Device {} was not found during the scan.", target);
        println!("Try a longer --timeout or move closer to the device.");
        return Ok(());
    };

    let device = Device::connect(&found.identifier)
        .await
        .with_context(|| format!("Failed to connect to {}", target))?;

    let info = device
        .read_device_info()
        .await
        .context("Failed to read device information")?;

    let readings = match device.read_sensors().await {
        Ok(readings) => readings,
        Err(Error::UnsupportedDevice { model }) => {
            let _ = device.disconnect().await;
            match output_format {
                OutputFormat::Text => {
                    print!("{}", format::format_device_info(&info, opts));
                    println!("{} does not support direct Bluetooth readings.", model);
                }
                OutputFormat::Json => {
                    print!("{}", format::format_device_json(&found.address, Some(&info), None)?);
                }
            }
            return Ok(());
        }
        Err(e) => {
            let _ = device.disconnect().await;
            return Err(e).context("Failed to read sensor values");
        }
    };

    device.disconnect().await.context("Failed to disconnect")?;

    match output_format {
        OutputFormat::Text => {
            print!("{}", format::format_device_info(&info, opts));
            println!();
            print!("{}", format::format_readings(&readings, opts));
        }
        OutputFormat::Json => {
            print!(
                "{}",
                format::format_device_json(&found.address, Some(&info), Some(&readings))?
            );
        }
    }

    Ok(())
}

/// List every discovered Airthings device and read the readable ones.
async fn list_and_read(
    devices: &[DiscoveredDevice],
    output_format: OutputFormat,
    opts: &FormatOptions,
    quiet: bool,
) -> Result<()> {
    if devices.is_empty() {
        println!("No Airthings devices found.");
        return Ok(());
    }

    if !quiet {
        info!("Found {} Airthings device(s)", devices.len());
    }

    match output_format {
        OutputFormat::Text => {
            for discovered in devices.iter().filter(|d| d.is_airthings) {
                print!("{}", format::format_scan_text(std::slice::from_ref(discovered), opts));

                match read_discovered(discovered).await {
                    Ok(Some(readings)) => print!("{}", format::format_readings(&readings, opts)),
                    Ok(None) => {
                        let model = discovered
                            .device_type
                            .map(|t| t.product_name())
                            .unwrap_or("This device");
                        println!("  {} does not support direct Bluetooth readings.", model);
                    }
                    // Keep going so one faulty device does not hide the rest
                    Err(e) => warn!("Skipping {}: {:#}", discovered.address, e),
                }
            }
        }
        OutputFormat::Json => {
            let mut entries: Vec<(&DiscoveredDevice, Option<SensorReadings>)> = Vec::new();
            for discovered in devices.iter().filter(|d| d.is_airthings) {
                let readings = match read_discovered(discovered).await {
                    Ok(readings) => readings,
                    Err(e) => {
                        warn!("Skipping {}: {:#}", discovered.address, e);
                        None
                    }
                };
                entries.push((discovered, readings));
            }
            print!("{}", format::format_scan_readings_json(&entries)?);
        }
    }

    Ok(())
}

/// Connect to a discovered device and read its sensors.
///
/// Returns `None` for models that use a command protocol instead of a
/// readable current-values characteristic. Other failures are fatal.
async fn read_discovered(discovered: &DiscoveredDevice) -> Result<Option<SensorReadings>> {
    if let Some(device_type) = discovered.device_type
        && !device_type.is_readable()
    {
        // Skip the connection attempt entirely for known command-protocol models
        return Ok(None);
    }

    let device = Device::connect(&discovered.identifier)
        .await
        .with_context(|| format!("Failed to connect to {}", discovered.address))?;

    read_then_disconnect(&device).await
}

/// Read sensors from a connected device, then release the connection.
///
/// Returns `Ok(None)` for models that use a command protocol instead of a
/// readable current-values characteristic.
async fn read_then_disconnect(device: &dyn AirthingsDevice) -> Result<Option<SensorReadings>> {
    let result = device.read_sensors().await;
    if let Err(e) = device.disconnect().await {
        warn!("Failed to disconnect from {}: {}", device.address(), e);
    }

    match result {
        Ok(readings) => Ok(Some(readings)),
        Err(Error::UnsupportedDevice { .. }) => Ok(None),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to read sensor values from {}", device.address()))
        }
    }
}
