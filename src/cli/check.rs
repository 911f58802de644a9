//! Diagnostic checks for deployments.

use std::time::Duration;

use crate::cli::CheckArgs;
use crate::config::Config;
use crate::discovery::GpuProbe;
use crate::error::Result;

/// Validate the configuration file and summarize what it offers.
pub fn execute_config(args: CheckArgs) -> Result<()> {
    print!("Validating {} ... ", args.config.display());
    let config = match Config::load(&args.config) {
        Ok(config) => {
            println!("✓ OK");
            config
        }
        Err(err) => {
            println!("✗ Failed");
            return Err(err);
        }
    };

    println!("  Profiles: {}", config.profiles.len());
    println!(
        "  Default profile: {}",
        config
            .profiles
            .first()
            .map(|profile| profile.key.as_str())
            .unwrap_or("(none)")
    );
    println!(
        "  Image groups: {} (+{} default images)",
        config.images.groups.len(),
        config.images.default.len()
    );
    println!("  Discovery tag suffix: {}", config.discovery.tag_suffix);
    println!("  GPU sidecar: {}", config.discovery.sidecar_url);

    Ok(())
}

/// Probe the GPU sidecar once and report the outcome.
///
/// An unreachable sidecar is the expected degraded state on hosts without
/// GPUs, so it is reported but not an error.
pub async fn execute_gpu(args: CheckArgs) -> Result<()> {
    let config = Config::load(&args.config)?;

    print!("Probing {} ... ", config.discovery.sidecar_url);
    let probe = GpuProbe::new(
        config.discovery.sidecar_url.clone(),
        Duration::from_millis(config.discovery.sidecar_timeout_ms),
    );

    match probe.fetch().await {
        Some(args) => {
            println!("✓ OK");
            println!("  Volume driver: {}", args.volume_driver);
            println!("  Read-only volumes: {}", args.read_only_volumes.len());
            println!("  Devices: {}", args.devices.len());
        }
        None => {
            println!("✗ Unreachable");
            println!("  Discovered profiles will be offered without GPU arguments.");
        }
    }

    Ok(())
}
