use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use tracing::info;

use madcost::config;

/// Execute the config show command
///
/// Displays the effective reference data after overlays are applied
pub fn show(config_path: &Path) -> Result<()> {
    println!("{}", "Loading reference data...".yellow());
    info!("Loading reference data for display");

    let cfg = config::load_config(config_path)?;

    println!("{}", "Effective Reference Data:".green().bold());
    println!();

    // Serialize to TOML format
    let toml_string = toml::to_string_pretty(&cfg)?;
    println!("{}", toml_string);

    info!("Reference data displayed successfully");
    Ok(())
}

/// Execute the config validate command
///
/// Validates the reference data file
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating reference data...".yellow());
    info!("Validating reference data file");

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Reference data is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Neighborhoods: {}", cfg.neighborhoods.len());
    println!("  Transport Modes: {}", cfg.transport.len());
    println!("  Gym Plans: {}", cfg.lifestyle.gym.len());
    println!("  Streaming Services: {}", cfg.lifestyle.streaming.len());

    info!("Reference data validation successful");
    Ok(())
}
