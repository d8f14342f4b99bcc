use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use tracing::info;

use madcost::config;
use madcost::profile::{SpendingStyle, UnitType};
use madcost::tables::ReferenceTable;

/// Execute the neighborhoods command
///
/// Lists every neighborhood in the reference data with its parking rate and
/// a sample rent (1BR at the moderate style).
pub fn execute(config_path: &Path) -> Result<()> {
    info!("Loading reference data");
    let cfg = config::load_config(config_path)?;
    let table = ReferenceTable::new(Arc::new(cfg));

    println!("{}", "Madison, WI Neighborhoods:".bold());
    println!();

    for key in table.available_neighborhoods() {
        let hood = &table.config().neighborhoods[&key];
        let sample_rent =
            table.rent_for(&key, UnitType::OneBedroom, SpendingStyle::Moderate)?;

        println!("  {} — {}", key.cyan(), hood.name);
        println!("    {}", hood.description.dimmed());
        println!(
            "    1BR from ${}/mo (moderate) · parking ${}/mo",
            sample_rent, hood.parking_monthly
        );
        println!();
    }

    Ok(())
}
