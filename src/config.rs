use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::profile::{SpendingStyle, TransportMode, UnitType};

/// Default Madison, WI reference data, compiled into the binary
pub const DEFAULT_DATA: &str = include_str!("../data/madison.toml");

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub neighborhoods: BTreeMap<String, NeighborhoodConfig>,
    pub transport: BTreeMap<String, TransportConfig>,
    pub car: CarConfig,
    pub utilities: UtilitiesConfig,
    pub food: FoodConfig,
    pub lifestyle: LifestyleConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NeighborhoodConfig {
    pub name: String,
    pub description: String,
    pub parking_monthly: Decimal,
    /// Rent rows keyed by unit type ("studio", "1br", "2br")
    pub rent: BTreeMap<String, StyleRow>,
}

/// One baseline per spending style
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct StyleRow {
    pub frugal: Decimal,
    pub moderate: Decimal,
    pub comfortable: Decimal,
}

impl StyleRow {
    pub fn rate(&self, style: SpendingStyle) -> Decimal {
        match style {
            SpendingStyle::Frugal => self.frugal,
            SpendingStyle::Moderate => self.moderate,
            SpendingStyle::Comfortable => self.comfortable,
        }
    }

    fn is_non_negative(&self) -> bool {
        self.frugal >= Decimal::ZERO
            && self.moderate >= Decimal::ZERO
            && self.comfortable >= Decimal::ZERO
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransportConfig {
    pub monthly_fixed: Decimal,
    pub monthly_variable: Decimal,
    pub notes: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CarConfig {
    pub gas_monthly: Decimal,
    pub insurance_monthly: Decimal,
    pub maintenance_monthly: Decimal,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UtilitiesConfig {
    pub electric_gas_avg: Decimal,
    pub internet: Decimal,
    pub renters_insurance: Decimal,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FoodConfig {
    pub groceries: StyleRow,
    pub dining_out_per_meal: StyleRow,
    pub coffee: StyleRow,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LifestyleConfig {
    pub gym: BTreeMap<String, Decimal>,
    pub streaming: BTreeMap<String, Decimal>,
    pub entertainment: StyleRow,
    pub personal_care: StyleRow,
    pub clothing: StyleRow,
}

/// Load reference data: embedded defaults, then an optional overlay file,
/// then environment variables (MADCOST__SECTION__KEY)
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let mut builder = config::Config::builder().add_source(config::File::from_str(
        DEFAULT_DATA,
        config::FileFormat::Toml,
    ));

    if path.exists() {
        builder = builder.add_source(config::File::from(path));
    }

    let cfg = builder
        .add_source(config::Environment::with_prefix("MADCOST").separator("__"))
        .build()?;

    let cfg: Config = cfg.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

/// Load the embedded reference data with no overlays
pub fn load_defaults() -> anyhow::Result<Config> {
    let cfg = config::Config::builder()
        .add_source(config::File::from_str(
            DEFAULT_DATA,
            config::FileFormat::Toml,
        ))
        .build()?;

    let cfg: Config = cfg.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    // Validate at least one neighborhood is defined
    if cfg.neighborhoods.is_empty() {
        anyhow::bail!("At least one neighborhood must be defined");
    }

    for (key, hood) in &cfg.neighborhoods {
        if hood.name.is_empty() {
            anyhow::bail!("Neighborhood '{}' has an empty name", key);
        }
        if hood.parking_monthly < Decimal::ZERO {
            anyhow::bail!("Neighborhood '{}' has a negative parking cost", key);
        }

        // Every neighborhood must carry a rent row for every unit type
        for unit in UnitType::ALL {
            match hood.rent.get(unit.as_str()) {
                Some(row) if !row.is_non_negative() => {
                    anyhow::bail!("Neighborhood '{}' has a negative '{}' rent", key, unit)
                }
                Some(_) => {}
                None => anyhow::bail!("Neighborhood '{}' is missing a '{}' rent row", key, unit),
            }
        }
    }

    // Every transport mode must have an entry
    for mode in TransportMode::ALL {
        let entry = cfg.transport.get(mode.as_str()).ok_or_else(|| {
            anyhow::anyhow!("Transport mode '{}' is missing from the reference data", mode)
        })?;
        if entry.monthly_fixed < Decimal::ZERO || entry.monthly_variable < Decimal::ZERO {
            anyhow::bail!("Transport mode '{}' has a negative cost", mode);
        }
    }

    if cfg.car.gas_monthly < Decimal::ZERO
        || cfg.car.insurance_monthly < Decimal::ZERO
        || cfg.car.maintenance_monthly < Decimal::ZERO
    {
        anyhow::bail!("Car costs cannot be negative");
    }

    if cfg.utilities.electric_gas_avg < Decimal::ZERO
        || cfg.utilities.internet < Decimal::ZERO
        || cfg.utilities.renters_insurance < Decimal::ZERO
    {
        anyhow::bail!("Utility rates cannot be negative");
    }

    for (label, row) in [
        ("food.groceries", &cfg.food.groceries),
        ("food.dining_out_per_meal", &cfg.food.dining_out_per_meal),
        ("food.coffee", &cfg.food.coffee),
        ("lifestyle.entertainment", &cfg.lifestyle.entertainment),
        ("lifestyle.personal_care", &cfg.lifestyle.personal_care),
        ("lifestyle.clothing", &cfg.lifestyle.clothing),
    ] {
        if !row.is_non_negative() {
            anyhow::bail!("'{}' has a negative baseline", label);
        }
    }

    for (plan, fee) in &cfg.lifestyle.gym {
        if *fee < Decimal::ZERO {
            anyhow::bail!("Gym plan '{}' has a negative fee", plan);
        }
    }
    for (service, fee) in &cfg.lifestyle.streaming {
        if *fee < Decimal::ZERO {
            anyhow::bail!("Streaming service '{}' has a negative fee", service);
        }
    }

    Ok(())
}
