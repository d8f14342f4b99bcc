use std::sync::Arc;

use rust_decimal::Decimal;

use crate::config::{Config, NeighborhoodConfig};
use crate::error::AppError;
use crate::profile::{SpendingStyle, TransportMode, UnitType};

/// Categories whose baseline comes from a spending-style row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleRated {
    Groceries,
    DiningPerMeal,
    Coffee,
    Entertainment,
    PersonalCare,
    Clothing,
}

/// Read-only lookups over the validated reference data
///
/// The table is populated once at load and never mutated, so it can be
/// shared freely between callers.
pub struct ReferenceTable {
    config: Arc<Config>,
}

impl ReferenceTable {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn neighborhood(&self, key: &str) -> Result<&NeighborhoodConfig, AppError> {
        self.config.neighborhoods.get(key).ok_or_else(|| {
            AppError::InvalidInput(format!(
                "Neighborhood '{}' not found. Available neighborhoods: {}",
                key,
                self.available_neighborhoods().join(", ")
            ))
        })
    }

    /// Monthly rent for a unit in a neighborhood at a spending style
    pub fn rent_for(
        &self,
        neighborhood: &str,
        unit: UnitType,
        style: SpendingStyle,
    ) -> Result<Decimal, AppError> {
        let hood = self.neighborhood(neighborhood)?;
        let row = hood
            .rent
            .get(unit.as_str())
            .ok_or_else(|| AppError::MissingReferenceEntry {
                section: format!("neighborhoods.{}.rent", neighborhood),
                key: unit.as_str().to_string(),
            })?;
        Ok(row.rate(style))
    }

    /// The neighborhood's going rate for a parking spot
    pub fn parking_for(&self, neighborhood: &str) -> Result<Decimal, AppError> {
        Ok(self.neighborhood(neighborhood)?.parking_monthly)
    }

    /// Monthly cost of a transport mode
    ///
    /// Owning a car is priced from the car cost components plus the
    /// neighborhood's parking rate; every other mode is fixed + variable.
    pub fn transport_cost(
        &self,
        mode: TransportMode,
        neighborhood: &str,
    ) -> Result<Decimal, AppError> {
        let entry = self.config.transport.get(mode.as_str()).ok_or_else(|| {
            AppError::MissingReferenceEntry {
                section: "transport".to_string(),
                key: mode.as_str().to_string(),
            }
        })?;

        match mode {
            TransportMode::OwnCar => {
                let car = &self.config.car;
                Ok(car.gas_monthly
                    + car.insurance_monthly
                    + car.maintenance_monthly
                    + self.parking_for(neighborhood)?)
            }
            _ => Ok(entry.monthly_fixed + entry.monthly_variable),
        }
    }

    /// Electric/gas + internet + renters insurance
    pub fn utilities_total(&self) -> Decimal {
        let u = &self.config.utilities;
        u.electric_gas_avg + u.internet + u.renters_insurance
    }

    /// Baseline for a style-rated category
    pub fn style_rate(&self, category: StyleRated, style: SpendingStyle) -> Decimal {
        match category {
            StyleRated::Groceries => self.config.food.groceries.rate(style),
            StyleRated::DiningPerMeal => self.config.food.dining_out_per_meal.rate(style),
            StyleRated::Coffee => self.config.food.coffee.rate(style),
            StyleRated::Entertainment => self.config.lifestyle.entertainment.rate(style),
            StyleRated::PersonalCare => self.config.lifestyle.personal_care.rate(style),
            StyleRated::Clothing => self.config.lifestyle.clothing.rate(style),
        }
    }

    pub fn gym_fee(&self, plan: &str) -> Result<Decimal, AppError> {
        self.config.lifestyle.gym.get(plan).copied().ok_or_else(|| {
            AppError::InvalidInput(format!(
                "Gym plan '{}' not found. Available plans: {}",
                plan,
                self.config
                    .lifestyle
                    .gym
                    .keys()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })
    }

    pub fn streaming_fee(&self, service: &str) -> Result<Decimal, AppError> {
        self.config
            .lifestyle
            .streaming
            .get(service)
            .copied()
            .ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "Streaming service '{}' not found. Available services: {}",
                    service,
                    self.config
                        .lifestyle
                        .streaming
                        .keys()
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }

    /// Neighborhood keys in display order
    pub fn available_neighborhoods(&self) -> Vec<String> {
        self.config.neighborhoods.keys().cloned().collect()
    }
}
