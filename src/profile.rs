use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::breakdown::Category;
use crate::error::AppError;

/// Spending styles, one column per style in the reference tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpendingStyle {
    Frugal,
    Moderate,
    Comfortable,
}

impl SpendingStyle {
    pub const ALL: [SpendingStyle; 3] = [
        SpendingStyle::Frugal,
        SpendingStyle::Moderate,
        SpendingStyle::Comfortable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpendingStyle::Frugal => "frugal",
            SpendingStyle::Moderate => "moderate",
            SpendingStyle::Comfortable => "comfortable",
        }
    }
}

impl FromStr for SpendingStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "frugal" => Ok(SpendingStyle::Frugal),
            "moderate" => Ok(SpendingStyle::Moderate),
            "comfortable" => Ok(SpendingStyle::Comfortable),
            _ => Err(AppError::InvalidInput(format!(
                "Invalid spending style '{}': expected frugal, moderate, or comfortable",
                s
            ))),
        }
    }
}

impl fmt::Display for SpendingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unit types matching the rent rows in the reference data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    Studio,
    OneBedroom,
    TwoBedroom,
}

impl UnitType {
    pub const ALL: [UnitType; 3] = [UnitType::Studio, UnitType::OneBedroom, UnitType::TwoBedroom];

    /// Key into a neighborhood's rent rows
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitType::Studio => "studio",
            UnitType::OneBedroom => "1br",
            UnitType::TwoBedroom => "2br",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UnitType::Studio => "Studio",
            UnitType::OneBedroom => "1BR",
            UnitType::TwoBedroom => "2BR",
        }
    }
}

impl FromStr for UnitType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "studio" => Ok(UnitType::Studio),
            "1br" => Ok(UnitType::OneBedroom),
            "2br" => Ok(UnitType::TwoBedroom),
            _ => Err(AppError::InvalidInput(format!(
                "Invalid unit type '{}': expected studio, 1br, or 2br",
                s
            ))),
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Primary transport modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransportMode {
    MetroBus,
    OwnCar,
    BikeWalk,
    Hybrid,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        TransportMode::MetroBus,
        TransportMode::OwnCar,
        TransportMode::BikeWalk,
        TransportMode::Hybrid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::MetroBus => "metro-bus",
            TransportMode::OwnCar => "own-car",
            TransportMode::BikeWalk => "bike-walk",
            TransportMode::Hybrid => "hybrid",
        }
    }
}

impl FromStr for TransportMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metro-bus" => Ok(TransportMode::MetroBus),
            "own-car" => Ok(TransportMode::OwnCar),
            "bike-walk" => Ok(TransportMode::BikeWalk),
            "hybrid" => Ok(TransportMode::Hybrid),
            _ => Err(AppError::InvalidInput(format!(
                "Invalid transport mode '{}': expected metro-bus, own-car, bike-walk, or hybrid",
                s
            ))),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Categories that are included only when toggled on in the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptionalCategory {
    Parking,
    DiningOut,
    Coffee,
    Healthcare,
    Gym,
    Streaming,
    Entertainment,
    PersonalCare,
    Clothing,
}

impl OptionalCategory {
    pub const ALL: [OptionalCategory; 9] = [
        OptionalCategory::Parking,
        OptionalCategory::DiningOut,
        OptionalCategory::Coffee,
        OptionalCategory::Healthcare,
        OptionalCategory::Gym,
        OptionalCategory::Streaming,
        OptionalCategory::Entertainment,
        OptionalCategory::PersonalCare,
        OptionalCategory::Clothing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionalCategory::Parking => "parking",
            OptionalCategory::DiningOut => "dining-out",
            OptionalCategory::Coffee => "coffee",
            OptionalCategory::Healthcare => "healthcare",
            OptionalCategory::Gym => "gym",
            OptionalCategory::Streaming => "streaming",
            OptionalCategory::Entertainment => "entertainment",
            OptionalCategory::PersonalCare => "personal-care",
            OptionalCategory::Clothing => "clothing",
        }
    }

    /// The breakdown category this toggle controls
    pub fn category(&self) -> Category {
        match self {
            OptionalCategory::Parking => Category::Parking,
            OptionalCategory::DiningOut => Category::DiningOut,
            OptionalCategory::Coffee => Category::Coffee,
            OptionalCategory::Healthcare => Category::Healthcare,
            OptionalCategory::Gym => Category::Gym,
            OptionalCategory::Streaming => Category::Streaming,
            OptionalCategory::Entertainment => Category::Entertainment,
            OptionalCategory::PersonalCare => Category::PersonalCare,
            OptionalCategory::Clothing => Category::Clothing,
        }
    }
}

impl FromStr for OptionalCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "parking" => Ok(OptionalCategory::Parking),
            "dining-out" => Ok(OptionalCategory::DiningOut),
            "coffee" => Ok(OptionalCategory::Coffee),
            "healthcare" => Ok(OptionalCategory::Healthcare),
            "gym" => Ok(OptionalCategory::Gym),
            "streaming" => Ok(OptionalCategory::Streaming),
            "entertainment" => Ok(OptionalCategory::Entertainment),
            "personal-care" => Ok(OptionalCategory::PersonalCare),
            "clothing" => Ok(OptionalCategory::Clothing),
            _ => Err(AppError::InvalidInput(format!(
                "Invalid optional category '{}': expected one of {}",
                s,
                OptionalCategory::ALL
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

impl fmt::Display for OptionalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The user selections driving one estimate
///
/// Constructed per invocation and discarded after use. Category parameters
/// (dining frequency, gym plan, streaming services, healthcare and parking
/// amounts) are only consulted when the matching toggle is enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputProfile {
    /// Neighborhood key in the reference data
    pub neighborhood: String,
    pub unit_type: UnitType,
    pub style: SpendingStyle,
    /// Number of people in the household, at least 1
    pub household_size: u32,
    /// Scaling factor applied to the style-rated categories, default 1.0
    pub lifestyle_factor: Decimal,
    pub transport: TransportMode,
    /// Optional categories toggled on
    pub enabled: BTreeSet<OptionalCategory>,
    /// Dining out meals per month
    pub dining_out_per_month: u32,
    /// Gym plan key in the reference data
    pub gym_plan: Option<String>,
    /// Streaming service keys in the reference data
    pub streaming: BTreeSet<String>,
    /// Monthly healthcare spend as entered by the user
    pub healthcare_monthly: Decimal,
    /// Monthly parking spend as entered by the user
    pub parking_monthly: Decimal,
}

impl InputProfile {
    /// Check the fields that do not require a reference table lookup
    pub fn validate(&self) -> Result<(), AppError> {
        if self.household_size == 0 {
            return Err(AppError::InvalidInput(
                "household size must be at least 1".to_string(),
            ));
        }
        if self.lifestyle_factor <= Decimal::ZERO {
            return Err(AppError::InvalidInput(format!(
                "lifestyle factor must be positive, got {}",
                self.lifestyle_factor
            )));
        }
        if self.healthcare_monthly < Decimal::ZERO {
            return Err(AppError::InvalidInput(format!(
                "healthcare amount cannot be negative, got {}",
                self.healthcare_monthly
            )));
        }
        if self.parking_monthly < Decimal::ZERO {
            return Err(AppError::InvalidInput(format!(
                "parking amount cannot be negative, got {}",
                self.parking_monthly
            )));
        }
        if self.enabled.contains(&OptionalCategory::Gym) && self.gym_plan.is_none() {
            return Err(AppError::InvalidInput(
                "gym category is enabled but no gym plan was selected".to_string(),
            ));
        }
        Ok(())
    }
}
