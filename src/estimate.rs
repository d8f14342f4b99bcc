use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::breakdown::{Category, CostBreakdown};
use crate::error::AppError;
use crate::profile::{InputProfile, OptionalCategory};
use crate::tables::{ReferenceTable, StyleRated};

/// Round to the nearest whole dollar, half-up
///
/// Amounts are never negative here, so midpoint-away-from-zero is exactly
/// round-half-up; applied per category before summation.
fn round_dollars(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Map an input profile to a monthly cost breakdown
///
/// Pure and deterministic: identical profile and table always yield an
/// identical breakdown. Any invalid field or failed lookup aborts the whole
/// computation; no partial totals are returned.
///
/// Scaling rules:
/// - Groceries, dining out, coffee, gym, entertainment, personal care, and
///   clothing scale linearly with household size. Rent, utilities,
///   transportation, parking, streaming, and healthcare do not.
/// - The lifestyle factor applies to the style-rated categories only
///   (groceries, dining out, coffee, entertainment, personal care,
///   clothing); priced and user-entered figures stay fixed.
pub fn estimate(
    profile: &InputProfile,
    table: &ReferenceTable,
) -> Result<CostBreakdown, AppError> {
    profile.validate()?;

    let household = Decimal::from(profile.household_size);
    let factor = profile.lifestyle_factor;
    let mut items = BTreeMap::new();

    // Mandatory categories, always included
    items.insert(
        Category::Rent,
        round_dollars(table.rent_for(&profile.neighborhood, profile.unit_type, profile.style)?),
    );
    items.insert(Category::Utilities, round_dollars(table.utilities_total()));
    items.insert(
        Category::Transportation,
        round_dollars(table.transport_cost(profile.transport, &profile.neighborhood)?),
    );
    items.insert(
        Category::Groceries,
        round_dollars(table.style_rate(StyleRated::Groceries, profile.style) * household * factor),
    );

    // Optional categories, present only while their toggle is on
    for toggle in &profile.enabled {
        let amount = match toggle {
            OptionalCategory::Parking => profile.parking_monthly,
            OptionalCategory::DiningOut => {
                Decimal::from(profile.dining_out_per_month)
                    * table.style_rate(StyleRated::DiningPerMeal, profile.style)
                    * household
                    * factor
            }
            OptionalCategory::Coffee => {
                table.style_rate(StyleRated::Coffee, profile.style) * household * factor
            }
            OptionalCategory::Healthcare => profile.healthcare_monthly,
            OptionalCategory::Gym => {
                let plan = profile.gym_plan.as_deref().ok_or_else(|| {
                    AppError::InvalidInput(
                        "gym category is enabled but no gym plan was selected".to_string(),
                    )
                })?;
                table.gym_fee(plan)? * household
            }
            OptionalCategory::Streaming => {
                let mut sum = Decimal::ZERO;
                for service in &profile.streaming {
                    sum += table.streaming_fee(service)?;
                }
                sum
            }
            OptionalCategory::Entertainment => {
                table.style_rate(StyleRated::Entertainment, profile.style) * household * factor
            }
            OptionalCategory::PersonalCare => {
                table.style_rate(StyleRated::PersonalCare, profile.style) * household * factor
            }
            OptionalCategory::Clothing => {
                table.style_rate(StyleRated::Clothing, profile.style) * household * factor
            }
        };
        items.insert(toggle.category(), round_dollars(amount));
    }

    Ok(CostBreakdown::from_items(items))
}
