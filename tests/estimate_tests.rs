//! Integration tests driving the estimation pipeline over the embedded
//! Madison reference data

use std::collections::BTreeSet;
use std::sync::Arc;

use rust_decimal::Decimal;

use madcost::breakdown::Category;
use madcost::config;
use madcost::estimate::estimate;
use madcost::profile::{
    InputProfile, OptionalCategory, SpendingStyle, TransportMode, UnitType,
};
use madcost::tables::ReferenceTable;

fn madison_table() -> ReferenceTable {
    ReferenceTable::new(Arc::new(config::load_defaults().unwrap()))
}

fn base_profile() -> InputProfile {
    InputProfile {
        neighborhood: "downtown".to_string(),
        unit_type: UnitType::OneBedroom,
        style: SpendingStyle::Moderate,
        household_size: 1,
        lifestyle_factor: Decimal::ONE,
        transport: TransportMode::MetroBus,
        enabled: BTreeSet::new(),
        dining_out_per_month: 0,
        gym_plan: None,
        streaming: BTreeSet::new(),
        healthcare_monthly: Decimal::ZERO,
        parking_monthly: Decimal::ZERO,
    }
}

#[test]
fn test_downtown_moderate_baseline() {
    let table = madison_table();
    let breakdown = estimate(&base_profile(), &table).unwrap();

    assert_eq!(breakdown.amount(Category::Rent).unwrap(), Decimal::from(1500));
    assert_eq!(
        breakdown.amount(Category::Utilities).unwrap(),
        Decimal::from(180)
    );
    assert_eq!(
        breakdown.amount(Category::Transportation).unwrap(),
        Decimal::from(52)
    );
    assert_eq!(
        breakdown.amount(Category::Groceries).unwrap(),
        Decimal::from(320)
    );
    assert_eq!(breakdown.total(), Decimal::from(2052));
    assert_eq!(breakdown.annual_total(), Decimal::from(24624));
}

#[test]
fn test_cheapest_corner_of_the_table() {
    let table = madison_table();
    let mut profile = base_profile();
    profile.neighborhood = "monona".to_string();
    profile.unit_type = UnitType::Studio;
    profile.style = SpendingStyle::Frugal;
    profile.transport = TransportMode::BikeWalk;

    let breakdown = estimate(&profile, &table).unwrap();

    // 750 rent + 180 utilities + 10 bike + 200 groceries
    assert_eq!(breakdown.total(), Decimal::from(1140));
}

#[test]
fn test_own_car_picks_up_neighborhood_parking() {
    let table = madison_table();
    let mut profile = base_profile();
    profile.transport = TransportMode::OwnCar;

    let breakdown = estimate(&profile, &table).unwrap();

    // 80 gas + 105 insurance + 60 maintenance + 150 downtown parking
    assert_eq!(
        breakdown.amount(Category::Transportation).unwrap(),
        Decimal::from(395)
    );

    // Middleton has free parking, so the same car costs 245 there
    profile.neighborhood = "middleton".to_string();
    let breakdown = estimate(&profile, &table).unwrap();
    assert_eq!(
        breakdown.amount(Category::Transportation).unwrap(),
        Decimal::from(245)
    );
}

#[test]
fn test_full_lifestyle_profile() {
    let table = madison_table();
    let mut profile = base_profile();
    profile.enabled = OptionalCategory::ALL.into_iter().collect();
    profile.dining_out_per_month = 4;
    profile.gym_plan = Some("ymca".to_string());
    profile.streaming = BTreeSet::from(["netflix".to_string(), "spotify".to_string()]);
    profile.healthcare_monthly = Decimal::from(150);
    profile.parking_monthly = Decimal::from(85);

    let breakdown = estimate(&profile, &table).unwrap();

    assert_eq!(breakdown.len(), 13);
    assert_eq!(
        breakdown.amount(Category::DiningOut).unwrap(),
        Decimal::from(100)
    );
    assert_eq!(breakdown.amount(Category::Coffee).unwrap(), Decimal::from(50));
    assert_eq!(breakdown.amount(Category::Gym).unwrap(), Decimal::from(52));
    assert_eq!(
        breakdown.amount(Category::Streaming).unwrap(),
        Decimal::from(28)
    );
    assert_eq!(
        breakdown.amount(Category::Parking).unwrap(),
        Decimal::from(85)
    );

    // 1500 + 180 + 52 + 320 + 85 + 100 + 50 + 150 + 52 + 28 + 80 + 60 + 60
    assert_eq!(breakdown.total(), Decimal::from(2717));
}

#[test]
fn test_sum_invariant_across_the_whole_table() {
    let table = madison_table();

    for key in table.available_neighborhoods() {
        for style in SpendingStyle::ALL {
            for unit in UnitType::ALL {
                let mut profile = base_profile();
                profile.neighborhood = key.clone();
                profile.style = style;
                profile.unit_type = unit;
                profile.enabled = BTreeSet::from([
                    OptionalCategory::Coffee,
                    OptionalCategory::Entertainment,
                    OptionalCategory::Clothing,
                ]);

                let breakdown = estimate(&profile, &table).unwrap();
                let sum: Decimal = breakdown.iter().map(|(_, amount)| amount).sum();
                assert_eq!(breakdown.total(), sum);
                assert!(breakdown.iter().all(|(_, amount)| amount >= Decimal::ZERO));
            }
        }
    }
}

#[test]
fn test_toggle_removal_on_reference_data() {
    let table = madison_table();
    let mut profile = base_profile();
    profile.enabled = BTreeSet::from([OptionalCategory::Coffee, OptionalCategory::Entertainment]);

    let with_coffee = estimate(&profile, &table).unwrap();
    let coffee = with_coffee.amount(Category::Coffee).unwrap();
    assert_eq!(coffee, Decimal::from(50));

    profile.enabled.remove(&OptionalCategory::Coffee);
    let without_coffee = estimate(&profile, &table).unwrap();

    assert_eq!(without_coffee.amount(Category::Coffee), None);
    assert_eq!(without_coffee.total(), with_coffee.total() - coffee);
}

#[test]
fn test_determinism_across_fresh_loads() {
    let first_table = madison_table();
    let second_table = madison_table();

    let mut profile = base_profile();
    profile.enabled = BTreeSet::from([OptionalCategory::Streaming]);
    profile.streaming = BTreeSet::from(["hulu".to_string(), "max".to_string()]);
    profile.lifestyle_factor = "1.35".parse().unwrap();
    profile.household_size = 3;

    let first = estimate(&profile, &first_table).unwrap();
    let second = estimate(&profile, &second_table).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_chart_series_is_json_consumable() {
    let table = madison_table();
    let breakdown = estimate(&base_profile(), &table).unwrap();

    let value = serde_json::to_value(breakdown.chart_series()).unwrap();
    let slices = value.as_array().unwrap();
    assert_eq!(slices.len(), 4);

    assert_eq!(slices[0]["category"], "Rent");
    assert_eq!(slices[0]["amount"], "1500");
    assert_eq!(slices[3]["category"], "Groceries");
    assert_eq!(slices[3]["amount"], "320");
}

#[test]
fn test_unknown_neighborhood_lists_available_keys() {
    let table = madison_table();
    let mut profile = base_profile();
    profile.neighborhood = "shorewood-hills".to_string();

    let err = estimate(&profile, &table).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("downtown"));
    assert!(message.contains("monona"));
}
