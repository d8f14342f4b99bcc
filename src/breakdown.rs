use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Average days per month, used for the daily-average figure
const DAYS_PER_MONTH: Decimal = Decimal::from_parts(3044, 0, 0, false, 2);

/// Expense categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Rent,
    Utilities,
    Transportation,
    Parking,
    Groceries,
    DiningOut,
    Coffee,
    Healthcare,
    Gym,
    Streaming,
    Entertainment,
    PersonalCare,
    Clothing,
}

impl Category {
    /// Human-readable label, also used as the chart series name
    pub fn label(&self) -> &'static str {
        match self {
            Category::Rent => "Rent",
            Category::Utilities => "Utilities",
            Category::Transportation => "Transportation",
            Category::Parking => "Parking",
            Category::Groceries => "Groceries",
            Category::DiningOut => "Dining Out",
            Category::Coffee => "Coffee / Cafes",
            Category::Healthcare => "Healthcare",
            Category::Gym => "Gym / Fitness",
            Category::Streaming => "Streaming",
            Category::Entertainment => "Entertainment",
            Category::PersonalCare => "Personal Care",
            Category::Clothing => "Clothing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One (category, amount) pair in a form any chart renderer can consume
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub category: &'static str,
    pub amount: Decimal,
}

/// The computed monthly cost result
///
/// Produced fresh by every estimate call and never mutated; the total is
/// derived at construction so it always equals the sum of the amounts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    items: BTreeMap<Category, Decimal>,
    total: Decimal,
}

impl CostBreakdown {
    pub fn from_items(items: BTreeMap<Category, Decimal>) -> Self {
        let total = items.values().copied().sum();
        Self { items, total }
    }

    /// Sum of all included category amounts
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Amount for a category, or None if it is not included
    pub fn amount(&self, category: Category) -> Option<Decimal> {
        self.items.get(&category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, Decimal)> + '_ {
        self.items.iter().map(|(category, amount)| (*category, *amount))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn annual_total(&self) -> Decimal {
        self.total * Decimal::from(12)
    }

    /// Monthly total spread over an average month, rounded to whole dollars
    pub fn daily_average(&self) -> Decimal {
        (self.total / DAYS_PER_MONTH)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Share of the total for a category, as a percentage with one decimal
    pub fn share_percent(&self, category: Category) -> Option<Decimal> {
        if self.total.is_zero() {
            return None;
        }
        self.amount(category).map(|amount| {
            (amount / self.total * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        })
    }

    /// The breakdown as labeled (category, amount) pairs, in display order
    pub fn chart_series(&self) -> Vec<ChartSlice> {
        self.iter()
            .map(|(category, amount)| ChartSlice {
                category: category.label(),
                amount,
            })
            .collect()
    }
}
