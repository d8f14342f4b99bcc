use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::error::AppError;

/// Income assumptions behind a savings projection
#[derive(Debug, Clone, PartialEq)]
pub struct SavingsGoal {
    pub gross_monthly_income: Decimal,
    /// Effective tax rate as a percentage, 0 to 100
    pub tax_rate_percent: Decimal,
}

/// Qualitative verdict on the projected savings rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SavingsHealth {
    /// Expenses exceed net income
    Deficit,
    /// Savings rate below 10%
    BelowTarget,
    /// Savings rate between 10% and 20%
    Adequate,
    /// Savings rate of 20% or more
    Strong,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsProjection {
    pub net_monthly_income: Decimal,
    pub monthly_savings: Decimal,
    pub savings_rate_percent: Decimal,
    pub annual_savings: Decimal,
    pub health: SavingsHealth,
}

/// Project monthly and annual savings against an estimated expense total
pub fn project(goal: &SavingsGoal, monthly_total: Decimal) -> Result<SavingsProjection, AppError> {
    if goal.gross_monthly_income < Decimal::ZERO {
        return Err(AppError::InvalidInput(format!(
            "gross monthly income cannot be negative, got {}",
            goal.gross_monthly_income
        )));
    }
    if goal.tax_rate_percent < Decimal::ZERO || goal.tax_rate_percent > Decimal::ONE_HUNDRED {
        return Err(AppError::InvalidInput(format!(
            "tax rate must be between 0 and 100, got {}",
            goal.tax_rate_percent
        )));
    }

    let net_monthly_income =
        goal.gross_monthly_income * (Decimal::ONE - goal.tax_rate_percent / Decimal::ONE_HUNDRED);
    let monthly_savings = net_monthly_income - monthly_total;
    let savings_rate_percent = if net_monthly_income > Decimal::ZERO {
        (monthly_savings / net_monthly_income * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    } else {
        Decimal::ZERO
    };

    let health = if monthly_savings < Decimal::ZERO {
        SavingsHealth::Deficit
    } else if savings_rate_percent < Decimal::from(10) {
        SavingsHealth::BelowTarget
    } else if savings_rate_percent < Decimal::from(20) {
        SavingsHealth::Adequate
    } else {
        SavingsHealth::Strong
    };

    Ok(SavingsProjection {
        net_monthly_income,
        monthly_savings,
        savings_rate_percent,
        annual_savings: monthly_savings * Decimal::from(12),
        health,
    })
}
