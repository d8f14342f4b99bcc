use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::info;

use madcost::breakdown::{ChartSlice, CostBreakdown};
use madcost::config;
use madcost::error::AppError;
use madcost::estimate::estimate;
use madcost::profile::InputProfile;
use madcost::savings::{self, SavingsGoal, SavingsHealth, SavingsProjection};
use madcost::tables::ReferenceTable;

use crate::cli::EstimateArgs;

/// JSON report shape for chart and script consumers
#[derive(Debug, Serialize)]
struct Report {
    neighborhood: String,
    categories: Vec<ChartSlice>,
    total: Decimal,
    annual_total: Decimal,
    daily_average: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    savings: Option<SavingsProjection>,
}

/// Execute the estimate command
pub fn execute(config_path: &Path, args: &EstimateArgs) -> Result<()> {
    info!("Loading reference data");
    let cfg = config::load_config(config_path)?;
    let table = ReferenceTable::new(Arc::new(cfg));

    match run(args, &table) {
        Ok((profile, breakdown, savings)) => {
            if args.json {
                print_json(&profile, &breakdown, savings)?;
            } else {
                print_report(&table, &profile, &breakdown, savings.as_ref());
            }
            Ok(())
        }
        Err(err) if args.json => {
            // Structured rejection for script consumers
            let body = serde_json::json!({
                "error": {
                    "message": err.to_string(),
                    "type": err.type_name(),
                }
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

fn run(
    args: &EstimateArgs,
    table: &ReferenceTable,
) -> Result<(InputProfile, CostBreakdown, Option<SavingsProjection>), AppError> {
    let profile = build_profile(args)?;

    info!(
        neighborhood = %profile.neighborhood,
        style = %profile.style,
        household = profile.household_size,
        "Computing expense breakdown"
    );
    let breakdown = estimate(&profile, table)?;

    let savings = match &args.income {
        Some(income) => {
            let goal = SavingsGoal {
                gross_monthly_income: parse_amount(income, "income")?,
                tax_rate_percent: parse_amount(&args.tax_rate, "tax rate")?,
            };
            Some(savings::project(&goal, breakdown.total())?)
        }
        None => None,
    };

    Ok((profile, breakdown, savings))
}

/// Build an InputProfile from the raw CLI strings
fn build_profile(args: &EstimateArgs) -> Result<InputProfile, AppError> {
    let mut enabled = BTreeSet::new();
    for raw in &args.include {
        enabled.insert(raw.parse()?);
    }

    Ok(InputProfile {
        neighborhood: args.neighborhood.clone(),
        unit_type: args.unit.parse()?,
        style: args.style.parse()?,
        household_size: args.household,
        lifestyle_factor: parse_amount(&args.lifestyle_factor, "lifestyle factor")?,
        transport: args.transport.parse()?,
        enabled,
        dining_out_per_month: args.dining_out,
        gym_plan: args.gym.clone(),
        streaming: args.streaming.iter().cloned().collect(),
        healthcare_monthly: parse_amount(&args.healthcare, "healthcare amount")?,
        parking_monthly: parse_amount(&args.parking, "parking amount")?,
    })
}

fn parse_amount(raw: &str, field: &str) -> Result<Decimal, AppError> {
    raw.parse::<Decimal>()
        .map_err(|_| AppError::InvalidInput(format!("{} '{}' is not a valid number", field, raw)))
}

/// Round for display; the underlying figures keep full precision
fn whole(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

fn print_json(
    profile: &InputProfile,
    breakdown: &CostBreakdown,
    savings: Option<SavingsProjection>,
) -> Result<()> {
    let report = Report {
        neighborhood: profile.neighborhood.clone(),
        categories: breakdown.chart_series(),
        total: breakdown.total(),
        annual_total: breakdown.annual_total(),
        daily_average: breakdown.daily_average(),
        savings,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_report(
    table: &ReferenceTable,
    profile: &InputProfile,
    breakdown: &CostBreakdown,
    savings: Option<&SavingsProjection>,
) {
    let hood_name = table
        .config()
        .neighborhoods
        .get(&profile.neighborhood)
        .map(|hood| hood.name.clone())
        .unwrap_or_else(|| profile.neighborhood.clone());

    println!("{}", "Madison, WI Monthly Expense Estimate".bold());
    println!(
        "{}",
        format!(
            "{} · {} · {} · {} · {} person(s)",
            hood_name,
            profile.unit_type.label(),
            profile.style,
            profile.transport,
            profile.household_size
        )
        .dimmed()
    );
    println!();

    println!("  {}: ${}", "Monthly Total".cyan(), breakdown.total());
    println!("  {}: ${}", "Annual Total".cyan(), breakdown.annual_total());
    println!("  {}: ${}", "Daily Average".cyan(), breakdown.daily_average());
    println!();

    println!("{}", "Monthly Breakdown:".bold());
    for (category, amount) in breakdown.iter() {
        match breakdown.share_percent(category) {
            Some(share) => println!("  {} — ${} ({}%)", category.label().cyan(), amount, share),
            None => println!("  {} — ${}", category.label().cyan(), amount),
        }
    }
    println!("  {}", format!("Total: ${}", breakdown.total()).bold());

    if let Some(projection) = savings {
        println!();
        println!("{}", "Savings Goal:".bold());
        println!(
            "  {}: ${}",
            "Est. Net Monthly Income".cyan(),
            whole(projection.net_monthly_income)
        );
        println!(
            "  {}: ${} ({}% savings rate)",
            "Projected Monthly Savings".cyan(),
            whole(projection.monthly_savings),
            projection.savings_rate_percent
        );
        println!(
            "  {}: ${}",
            "Projected Annual Savings".cyan(),
            whole(projection.annual_savings)
        );

        match projection.health {
            SavingsHealth::Deficit => {
                println!(
                    "  {}",
                    "Expenses exceed net income at current settings.".red()
                );
            }
            SavingsHealth::BelowTarget => {
                println!(
                    "  {}",
                    "Savings rate below 10% — consider adjusting spending.".yellow()
                );
            }
            SavingsHealth::Adequate => {}
            SavingsHealth::Strong => {
                println!(
                    "  {}",
                    "Solid savings rate — on track for financial health!".green()
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use madcost::breakdown::Category;
    use madcost::profile::{OptionalCategory, SpendingStyle, TransportMode, UnitType};

    fn madison_table() -> ReferenceTable {
        ReferenceTable::new(Arc::new(config::load_defaults().unwrap()))
    }

    #[test]
    fn test_build_profile_from_defaults() {
        let profile = build_profile(&EstimateArgs::default()).unwrap();

        assert_eq!(profile.neighborhood, "downtown");
        assert_eq!(profile.unit_type, UnitType::OneBedroom);
        assert_eq!(profile.style, SpendingStyle::Moderate);
        assert_eq!(profile.transport, TransportMode::MetroBus);
        assert_eq!(profile.lifestyle_factor, Decimal::ONE);
        assert!(profile.enabled.is_empty());
    }

    #[test]
    fn test_build_profile_parses_includes() {
        let mut args = EstimateArgs::default();
        args.include = vec!["coffee".to_string(), "gym".to_string()];
        args.gym = Some("ymca".to_string());

        let profile = build_profile(&args).unwrap();
        assert!(profile.enabled.contains(&OptionalCategory::Coffee));
        assert!(profile.enabled.contains(&OptionalCategory::Gym));
        assert_eq!(profile.gym_plan.as_deref(), Some("ymca"));
    }

    #[test]
    fn test_build_profile_rejects_bad_values() {
        let mut args = EstimateArgs::default();
        args.include = vec!["cable-tv".to_string()];
        assert!(build_profile(&args).is_err());

        let mut args = EstimateArgs::default();
        args.lifestyle_factor = "a-lot".to_string();
        let err = build_profile(&args).unwrap_err();
        assert!(err.to_string().contains("lifestyle factor"));
    }

    #[test]
    fn test_run_default_scenario() {
        let table = madison_table();
        let (_, breakdown, savings) = run(&EstimateArgs::default(), &table).unwrap();

        // Downtown 1BR moderate + metro bus + moderate groceries
        assert_eq!(breakdown.amount(Category::Rent).unwrap(), Decimal::from(1500));
        assert_eq!(breakdown.total(), Decimal::from(2052));
        assert!(savings.is_none());
    }

    #[test]
    fn test_run_with_savings_projection() {
        let table = madison_table();
        let mut args = EstimateArgs::default();
        args.income = Some("5000".to_string());

        let (_, breakdown, savings) = run(&args, &table).unwrap();
        let projection = savings.unwrap();

        assert_eq!(projection.net_monthly_income, Decimal::from(3900));
        assert_eq!(
            projection.monthly_savings,
            Decimal::from(3900) - breakdown.total()
        );
    }
}
