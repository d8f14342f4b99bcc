use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "madcost", version, about = "Madison, WI monthly expense estimator")]
pub struct Cli {
    /// Reference data overlay file path
    #[arg(short, long, default_value = "madcost.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Estimate monthly expenses (default)
    Estimate(EstimateArgs),

    /// List the neighborhoods in the reference data
    Neighborhoods,

    /// Reference data management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct EstimateArgs {
    /// Neighborhood key (see `madcost neighborhoods`)
    #[arg(short, long, default_value = "downtown")]
    pub neighborhood: String,

    /// Unit type: studio, 1br, 2br
    #[arg(short, long, default_value = "1br")]
    pub unit: String,

    /// Spending style: frugal, moderate, comfortable
    #[arg(short, long, default_value = "moderate")]
    pub style: String,

    /// Number of people in the household
    #[arg(long, default_value = "1")]
    pub household: u32,

    /// Scaling factor applied to the style-rated categories
    #[arg(long, default_value = "1.0")]
    pub lifestyle_factor: String,

    /// Primary transport: metro-bus, own-car, bike-walk, hybrid
    #[arg(short, long, default_value = "metro-bus")]
    pub transport: String,

    /// Optional category to include (repeatable): parking, dining-out,
    /// coffee, healthcare, gym, streaming, entertainment, personal-care,
    /// clothing
    #[arg(short = 'i', long = "include")]
    pub include: Vec<String>,

    /// Dining out meals per month (with --include dining-out)
    #[arg(long, default_value = "4")]
    pub dining_out: u32,

    /// Gym plan key (with --include gym)
    #[arg(long)]
    pub gym: Option<String>,

    /// Streaming service key (with --include streaming, repeatable)
    #[arg(long = "streaming")]
    pub streaming: Vec<String>,

    /// Monthly healthcare amount (with --include healthcare)
    #[arg(long, default_value = "150")]
    pub healthcare: String,

    /// Monthly parking amount (with --include parking)
    #[arg(long, default_value = "0")]
    pub parking: String,

    /// Monthly gross income; enables the savings projection
    #[arg(long)]
    pub income: Option<String>,

    /// Effective tax rate percent for the savings projection
    #[arg(long, default_value = "22")]
    pub tax_rate: String,

    /// Emit the result as JSON (chart-consumable series)
    #[arg(long)]
    pub json: bool,
}

impl Default for EstimateArgs {
    fn default() -> Self {
        Self {
            neighborhood: "downtown".to_string(),
            unit: "1br".to_string(),
            style: "moderate".to_string(),
            household: 1,
            lifestyle_factor: "1.0".to_string(),
            transport: "metro-bus".to_string(),
            include: Vec::new(),
            dining_out: 4,
            gym: None,
            streaming: Vec::new(),
            healthcare: "150".to_string(),
            parking: "0".to_string(),
            income: None,
            tax_rate: "22".to_string(),
            json: false,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective reference data
    Show,

    /// Validate the reference data file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Estimate if none provided
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Estimate(EstimateArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_estimate() {
        let cli = Cli {
            config: PathBuf::from("madcost.toml"),
            command: None,
        };

        match cli.get_command() {
            Commands::Estimate(args) => {
                assert_eq!(args.neighborhood, "downtown");
                assert_eq!(args.household, 1);
                assert!(args.include.is_empty());
            }
            _ => panic!("Expected Estimate command"),
        }
    }

    #[test]
    fn test_cli_parsing_estimate_flags() {
        let args = vec![
            "madcost",
            "estimate",
            "--neighborhood",
            "monona",
            "--unit",
            "2br",
            "--style",
            "frugal",
            "--household",
            "2",
            "--include",
            "coffee",
            "--include",
            "streaming",
            "--streaming",
            "netflix",
            "--streaming",
            "spotify",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Estimate(est) => {
                assert_eq!(est.neighborhood, "monona");
                assert_eq!(est.unit, "2br");
                assert_eq!(est.style, "frugal");
                assert_eq!(est.household, 2);
                assert_eq!(est.include, vec!["coffee", "streaming"]);
                assert_eq!(est.streaming, vec!["netflix", "spotify"]);
            }
            _ => panic!("Expected Estimate command"),
        }
    }

    #[test]
    fn test_cli_parsing_estimate_defaults_match_default_impl() {
        let cli = Cli::try_parse_from(vec!["madcost", "estimate"]).unwrap();

        match cli.get_command() {
            Commands::Estimate(est) => {
                let defaults = EstimateArgs::default();
                assert_eq!(est.neighborhood, defaults.neighborhood);
                assert_eq!(est.unit, defaults.unit);
                assert_eq!(est.style, defaults.style);
                assert_eq!(est.lifestyle_factor, defaults.lifestyle_factor);
                assert_eq!(est.tax_rate, defaults.tax_rate);
            }
            _ => panic!("Expected Estimate command"),
        }
    }

    #[test]
    fn test_cli_parsing_config_show() {
        let args = vec!["madcost", "config", "show"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Config { action } => {
                assert!(matches!(action, ConfigCommands::Show));
            }
            _ => panic!("Expected Config command"),
        }
    }

    #[test]
    fn test_cli_parsing_neighborhoods() {
        let cli = Cli::try_parse_from(vec!["madcost", "neighborhoods"]).unwrap();
        assert!(matches!(cli.get_command(), Commands::Neighborhoods));
    }
}
