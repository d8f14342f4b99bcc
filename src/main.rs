use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use madcost::init_tracing;

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    // Initialize tracing/logging early
    init_tracing();

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Estimate(est) => {
            commands::estimate::execute(&args.config, &est)?;
        }
        cli::Commands::Neighborhoods => {
            commands::neighborhoods::execute(&args.config)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Version => {
            println!("madcost v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
