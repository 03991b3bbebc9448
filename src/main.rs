use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use item_catalog::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    // Initialize tracing/logging early
    init_tracing();

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Start => {
            commands::start::execute(&args.config).await?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Stats { url } => {
            commands::stats::execute(&args.config, url).await?;
        }
        cli::Commands::Version => {
            println!("Item Catalog v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
