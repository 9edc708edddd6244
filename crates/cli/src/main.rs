//! blucky CLI entry point

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod args;
mod commands;
mod config;

use args::{Cli, Commands};
use config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging: flag, then config file, then "info"
    let log_level = match cli.log_level.clone() {
        Some(level) => level,
        None => AppConfig::load(cli.config.as_deref())
            .map(|config| config.general.log_level)
            .unwrap_or_else(|_| "info".to_string()),
    };
    init_logging(&log_level)?;

    // Execute command
    match cli.command {
        Commands::Classify(args) => commands::classify::execute(args).await,
        Commands::Plan(args) => commands::plan::execute(args).await,
        Commands::Show(args) => commands::show::execute(args, cli.config).await,
        Commands::Reorder(args) => commands::reorder::execute(args, cli.config).await,
        Commands::Create(args) => commands::create::execute(args, cli.config).await,
        Commands::Edit(args) => commands::edit::execute(args, cli.config).await,
        Commands::Analytics(args) => commands::analytics::execute(args, cli.config).await,
        Commands::Accounts(args) => commands::accounts::execute(args, cli.config).await,
        Commands::Config(args) => commands::config::execute(args, cli.config).await,
        Commands::Doctor(args) => commands::doctor::execute(args, cli.config).await,
    }
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}
