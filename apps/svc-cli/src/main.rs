mod cli;
mod dispatch;
mod output;

use anyhow::Result;
use clap::Parser;
use svc_bootstrap::{AppConfig, OutputFormat};

use crate::cli::{Cli, Commands};
use crate::dispatch::Outcome;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (APP__*) -> 4) CLI overrides
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&cli.overrides());

    svc_bootstrap::init_logging(&config.logging)?;
    tracing::debug!(output = ?config.output.format, "svc-cli starting");

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_pretty_json()?);
        return Ok(());
    }

    // Dispatch subcommands (default: check)
    match cli.command.unwrap_or(Commands::Check) {
        Commands::Calc { op } => {
            let outcome = dispatch::calc(calculator::local_client().as_ref(), &op)?;
            print_outcome(&outcome, config.output.format)
        }
        Commands::Text { op } => {
            let outcome = dispatch::text(string_utils::local_client().as_ref(), &op)?;
            print_outcome(&outcome, config.output.format)
        }
        Commands::Check => check_config(&config),
    }
}

fn print_outcome(outcome: &Outcome, format: OutputFormat) -> Result<()> {
    println!("{}", output::render(outcome, format)?);
    Ok(())
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", config.to_pretty_json()?);
    Ok(())
}
