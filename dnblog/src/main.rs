//! dnblog CLI - blog posts in DNS TXT records
//!
//! Encodes a post into TXT-sized chunks and writes the resulting records.

#![forbid(unsafe_code)]

use std::io;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::debug;

use cli::{Cli, Command};
use config::Config;

mod cli;
mod commands;
mod config;

#[cfg(test)]
mod tests;

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();
    debug!("CLI args: {cli:?}");

    let config = Config::load(&cli.global.config)?;
    debug!("Config loaded: {config:?}");

    run_command(&cli, &config)
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Runs the appropriate command based on CLI args.
fn run_command(cli: &Cli, config: &Config) -> Result<()> {
    let ctx = commands::CommandContext::new(config, cli.global.dry_run);

    match &cli.command {
        Command::Publish(args) => commands::publish(&ctx, args),
        Command::Show(args) => commands::show(&ctx, args),
    }
}
