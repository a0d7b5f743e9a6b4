//! CLI interface for bandwatch
//!
//! Provides subcommands for:
//! - `run`: Start the polling monitor
//! - `fetch`: Fetch and print a single rate
//! - `config`: Show the effective configuration

mod fetch;
mod run;

pub use fetch::FetchArgs;
pub use run::RunArgs;

use crate::config::Config;
use crate::feed::{ExchangeRateClient, ExchangeRateConfig};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bandwatch")]
#[command(about = "Exchange-rate monitor that alerts on Bollinger band expansion entries")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the polling monitor
    Run(RunArgs),
    /// Fetch and print the current rate
    Fetch(FetchArgs),
    /// Show the effective configuration (secrets masked)
    Config,
}

/// Build the rate client; a missing API key is fatal
fn price_source(config: &Config) -> anyhow::Result<ExchangeRateClient> {
    let api_key = config.require_api_key()?;
    let client = ExchangeRateClient::new(ExchangeRateConfig::from_feed(&config.feed, api_key))?;
    Ok(client)
}
