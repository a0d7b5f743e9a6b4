//! Run command implementation

use crate::config::Config;
use crate::monitor::{Monitor, TickOutcome};
use crate::notify;
use crate::signal::SignalParams;
use clap::Args;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Override the poll interval (seconds)
    #[arg(long)]
    pub interval_secs: Option<u64>,

    /// Run a single poll and exit
    #[arg(long)]
    pub once: bool,
}

impl RunArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut config = config.clone();
        if let Some(secs) = self.interval_secs {
            config.monitor.poll_interval_secs = secs;
        }
        config.validate()?;

        let source = super::price_source(&config)?;
        let notifier = notify::from_config(&config.notify)?;

        let mut monitor = Monitor::new(
            source,
            notifier,
            SignalParams::from(&config.strategy),
            config.monitor.history_capacity,
            Duration::from_secs(config.monitor.poll_interval_secs),
        );

        if self.once {
            match monitor.tick().await {
                TickOutcome::FetchFailed => anyhow::bail!("Price fetch failed"),
                TickOutcome::NoSignal { price } => println!("{price:.3} NONE"),
                TickOutcome::Signalled(event) => println!("{}", event.message),
            }
            return Ok(());
        }

        let shutdown = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
            tracing::info!("Shutdown requested");
        };

        monitor.run(shutdown).await;
        Ok(())
    }
}
