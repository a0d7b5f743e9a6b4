//! Fetch command implementation

use crate::config::Config;
use crate::feed::PriceSource;
use clap::Args;

#[derive(Args, Debug)]
pub struct FetchArgs {}

impl FetchArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let source = super::price_source(config)?;
        let price = source.fetch_price().await?;
        println!("{} {:.3}", source.pair(), price);
        Ok(())
    }
}
