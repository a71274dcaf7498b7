use anyhow::Context;
use clap::Parser;
use climate_api::cli::{run, Cli};
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    run(cli).await.context("climate-api failed")
}
