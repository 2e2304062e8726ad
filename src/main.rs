//! Sakuweb main entry point

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use env_logger::Env;

use sakuweb_api::start_server;
use sakuweb_config::Config;
use sakuweb_core::Tracker;
use sakuweb_store::Store;

#[derive(Parser, Debug)]
#[command(name = "sakuweb")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight personal-finance tracking web service", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // A missing config file is fine: every field has a default
    let config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        Config::default()
    };

    env_logger::Builder::from_env(
        Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    if !args.config.exists() {
        log::warn!(
            "config file {} not found, using defaults",
            args.config.display()
        );
    }

    log::info!("Connecting to database: {}", config.database.url);
    let store = Store::connect(&config.database.url, config.database.max_connections).await?;
    store.migrate().await?;

    let tracker = Arc::new(Tracker::new(store));
    start_server(config, tracker).await?;

    Ok(())
}
