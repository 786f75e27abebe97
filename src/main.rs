//! TradeDesk - a terminal workbench for B2B marketplace operations
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;

use tradedesk_app::config;

/// TradeDesk - a terminal workbench for B2B marketplace operations
#[derive(Parser, Debug)]
#[command(name = "tradedesk")]
#[command(about = "A terminal client for the marketplace back office", long_about = None)]
struct Args {
    /// Path to the settings file (defaults to the platform config dir)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the marketplace API base URL
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    tradedesk_core::logging::init()?;

    let mut settings = config::load_settings(args.config.as_deref())?;
    if let Some(api_url) = args.api_url {
        settings.api.base_url = api_url;
    }
    tracing::info!("using API at {}", settings.api.base_url);

    tradedesk::run(settings).await?;
    Ok(())
}
