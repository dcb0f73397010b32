mod commands;
mod output;

use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use fmp_api::{CancellationToken, Client, ClientConfig, RequestOptions};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "fmp")]
#[command(about = "Query market data from Financial Modeling Prep")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API key. Defaults to the FMP_API_KEY environment variable
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// API root. Defaults to FMP_BASE_URL, then the production endpoint
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds. Defaults to FMP_TIMEOUT_SECS, then 30
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Company profiles for one or more symbols
    Profile(commands::profile::ProfileArgs),
    /// One page of the bulk CSV profile export
    BulkProfiles(commands::profile::BulkProfilesArgs),
    /// Intraday or daily bars
    Bars(commands::bars::BarsArgs),
    /// End-of-day prices
    Eod(commands::bars::EodArgs),
    /// Full quotes for one or more symbols
    Quote(commands::quote::QuoteArgs),
    /// Price change over standard windows
    PriceChange(commands::quote::PriceChangeArgs),
    /// Key metrics for a symbol
    Metrics(commands::quote::MetricsArgs),
    /// Biggest gainers of the session
    Gainers,
    /// Biggest losers of the session
    Losers,
    /// Most actively traded tickers of the session
    Actives,
    /// Earnings calendar, market-wide or for one symbol
    Earnings(commands::earnings::EarningsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fmp=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format: OutputFormat = cli.output.parse()?;

    let mut config = ClientConfig::from_env();
    if let Some(api_key) = &cli.api_key {
        config = config.with_api_key(api_key);
    }
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    if config.api_key.is_empty() {
        bail!("No API key: pass --api-key or set FMP_API_KEY");
    }
    let client = Client::from_config(config)?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupted, cancelling request");
            on_interrupt.cancel();
        }
    });
    let options = RequestOptions::default().with_cancellation(cancel);

    match &cli.command {
        Commands::Profile(args) => commands::profile::run(args, &client, &options, &format).await?,
        Commands::BulkProfiles(args) => {
            commands::profile::run_bulk(args, &client, &options, &format).await?
        }
        Commands::Bars(args) => commands::bars::run(args, &client, &options, &format).await?,
        Commands::Eod(args) => commands::bars::run_eod(args, &client, &options, &format).await?,
        Commands::Quote(args) => commands::quote::run(args, &client, &options, &format).await?,
        Commands::PriceChange(args) => {
            commands::quote::run_price_change(args, &client, &options, &format).await?
        }
        Commands::Metrics(args) => {
            commands::quote::run_metrics(args, &client, &options, &format).await?
        }
        Commands::Gainers => {
            commands::movers::run(commands::movers::Mover::Gainers, &client, &options, &format)
                .await?
        }
        Commands::Losers => {
            commands::movers::run(commands::movers::Mover::Losers, &client, &options, &format)
                .await?
        }
        Commands::Actives => {
            commands::movers::run(commands::movers::Mover::Actives, &client, &options, &format)
                .await?
        }
        Commands::Earnings(args) => {
            commands::earnings::run(args, &client, &options, &format).await?
        }
    }

    Ok(())
}
