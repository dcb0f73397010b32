use anyhow::{anyhow, Result};
use clap::Args;
use fmp_api::params::{ListHistoricalBarsParams, ListHistoricalEodBarsParams, Timeframe};
use fmp_api::{Client, RequestOptions};

use super::parse_date;
use crate::output::{build_bar_rows, build_eod_rows, print, OutputFormat};

#[derive(Args)]
pub struct BarsArgs {
    /// Ticker symbol
    pub symbol: String,

    /// Bar size: 1min, 5min, 15min, 30min, 1hour, 4hour, 1day
    #[arg(long, default_value = "1day")]
    pub timeframe: String,

    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

#[derive(Args)]
pub struct EodArgs {
    /// Ticker symbol
    pub symbol: String,

    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

pub async fn run(
    args: &BarsArgs,
    client: &Client,
    options: &RequestOptions,
    format: &OutputFormat,
) -> Result<()> {
    let timeframe: Timeframe = args
        .timeframe
        .parse()
        .map_err(|_| anyhow!("unknown timeframe `{}`", args.timeframe))?;

    let mut params = ListHistoricalBarsParams::new(&args.symbol, timeframe);
    if let Some(from) = &args.from {
        params = params.with_since(parse_date(from)?);
    }
    if let Some(to) = &args.to {
        params = params.with_until(parse_date(to)?);
    }

    let bars = client.list_historical_bars(&params, options).await?;
    eprintln!("{} {} bars for {}", bars.len(), timeframe, args.symbol);

    print(&bars, build_bar_rows(&bars), format)
}

pub async fn run_eod(
    args: &EodArgs,
    client: &Client,
    options: &RequestOptions,
    format: &OutputFormat,
) -> Result<()> {
    let mut params = ListHistoricalEodBarsParams::new(&args.symbol);
    if let Some(from) = &args.from {
        params = params.with_since(parse_date(from)?);
    }
    if let Some(to) = &args.to {
        params = params.with_until(parse_date(to)?);
    }

    let bars = client.list_historical_eod_bars(&params, options).await?;

    print(&bars, build_eod_rows(&bars), format)
}
