use anyhow::{anyhow, Result};
use clap::Args;
use fmp_api::params::{FundamentalsParams, Period, SymbolParams, SymbolsParams};
use fmp_api::{Client, RequestOptions};

use crate::output::{
    build_metrics_rows, build_price_change_rows, build_quote_rows, print, OutputFormat,
};

#[derive(Args)]
pub struct QuoteArgs {
    /// Ticker symbols, comma-separated (e.g. AAPL,MSFT)
    #[arg(value_delimiter = ',', required = true)]
    pub symbols: Vec<String>,
}

#[derive(Args)]
pub struct PriceChangeArgs {
    /// Ticker symbols, comma-separated (e.g. AAPL,MSFT)
    #[arg(value_delimiter = ',', required = true)]
    pub symbols: Vec<String>,
}

#[derive(Args)]
pub struct MetricsArgs {
    /// Ticker symbol
    pub symbol: String,

    /// Reporting period: annual or quarter
    #[arg(long, default_value = "annual")]
    pub period: String,

    /// Number of periods to return
    #[arg(long)]
    pub limit: Option<u32>,
}

fn symbols_params(symbols: &[String]) -> SymbolsParams {
    symbols
        .iter()
        .fold(SymbolsParams::default(), |params, s| params.with_symbol(s))
}

pub async fn run(
    args: &QuoteArgs,
    client: &Client,
    options: &RequestOptions,
    format: &OutputFormat,
) -> Result<()> {
    let prices = if let [symbol] = args.symbols.as_slice() {
        client
            .get_full_price(&SymbolParams::new(symbol), options)
            .await?
            .into_iter()
            .collect::<Vec<_>>()
    } else {
        client
            .batch_get_full_prices(&symbols_params(&args.symbols), options)
            .await?
    };

    if prices.is_empty() {
        eprintln!("No quotes found");
    }

    print(&prices, build_quote_rows(&prices), format)
}

pub async fn run_price_change(
    args: &PriceChangeArgs,
    client: &Client,
    options: &RequestOptions,
    format: &OutputFormat,
) -> Result<()> {
    let changes = client
        .batch_get_price_changes(&symbols_params(&args.symbols), options)
        .await?;

    print(&changes, build_price_change_rows(&changes), format)
}

pub async fn run_metrics(
    args: &MetricsArgs,
    client: &Client,
    options: &RequestOptions,
    format: &OutputFormat,
) -> Result<()> {
    let period: Period = args
        .period
        .parse()
        .map_err(|_| anyhow!("unknown period `{}`, expected annual or quarter", args.period))?;

    let mut params = FundamentalsParams::new(&args.symbol).with_period(period);
    if let Some(limit) = args.limit {
        params = params.with_limit(limit);
    }

    let metrics = client.list_ticker_key_metrics(&params, options).await?;

    print(&metrics, build_metrics_rows(&metrics), format)
}
