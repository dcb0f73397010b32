use anyhow::Result;
use clap::Args;
use fmp_api::params::{GetEarningsCalendarParams, GetHistoricalEarningsCalendarParams};
use fmp_api::{Client, RequestOptions};

use super::parse_date;
use crate::output::{build_earnings_rows, print, OutputFormat};

#[derive(Args)]
pub struct EarningsArgs {
    /// Past reports for a single symbol instead of the market-wide calendar
    #[arg(long)]
    pub symbol: Option<String>,

    /// First day of the window (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Last day of the window (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Maximum number of past reports (with --symbol)
    #[arg(long, requires = "symbol")]
    pub limit: Option<u32>,
}

pub async fn run(
    args: &EarningsArgs,
    client: &Client,
    options: &RequestOptions,
    format: &OutputFormat,
) -> Result<()> {
    let since = args.from.as_deref().map(parse_date).transpose()?;
    let until = args.to.as_deref().map(parse_date).transpose()?;

    let entries = if let Some(symbol) = &args.symbol {
        let mut params = GetHistoricalEarningsCalendarParams::new(symbol);
        if let Some(since) = since {
            params = params.with_since(since);
        }
        if let Some(until) = until {
            params = params.with_until(until);
        }
        if let Some(limit) = args.limit {
            params = params.with_limit(limit);
        }
        client.get_historical_earnings_calendar(&params, options).await?
    } else {
        let mut params = GetEarningsCalendarParams::default();
        if let Some(since) = since {
            params = params.with_since(since);
        }
        if let Some(until) = until {
            params = params.with_until(until);
        }
        client.get_earnings_calendar(&params, options).await?
    };

    eprintln!("{} earnings entries", entries.len());

    print(&entries, build_earnings_rows(&entries), format)
}
