use anyhow::Result;
use fmp_api::{Client, RequestOptions};

use crate::output::{build_mover_rows, print, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub enum Mover {
    Gainers,
    Losers,
    Actives,
}

pub async fn run(
    mover: Mover,
    client: &Client,
    options: &RequestOptions,
    format: &OutputFormat,
) -> Result<()> {
    let movers = match mover {
        Mover::Gainers => client.list_gainers(options).await?,
        Mover::Losers => client.list_losers(options).await?,
        Mover::Actives => client.list_most_active_tickers(options).await?,
    };

    print(&movers, build_mover_rows(&movers), format)
}
