use anyhow::{bail, Result};
use clap::Args;
use fmp_api::params::{
    BatchGetCompanyProfilesParams, BulkGetCompanyProfilesParams, GetCompanyProfileParams,
};
use fmp_api::{Client, RequestOptions};

use crate::output::{build_bulk_profile_rows, build_profile_rows, print, OutputFormat};

#[derive(Args)]
pub struct ProfileArgs {
    /// Ticker symbols, comma-separated (e.g. AAPL,MSFT)
    #[arg(value_delimiter = ',', required = true)]
    pub symbols: Vec<String>,
}

#[derive(Args)]
pub struct BulkProfilesArgs {
    /// Zero-based page of the export
    #[arg(long, default_value = "0")]
    pub part: u32,
}

pub async fn run(
    args: &ProfileArgs,
    client: &Client,
    options: &RequestOptions,
    format: &OutputFormat,
) -> Result<()> {
    let profiles = match args.symbols.as_slice() {
        [] => bail!("At least one symbol is required"),
        [symbol] => {
            vec![client
                .get_company_profile(&GetCompanyProfileParams::new(symbol), options)
                .await?]
        }
        symbols => {
            let params = BatchGetCompanyProfilesParams::default().with_symbols(symbols);
            client.batch_get_company_profiles(&params, options).await?
        }
    };

    print(&profiles, build_profile_rows(&profiles), format)
}

pub async fn run_bulk(
    args: &BulkProfilesArgs,
    client: &Client,
    options: &RequestOptions,
    format: &OutputFormat,
) -> Result<()> {
    let profiles = client
        .bulk_get_company_profiles(&BulkGetCompanyProfilesParams::new(args.part), options)
        .await?;

    if profiles.is_empty() {
        eprintln!("Part {} is empty", args.part);
    } else {
        eprintln!("Part {}: {} profiles", args.part, profiles.len());
    }

    print(&profiles, build_bulk_profile_rows(&profiles), format)
}
