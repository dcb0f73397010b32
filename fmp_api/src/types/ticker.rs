//! Ticker-level records: company profiles, historical bars, fundamentals and market movers.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::datetime::{date_time, optional_date};
use super::nullable::null_as_default;

/// Company profile returned by the JSON `/profile` endpoints.
///
/// Every field has a default so a record containing only the symbol can stand
/// in for tickers the upstream dataset does not cover.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyProfile {
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub beta: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub vol_avg: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub mkt_cap: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub last_div: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub range: String,
    #[serde(deserialize_with = "null_as_default")]
    pub changes: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub company_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    pub cik: Option<String>,
    pub isin: Option<String>,
    pub cusip: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub exchange: String,
    #[serde(deserialize_with = "null_as_default")]
    pub exchange_short_name: String,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub ceo: Option<String>,
    pub sector: Option<String>,
    pub country: Option<String>,
    pub full_time_employees: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub dcf_diff: Option<Decimal>,
    pub dcf: Option<Decimal>,
    pub image: Option<String>,
    #[serde(with = "optional_date")]
    pub ipo_date: Option<NaiveDate>,
    pub default_image: bool,
    pub is_etf: bool,
    pub is_actively_trading: bool,
    pub is_adr: bool,
    pub is_fund: bool,
}

impl CompanyProfile {
    /// A profile carrying only `symbol`, every other field at its default.
    pub fn placeholder(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            ..Default::default()
        }
    }
}

/// One row of the bulk CSV profile export. Columns are matched by header name.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BulkCompanyProfile {
    pub symbol: String,
    pub price: Option<Decimal>,
    pub market_cap: Option<Decimal>,
    pub beta: Option<Decimal>,
    pub last_dividend: Option<Decimal>,
    pub range: String,
    pub change: Option<Decimal>,
    pub change_percentage: Option<Decimal>,
    pub volume: Option<Decimal>,
    pub average_volume: Option<Decimal>,
    pub company_name: String,
    pub currency: String,
    pub cik: String,
    pub isin: String,
    pub cusip: String,
    pub exchange_full_name: String,
    pub exchange: String,
    pub industry: String,
    pub website: String,
    pub description: String,
    pub ceo: String,
    pub sector: String,
    pub country: String,
    pub full_time_employees: Option<u64>,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub image: String,
    #[serde(with = "optional_date")]
    pub ipo_date: Option<NaiveDate>,
    pub default_image: bool,
    pub is_etf: bool,
    pub is_actively_trading: bool,
    pub is_adr: bool,
    pub is_fund: bool,
}

/// Intraday or daily OHLCV bar from `/historical-chart`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Bar {
    #[serde(default, deserialize_with = "null_as_default")]
    pub open: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub high: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub low: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub close: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub volume: Decimal,
    #[serde(rename = "date", with = "date_time")]
    pub date_time: NaiveDateTime,
}

/// End-of-day price record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalPriceEod {
    pub symbol: String,
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "null_as_default")]
    pub open: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub high: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub low: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub close: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub volume: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub change: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub change_percent: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vwap: Decimal,
}

/// Per-period valuation metrics. The API reports `null` for metrics it cannot compute.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetrics {
    pub symbol: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub calendar_year: Option<String>,
    #[serde(default)]
    pub period: String,
    pub revenue_per_share: Option<Decimal>,
    pub net_income_per_share: Option<Decimal>,
    pub operating_cash_flow_per_share: Option<Decimal>,
    pub free_cash_flow_per_share: Option<Decimal>,
    pub cash_per_share: Option<Decimal>,
    pub book_value_per_share: Option<Decimal>,
    pub market_cap: Option<Decimal>,
    pub enterprise_value: Option<Decimal>,
    pub pe_ratio: Option<Decimal>,
    pub price_to_sales_ratio: Option<Decimal>,
    pub pb_ratio: Option<Decimal>,
    pub ev_to_sales: Option<Decimal>,
    #[serde(rename = "enterpriseValueOverEBITDA")]
    pub enterprise_value_over_ebitda: Option<Decimal>,
    pub debt_to_equity: Option<Decimal>,
    pub current_ratio: Option<Decimal>,
    pub dividend_yield: Option<Decimal>,
    pub payout_ratio: Option<Decimal>,
    pub roe: Option<Decimal>,
    pub roic: Option<Decimal>,
}

/// Per-period financial ratios.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ratios {
    pub symbol: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub calendar_year: Option<String>,
    #[serde(default)]
    pub period: String,
    pub current_ratio: Option<Decimal>,
    pub quick_ratio: Option<Decimal>,
    pub gross_profit_margin: Option<Decimal>,
    pub operating_profit_margin: Option<Decimal>,
    pub net_profit_margin: Option<Decimal>,
    pub return_on_assets: Option<Decimal>,
    pub return_on_equity: Option<Decimal>,
    pub debt_ratio: Option<Decimal>,
    pub debt_equity_ratio: Option<Decimal>,
    pub interest_coverage: Option<Decimal>,
    pub price_earnings_ratio: Option<Decimal>,
    pub price_to_book_ratio: Option<Decimal>,
    pub price_to_sales_ratio: Option<Decimal>,
    pub dividend_yield: Option<Decimal>,
    pub payout_ratio: Option<Decimal>,
}

/// Entry of the gainers, losers and most-active lists.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TickerMovement {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub change: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub changes_percentage: Decimal,
}
