//! Quote-level records: real-time quotes, full prices, price changes and market capitalization.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;

/// Real-time top-of-book quote.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TickerQuote {
    pub symbol: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bid_price: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ask_price: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bid_size: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ask_size: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub volume: Decimal,
    /// Milliseconds since the Unix epoch.
    pub last_updated: i64,
}

/// Full quote with day and year ranges, moving averages and valuation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TickerPrice {
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    pub open: Option<Decimal>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: Decimal,
    pub previous_close: Option<Decimal>,
    #[serde(rename = "changesPercentage")]
    pub change_percentage: Option<Decimal>,
    pub change: Option<Decimal>,
    pub day_low: Option<Decimal>,
    pub day_high: Option<Decimal>,
    pub year_low: Option<Decimal>,
    pub year_high: Option<Decimal>,
    pub price_avg50: Option<Decimal>,
    pub price_avg200: Option<Decimal>,
    pub market_cap: Option<Decimal>,
    pub pe: Option<Decimal>,
    pub eps: Option<Decimal>,
    #[serde(default)]
    pub exchange: Option<String>,
    pub volume: Option<Decimal>,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
}

/// Percentage price change over standard look-back windows.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PriceChange {
    pub symbol: String,
    #[serde(rename = "1D")]
    pub change_1d: Option<Decimal>,
    #[serde(rename = "5D")]
    pub change_5d: Option<Decimal>,
    #[serde(rename = "1M")]
    pub change_1m: Option<Decimal>,
    #[serde(rename = "3M")]
    pub change_3m: Option<Decimal>,
    #[serde(rename = "6M")]
    pub change_6m: Option<Decimal>,
    #[serde(rename = "ytd")]
    pub change_ytd: Option<Decimal>,
    #[serde(rename = "1Y")]
    pub change_1y: Option<Decimal>,
    #[serde(rename = "3Y")]
    pub change_3y: Option<Decimal>,
    #[serde(rename = "5Y")]
    pub change_5y: Option<Decimal>,
    #[serde(rename = "10Y")]
    pub change_10y: Option<Decimal>,
    #[serde(rename = "max")]
    pub change_max: Option<Decimal>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HistoricalMarketCap {
    pub symbol: String,
    pub date: NaiveDate,
    #[serde(rename = "marketCap", default, deserialize_with = "null_as_default")]
    pub value: Decimal,
}
