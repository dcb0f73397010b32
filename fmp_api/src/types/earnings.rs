use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::datetime::optional_date;

/// One earnings announcement. Estimates and actuals are `None` until published.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EarningsCalendarEntry {
    pub date: NaiveDate,
    pub symbol: String,
    pub eps: Option<Decimal>,
    pub eps_estimated: Option<Decimal>,
    /// `bmo` (before market open), `amc` (after market close) or `--`.
    #[serde(rename = "time", default)]
    pub market_time: String,
    pub revenue: Option<Decimal>,
    pub revenue_estimated: Option<Decimal>,
    #[serde(default, with = "optional_date")]
    pub fiscal_date_ending: Option<NaiveDate>,
    #[serde(default, with = "optional_date")]
    pub updated_from_date: Option<NaiveDate>,
}
