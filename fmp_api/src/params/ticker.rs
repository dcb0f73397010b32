use std::str::FromStr;

use chrono::NaiveDate;

use super::common::{Field, Params};

/// Bar interval for intraday historical charts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Timeframe {
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
    FourHours,
    #[default]
    OneDay,
}
impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Timeframe::OneMinute => "1min",
                Timeframe::FiveMinutes => "5min",
                Timeframe::FifteenMinutes => "15min",
                Timeframe::ThirtyMinutes => "30min",
                Timeframe::OneHour => "1hour",
                Timeframe::FourHours => "4hour",
                Timeframe::OneDay => "1day",
            }
        )
    }
}
impl FromStr for Timeframe {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1min" => Ok(Timeframe::OneMinute),
            "5min" => Ok(Timeframe::FiveMinutes),
            "15min" => Ok(Timeframe::FifteenMinutes),
            "30min" => Ok(Timeframe::ThirtyMinutes),
            "1hour" => Ok(Timeframe::OneHour),
            "4hour" => Ok(Timeframe::FourHours),
            "1day" => Ok(Timeframe::OneDay),
            _ => Err(()),
        }
    }
}

/// Reporting period for fundamentals endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    Annual,
    Quarter,
}
impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Period::Annual => "annual",
                Period::Quarter => "quarter",
            }
        )
    }
}
impl FromStr for Period {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "annual" => Ok(Period::Annual),
            "quarter" => Ok(Period::Quarter),
            _ => Err(()),
        }
    }
}

/// Joins batch symbols into the single comma-separated segment the API expects.
pub(crate) fn join_symbols(symbols: &[String]) -> String {
    symbols
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Clone, Debug, Default)]
pub struct GetCompanyProfileParams {
    pub symbol: String,
}

impl GetCompanyProfileParams {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
        }
    }
}

impl Params for GetCompanyProfileParams {
    fn fields(&self) -> Vec<Field> {
        vec![Field::path("symbol", &self.symbol)]
    }
}

#[derive(Clone, Debug, Default)]
pub struct BatchGetCompanyProfilesParams {
    pub symbols: Vec<String>,
}

impl BatchGetCompanyProfilesParams {
    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbols.push(symbol.to_string());
        self
    }
    pub fn with_symbols(mut self, symbols: &[String]) -> Self {
        self.symbols.extend_from_slice(symbols);
        self
    }
}

impl Params for BatchGetCompanyProfilesParams {
    fn fields(&self) -> Vec<Field> {
        vec![Field::path("symbols", join_symbols(&self.symbols))]
    }
}

/// Page selector for the bulk CSV profile endpoint. Pages start at 0.
#[derive(Clone, Debug, Default)]
pub struct BulkGetCompanyProfilesParams {
    pub part: u32,
}

impl BulkGetCompanyProfilesParams {
    pub fn new(part: u32) -> Self {
        Self { part }
    }
}

impl Params for BulkGetCompanyProfilesParams {
    fn fields(&self) -> Vec<Field> {
        vec![Field::required_query("part", self.part)]
    }
}

#[derive(Clone, Debug, Default)]
pub struct ListHistoricalBarsParams {
    pub timeframe: Timeframe,
    pub symbol: String,
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
}

impl ListHistoricalBarsParams {
    pub fn new(symbol: &str, timeframe: Timeframe) -> Self {
        Self {
            timeframe,
            symbol: symbol.to_string(),
            since: None,
            until: None,
        }
    }

    pub fn with_since(mut self, since: NaiveDate) -> Self {
        self.since = Some(since);
        self
    }

    pub fn with_until(mut self, until: NaiveDate) -> Self {
        self.until = Some(until);
        self
    }
}

impl Params for ListHistoricalBarsParams {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::path("timeframe", self.timeframe),
            Field::required_query("symbol", &self.symbol),
            Field::query("from", self.since.as_ref()),
            Field::query("to", self.until.as_ref()),
        ]
    }
}

#[derive(Clone, Debug, Default)]
pub struct ListHistoricalEodBarsParams {
    pub symbol: String,
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
}

impl ListHistoricalEodBarsParams {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            ..Default::default()
        }
    }

    pub fn with_since(mut self, since: NaiveDate) -> Self {
        self.since = Some(since);
        self
    }

    pub fn with_until(mut self, until: NaiveDate) -> Self {
        self.until = Some(until);
        self
    }
}

impl Params for ListHistoricalEodBarsParams {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::required_query("symbol", &self.symbol),
            Field::query("from", self.since.as_ref()),
            Field::query("to", self.until.as_ref()),
        ]
    }
}

/// Shared shape of the key-metrics and ratios parameter sets.
#[derive(Clone, Debug, Default)]
pub struct FundamentalsParams {
    pub symbol: String,
    pub period: Option<Period>,
    pub limit: Option<u32>,
}

impl FundamentalsParams {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            ..Default::default()
        }
    }

    pub fn with_period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Params for FundamentalsParams {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::path("symbol", &self.symbol),
            Field::query("period", self.period.as_ref()),
            Field::query("limit", self.limit.as_ref()),
        ]
    }
}

pub type ListTickerKeyMetricsParams = FundamentalsParams;
pub type ListTickerRatiosParams = FundamentalsParams;

#[derive(Clone, Debug, Default)]
pub struct ListExchangeSymbolsParams {
    pub exchange: String,
}

impl ListExchangeSymbolsParams {
    pub fn new(exchange: &str) -> Self {
        Self {
            exchange: exchange.to_string(),
        }
    }
}

impl Params for ListExchangeSymbolsParams {
    fn fields(&self) -> Vec<Field> {
        vec![Field::path("exchange", &self.exchange)]
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{params::resolve, Error};

    use super::*;

    #[test]
    fn historical_bars_example_request() {
        let params = ListHistoricalBarsParams::new("AAPL", Timeframe::OneDay)
            .with_since(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .with_until(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        let resolved = resolve("/historical-chart/:timeframe/:symbol", &params).unwrap();

        insta::assert_snapshot!(
            resolved.path_and_query().unwrap(),
            @"/historical-chart/1day/AAPL?symbol=AAPL&from=2024-01-01&to=2024-01-31"
        );
    }

    #[test]
    fn historical_bars_without_range() {
        let params = ListHistoricalBarsParams::new("MSFT", Timeframe::FiveMinutes);
        let resolved = resolve("/historical-chart/:timeframe/:symbol", &params).unwrap();
        assert_eq!(
            resolved.path_and_query().unwrap(),
            "/historical-chart/5min/MSFT?symbol=MSFT"
        );
    }

    #[test]
    fn historical_bars_missing_symbol() {
        let params = ListHistoricalBarsParams::default();
        let err = resolve("/historical-chart/:timeframe/:symbol", &params).unwrap_err();
        assert!(matches!(err, Error::MissingParameter { ref name } if name == "symbol"));
    }

    #[test]
    fn batch_profiles_join_symbols() {
        let params = BatchGetCompanyProfilesParams::default()
            .with_symbol("AAPL")
            .with_symbols(&["MSFT".to_string(), " ".to_string(), "NVDA".to_string()]);
        let resolved = resolve("/profile/:symbols", &params).unwrap();
        assert_eq!(resolved.segments, vec!["profile", "AAPL,MSFT,NVDA"]);
    }

    #[test]
    fn batch_profiles_without_symbols_is_missing() {
        let err = resolve("/profile/:symbols", &BatchGetCompanyProfilesParams::default())
            .unwrap_err();
        assert!(matches!(err, Error::MissingParameter { ref name } if name == "symbols"));
    }

    #[test]
    fn bulk_profiles_send_part() {
        let resolved = resolve("/stable/profile-bulk", &BulkGetCompanyProfilesParams::new(2))
            .unwrap();
        assert_eq!(
            resolved.path_and_query().unwrap(),
            "/stable/profile-bulk?part=2"
        );
    }

    #[test]
    fn fundamentals_optional_fields() {
        let params = FundamentalsParams::new("AAPL")
            .with_period(Period::Quarter)
            .with_limit(4);
        let resolved = resolve("/key-metrics/:symbol", &params).unwrap();
        assert_eq!(
            resolved.path_and_query().unwrap(),
            "/key-metrics/AAPL?period=quarter&limit=4"
        );

        let resolved = resolve("/key-metrics/:symbol", &FundamentalsParams::new("AAPL")).unwrap();
        assert_eq!(resolved.path_and_query().unwrap(), "/key-metrics/AAPL");
    }

    #[test]
    fn timeframe_round_trips_through_display() {
        for tf in [
            Timeframe::OneMinute,
            Timeframe::FiveMinutes,
            Timeframe::FifteenMinutes,
            Timeframe::ThirtyMinutes,
            Timeframe::OneHour,
            Timeframe::FourHours,
            Timeframe::OneDay,
        ] {
            assert_eq!(tf.to_string().parse::<Timeframe>(), Ok(tf));
        }
        assert!("2day".parse::<Timeframe>().is_err());
    }
}
