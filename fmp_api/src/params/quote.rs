use chrono::NaiveDate;

use super::{
    common::{Field, Params},
    ticker::join_symbols,
};

/// Parameters for single-symbol quote endpoints (real-time, full price, price change).
#[derive(Clone, Debug, Default)]
pub struct SymbolParams {
    pub symbol: String,
}

impl SymbolParams {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
        }
    }
}

impl Params for SymbolParams {
    fn fields(&self) -> Vec<Field> {
        vec![Field::path("symbol", &self.symbol)]
    }
}

pub type GetRealtimeQuoteParams = SymbolParams;
pub type GetFullPriceParams = SymbolParams;
pub type GetPriceChangeParams = SymbolParams;

/// Parameters for batch quote endpoints; symbols are sent comma-joined.
#[derive(Clone, Debug, Default)]
pub struct SymbolsParams {
    pub symbols: Vec<String>,
}

impl SymbolsParams {
    pub fn new(symbols: &[&str]) -> Self {
        Self {
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbols.push(symbol.to_string());
        self
    }
}

impl Params for SymbolsParams {
    fn fields(&self) -> Vec<Field> {
        vec![Field::path("symbols", join_symbols(&self.symbols))]
    }
}

pub type BatchGetRealtimeQuoteParams = SymbolsParams;
pub type BatchGetFullPriceParams = SymbolsParams;
pub type BatchGetPriceChangeParams = SymbolsParams;

#[derive(Clone, Debug, Default)]
pub struct ListHistoricalMarketCapParams {
    pub symbol: String,
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
}

impl ListHistoricalMarketCapParams {
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

impl Params for ListHistoricalMarketCapParams {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::required_query("symbol", &self.symbol),
            Field::query("from", self.since.as_ref()),
            Field::query("to", self.until.as_ref()),
        ]
    }
}
