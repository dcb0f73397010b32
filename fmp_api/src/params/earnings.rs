use chrono::NaiveDate;

use super::common::{Field, Params};

/// Date window for the market-wide earnings calendar. Both ends are optional.
#[derive(Clone, Debug, Default)]
pub struct GetEarningsCalendarParams {
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
}

impl GetEarningsCalendarParams {
    pub fn with_since(mut self, since: NaiveDate) -> Self {
        self.since = Some(since);
        self
    }

    pub fn with_until(mut self, until: NaiveDate) -> Self {
        self.until = Some(until);
        self
    }
}

impl Params for GetEarningsCalendarParams {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::query("from", self.since.as_ref()),
            Field::query("to", self.until.as_ref()),
        ]
    }
}

/// Past earnings reports of one symbol, optionally bounded by a date window.
#[derive(Clone, Debug, Default)]
pub struct GetHistoricalEarningsCalendarParams {
    pub symbol: String,
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
    pub limit: Option<u32>,
}

impl GetHistoricalEarningsCalendarParams {
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

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Params for GetHistoricalEarningsCalendarParams {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::path("symbol", &self.symbol),
            Field::query("from", self.since.as_ref()),
            Field::query("to", self.until.as_ref()),
            Field::query("limit", self.limit.as_ref()),
        ]
    }
}
