//! Quote endpoints: real-time quotes, full prices, price changes and market capitalization.

use crate::{
    options::RequestOptions,
    params::{
        BatchGetFullPriceParams, BatchGetPriceChangeParams, BatchGetRealtimeQuoteParams,
        GetFullPriceParams, GetPriceChangeParams, GetRealtimeQuoteParams,
        ListHistoricalMarketCapParams,
    },
    types::{HistoricalMarketCap, PriceChange, TickerPrice, TickerQuote},
    Client, Error,
};

pub const GET_REALTIME_QUOTE_PATH: &str = "/api/v3/stock/full/real-time-price/:symbol";
pub const BATCH_GET_REALTIME_QUOTE_PATH: &str = "/api/v3/stock/full/real-time-price/:symbols";
pub const LIST_ALL_REALTIME_QUOTES_PATH: &str = "/api/v3/stock/full/real-time-price";

pub const GET_FULL_PRICE_PATH: &str = "/api/v3/quote/:symbol";
pub const BATCH_GET_FULL_PRICE_PATH: &str = "/api/v3/quote/:symbols";

pub const GET_PRICE_CHANGE_PATH: &str = "/api/v3/stock-price-change/:symbol";
pub const BATCH_GET_PRICE_CHANGE_PATH: &str = "/api/v3/stock-price-change/:symbols";

pub const LIST_HISTORICAL_MARKET_CAP_PATH: &str = "/stable/historical-market-capitalization";

impl Client {
    /// Real-time quote for one symbol. `None` when the API knows no quote for it.
    pub async fn get_realtime_quote(
        &self,
        params: &GetRealtimeQuoteParams,
        options: &RequestOptions,
    ) -> Result<Option<TickerQuote>, Error> {
        let quotes: Vec<TickerQuote> = self.get(GET_REALTIME_QUOTE_PATH, params, options).await?;
        Ok(quotes.into_iter().next())
    }

    pub async fn batch_get_realtime_quotes(
        &self,
        params: &BatchGetRealtimeQuoteParams,
        options: &RequestOptions,
    ) -> Result<Vec<TickerQuote>, Error> {
        self.get(BATCH_GET_REALTIME_QUOTE_PATH, params, options).await
    }

    /// Real-time quotes for every symbol the API covers.
    pub async fn list_all_realtime_quotes(
        &self,
        options: &RequestOptions,
    ) -> Result<Vec<TickerQuote>, Error> {
        self.get(LIST_ALL_REALTIME_QUOTES_PATH, &(), options).await
    }

    pub async fn get_full_price(
        &self,
        params: &GetFullPriceParams,
        options: &RequestOptions,
    ) -> Result<Option<TickerPrice>, Error> {
        let prices: Vec<TickerPrice> = self.get(GET_FULL_PRICE_PATH, params, options).await?;
        Ok(prices.into_iter().next())
    }

    pub async fn batch_get_full_prices(
        &self,
        params: &BatchGetFullPriceParams,
        options: &RequestOptions,
    ) -> Result<Vec<TickerPrice>, Error> {
        self.get(BATCH_GET_FULL_PRICE_PATH, params, options).await
    }

    pub async fn get_price_change(
        &self,
        params: &GetPriceChangeParams,
        options: &RequestOptions,
    ) -> Result<Option<PriceChange>, Error> {
        let changes: Vec<PriceChange> = self.get(GET_PRICE_CHANGE_PATH, params, options).await?;
        Ok(changes.into_iter().next())
    }

    pub async fn batch_get_price_changes(
        &self,
        params: &BatchGetPriceChangeParams,
        options: &RequestOptions,
    ) -> Result<Vec<PriceChange>, Error> {
        self.get(BATCH_GET_PRICE_CHANGE_PATH, params, options).await
    }

    pub async fn list_historical_market_cap(
        &self,
        params: &ListHistoricalMarketCapParams,
        options: &RequestOptions,
    ) -> Result<Vec<HistoricalMarketCap>, Error> {
        self.get(LIST_HISTORICAL_MARKET_CAP_PATH, params, options).await
    }
}
