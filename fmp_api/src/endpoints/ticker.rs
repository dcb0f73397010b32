//! Ticker endpoints: company profiles, historical bars, fundamentals and market movers.

use reqwest::{Method, StatusCode};

use crate::{
    options::RequestOptions,
    params::{
        BatchGetCompanyProfilesParams, BulkGetCompanyProfilesParams, GetCompanyProfileParams,
        ListExchangeSymbolsParams, ListHistoricalBarsParams, ListHistoricalEodBarsParams,
        ListTickerKeyMetricsParams, ListTickerRatiosParams,
    },
    tabular::decode_csv,
    types::{
        Bar, BulkCompanyProfile, CompanyProfile, HistoricalPriceEod, KeyMetrics, Ratios,
        TickerMovement, TickerPrice,
    },
    Client, Error,
};

pub const LIST_MOST_ACTIVE_TICKERS_PATH: &str = "/api/v3/stock_market/actives";
pub const LIST_GAINERS_PATH: &str = "/api/v3/stock_market/gainers";
pub const LIST_LOSERS_PATH: &str = "/api/v3/stock_market/losers";

pub const GET_COMPANY_PROFILE_PATH: &str = "/api/v3/profile/:symbol";
pub const BATCH_GET_COMPANY_PROFILE_PATH: &str = "/api/v3/profile/:symbols";
pub const BULK_GET_COMPANY_PROFILE_PATH: &str = "/stable/profile-bulk";

pub const LIST_HISTORICAL_BARS_PATH: &str = "/api/v3/historical-chart/:timeframe/:symbol";
pub const LIST_HISTORICAL_EOD_BARS_PATH: &str = "/stable/historical-price-eod/full";
pub const LIST_TICKER_KEY_METRICS_PATH: &str = "/api/v3/key-metrics/:symbol";
pub const LIST_TICKER_RATIOS_PATH: &str = "/api/v3/ratios/:symbol";
pub const LIST_EXCHANGE_SYMBOLS_PATH: &str = "/api/v3/symbol/:exchange";

impl Client {
    /// Fetches the profile of a single company.
    ///
    /// The upstream dataset does not cover every listed symbol, so an empty
    /// result yields [`CompanyProfile::placeholder`] instead of an error.
    pub async fn get_company_profile(
        &self,
        params: &GetCompanyProfileParams,
        options: &RequestOptions,
    ) -> Result<CompanyProfile, Error> {
        let profiles: Vec<CompanyProfile> =
            self.get(GET_COMPANY_PROFILE_PATH, params, options).await?;
        match profiles.into_iter().next() {
            Some(profile) => Ok(profile),
            None => {
                tracing::debug!("No profile for {}, returning placeholder", params.symbol);
                Ok(CompanyProfile::placeholder(&params.symbol))
            }
        }
    }

    /// Fetches the profiles of several companies in one request.
    pub async fn batch_get_company_profiles(
        &self,
        params: &BatchGetCompanyProfilesParams,
        options: &RequestOptions,
    ) -> Result<Vec<CompanyProfile>, Error> {
        self.get(BATCH_GET_COMPANY_PROFILE_PATH, params, options).await
    }

    /// Fetches one page of the bulk CSV profile export.
    ///
    /// The API answers HTTP 400 once `part` runs past the last page; that is
    /// returned as an empty page rather than an error.
    pub async fn bulk_get_company_profiles(
        &self,
        params: &BulkGetCompanyProfilesParams,
        options: &RequestOptions,
    ) -> Result<Vec<BulkCompanyProfile>, Error> {
        let options = options.merged_with(
            RequestOptions::default()
                .with_content_type("text/csv")
                .with_ignored_status_code(StatusCode::BAD_REQUEST),
        );
        let response = self
            .call(Method::GET, BULK_GET_COMPANY_PROFILE_PATH, params, &options)
            .await?;
        if response.is_status(StatusCode::BAD_REQUEST) {
            tracing::debug!("Bulk profile part {} is past the last page", params.part);
            return Ok(Vec::new());
        }
        decode_csv(response.body())
    }

    /// Lists intraday bars for a symbol, most recent first.
    pub async fn list_historical_bars(
        &self,
        params: &ListHistoricalBarsParams,
        options: &RequestOptions,
    ) -> Result<Vec<Bar>, Error> {
        self.get(LIST_HISTORICAL_BARS_PATH, params, options).await
    }

    /// Lists end-of-day prices for a symbol.
    pub async fn list_historical_eod_bars(
        &self,
        params: &ListHistoricalEodBarsParams,
        options: &RequestOptions,
    ) -> Result<Vec<HistoricalPriceEod>, Error> {
        self.get(LIST_HISTORICAL_EOD_BARS_PATH, params, options).await
    }

    pub async fn list_ticker_key_metrics(
        &self,
        params: &ListTickerKeyMetricsParams,
        options: &RequestOptions,
    ) -> Result<Vec<KeyMetrics>, Error> {
        self.get(LIST_TICKER_KEY_METRICS_PATH, params, options).await
    }

    pub async fn list_ticker_ratios(
        &self,
        params: &ListTickerRatiosParams,
        options: &RequestOptions,
    ) -> Result<Vec<Ratios>, Error> {
        self.get(LIST_TICKER_RATIOS_PATH, params, options).await
    }

    pub async fn list_gainers(
        &self,
        options: &RequestOptions,
    ) -> Result<Vec<TickerMovement>, Error> {
        self.get(LIST_GAINERS_PATH, &(), options).await
    }

    pub async fn list_losers(
        &self,
        options: &RequestOptions,
    ) -> Result<Vec<TickerMovement>, Error> {
        self.get(LIST_LOSERS_PATH, &(), options).await
    }

    pub async fn list_most_active_tickers(
        &self,
        options: &RequestOptions,
    ) -> Result<Vec<TickerMovement>, Error> {
        self.get(LIST_MOST_ACTIVE_TICKERS_PATH, &(), options).await
    }

    /// Lists full quotes for every symbol traded on an exchange.
    pub async fn list_exchange_symbols(
        &self,
        params: &ListExchangeSymbolsParams,
        options: &RequestOptions,
    ) -> Result<Vec<TickerPrice>, Error> {
        self.get(LIST_EXCHANGE_SYMBOLS_PATH, params, options).await
    }
}
