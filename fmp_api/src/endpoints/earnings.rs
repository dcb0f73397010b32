use crate::{
    options::RequestOptions,
    params::{GetEarningsCalendarParams, GetHistoricalEarningsCalendarParams},
    types::EarningsCalendarEntry,
    Client, Error,
};

pub const GET_EARNINGS_CALENDAR_PATH: &str = "/api/v3/earning_calendar";
pub const GET_HISTORICAL_EARNINGS_CALENDAR_PATH: &str =
    "/api/v3/historical/earning_calendar/:symbol";

impl Client {
    /// Upcoming and recent earnings announcements across the market.
    pub async fn get_earnings_calendar(
        &self,
        params: &GetEarningsCalendarParams,
        options: &RequestOptions,
    ) -> Result<Vec<EarningsCalendarEntry>, Error> {
        self.get(GET_EARNINGS_CALENDAR_PATH, params, options).await
    }

    /// Past earnings announcements of one company.
    pub async fn get_historical_earnings_calendar(
        &self,
        params: &GetHistoricalEarningsCalendarParams,
        options: &RequestOptions,
    ) -> Result<Vec<EarningsCalendarEntry>, Error> {
        self.get(GET_HISTORICAL_EARNINGS_CALENDAR_PATH, params, options).await
    }
}
