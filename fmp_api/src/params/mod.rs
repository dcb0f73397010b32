mod common;
pub use self::common::{resolve, Field, Location, Params, ResolvedRequest};

mod ticker;
pub use self::ticker::{
    BatchGetCompanyProfilesParams, BulkGetCompanyProfilesParams, FundamentalsParams,
    GetCompanyProfileParams, ListExchangeSymbolsParams, ListHistoricalBarsParams,
    ListHistoricalEodBarsParams, ListTickerKeyMetricsParams, ListTickerRatiosParams, Period,
    Timeframe,
};

mod quote;
pub use self::quote::{
    BatchGetFullPriceParams, BatchGetPriceChangeParams, BatchGetRealtimeQuoteParams,
    GetFullPriceParams, GetPriceChangeParams, GetRealtimeQuoteParams,
    ListHistoricalMarketCapParams, SymbolParams, SymbolsParams,
};

mod earnings;
pub use self::earnings::{GetEarningsCalendarParams, GetHistoricalEarningsCalendarParams};
