pub mod datetime;
pub mod nullable;

mod ticker;
pub use self::ticker::{
    Bar, BulkCompanyProfile, CompanyProfile, HistoricalPriceEod, KeyMetrics, Ratios,
    TickerMovement,
};

mod quote;
pub use self::quote::{HistoricalMarketCap, PriceChange, TickerPrice, TickerQuote};

mod earnings;
pub use self::earnings::EarningsCalendarEntry;
