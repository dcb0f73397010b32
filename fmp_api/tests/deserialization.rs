use std::str::FromStr;

use fmp_api::types::{
    Bar, CompanyProfile, EarningsCalendarEntry, HistoricalMarketCap, HistoricalPriceEod,
    KeyMetrics, PriceChange, Ratios, TickerMovement, TickerPrice, TickerQuote,
};
use rust_decimal::Decimal;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_profile_full() {
    let json = load_fixture("profile.json");
    let profiles: Vec<CompanyProfile> = serde_json::from_str(&json).unwrap();
    assert_eq!(profiles.len(), 1);

    let apple = &profiles[0];
    assert_eq!(apple.symbol, "AAPL");
    assert_eq!(apple.price, Decimal::new(18925, 2));
    assert_eq!(apple.beta, Decimal::new(124, 2));
    assert_eq!(apple.last_div, Decimal::new(96, 2));
    assert_eq!(apple.exchange_short_name, "NASDAQ");
    assert_eq!(apple.ceo.as_deref(), Some("Mr. Timothy D. Cook"));
    assert_eq!(apple.full_time_employees.as_deref(), Some("161000"));
    assert_eq!(apple.dcf_diff, Some(Decimal::new(415, 2)));
    assert!(apple.is_actively_trading);
    assert!(!apple.is_etf);
}

#[test]
fn deserialize_profile_with_nulls() {
    let json = load_fixture("profiles_batch.json");
    let profiles: Vec<CompanyProfile> = serde_json::from_str(&json).unwrap();
    let spy = &profiles[1];
    assert_eq!(spy.cik, None);
    assert_eq!(spy.sector, None);
    assert_eq!(spy.dcf, None);
    assert_eq!(spy.ipo_date, None);
}

#[test]
fn deserialize_profile_missing_fields_default() {
    let profile: CompanyProfile = serde_json::from_str(r#"{"symbol": "XYZ"}"#).unwrap();
    assert_eq!(profile, CompanyProfile::placeholder("XYZ"));
}

#[test]
fn deserialize_bars() {
    let bars: Vec<Bar> = serde_json::from_str(&load_fixture("bars.json")).unwrap();
    assert_eq!(bars.len(), 3);
    assert_eq!(bars[1].open, Decimal::new(19094, 2));
    assert_eq!(bars[1].date_time.to_string(), "2024-01-30 00:00:00");
}

#[test]
fn deserialize_intraday_bar() {
    let json = r#"{"date":"2024-01-31 15:55:00","open":184.53,"low":184.4,"high":184.6,"close":184.41,"volume":1254032}"#;
    let bar: Bar = serde_json::from_str(json).unwrap();
    assert_eq!(bar.date_time.to_string(), "2024-01-31 15:55:00");
    assert_eq!(bar.close, Decimal::new(18441, 2));
}

#[test]
fn deserialize_bar_with_bad_date_fails() {
    let json = r#"{"date":"yesterday","open":1,"low":1,"high":1,"close":1,"volume":1}"#;
    assert!(serde_json::from_str::<Bar>(json).is_err());
}

#[test]
fn deserialize_eod() {
    let rows: Vec<HistoricalPriceEod> = serde_json::from_str(&load_fixture("eod.json")).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date.to_string(), "2024-01-31");
    assert_eq!(rows[0].vwap, Decimal::new(18572, 2));
    assert_eq!(rows[1].change_percent, Decimal::new(-152, 2));
}

#[test]
fn deserialize_movers() {
    let movers: Vec<TickerMovement> = serde_json::from_str(&load_fixture("movers.json")).unwrap();
    assert_eq!(movers.len(), 3);
    assert_eq!(movers[1].name, "NVIDIA Corporation");
    assert_eq!(movers[1].price, Decimal::new(72613, 2));
}

#[test]
fn deserialize_realtime_quote_ignores_extra_fields() {
    let quotes: Vec<TickerQuote> =
        serde_json::from_str(&load_fixture("realtime_quote.json")).unwrap();
    assert_eq!(quotes[0].bid_price, Decimal::new(18924, 2));
    assert_eq!(quotes[0].ask_size, Decimal::new(3, 0));
    assert_eq!(quotes[0].last_updated, 1706734799000);
}

#[test]
fn deserialize_full_price() {
    let prices: Vec<TickerPrice> = serde_json::from_str(&load_fixture("full_price.json")).unwrap();
    let apple = &prices[0];
    assert_eq!(apple.change_percentage, Some(Decimal::new(-9007, 4)));
    assert_eq!(apple.price_avg200, Some(Decimal::new(18142535, 5)));
    assert_eq!(apple.timestamp, 1706734801);
}

#[test]
fn deserialize_price_change() {
    let changes: Vec<PriceChange> =
        serde_json::from_str(&load_fixture("price_change.json")).unwrap();
    let apple = &changes[0];
    assert_eq!(apple.change_3y, Some(Decimal::new(4002, 2)));
    assert_eq!(apple.change_10y, Some(Decimal::new(9489, 1)));
    assert_eq!(apple.change_max, Some(Decimal::new(1588002, 1)));
}

#[test]
fn deserialize_fundamentals() {
    let metrics: Vec<KeyMetrics> = serde_json::from_str(&load_fixture("key_metrics.json")).unwrap();
    assert_eq!(metrics[0].enterprise_value_over_ebitda, Some(Decimal::new(2138, 2)));
    assert_eq!(metrics[0].roic, None);

    let ratios: Vec<Ratios> = serde_json::from_str(&load_fixture("ratios.json")).unwrap();
    assert_eq!(ratios[0].quick_ratio, Some(Decimal::new(843, 3)));
    assert_eq!(ratios[0].interest_coverage, None);
}

#[test]
fn deserialize_market_cap() {
    let caps: Vec<HistoricalMarketCap> =
        serde_json::from_str(&load_fixture("market_cap.json")).unwrap();
    assert_eq!(caps[0].value, Decimal::new(2_848_000_000_000, 0));
}

#[test]
fn deserialize_earnings() {
    let entries: Vec<EarningsCalendarEntry> =
        serde_json::from_str(&load_fixture("earnings.json")).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].eps, Some(Decimal::new(218, 2)));
    assert_eq!(entries[0].market_time, "amc");
    assert_eq!(
        entries[0].fiscal_date_ending.map(|d| d.to_string()).as_deref(),
        Some("2023-12-30")
    );
    assert_eq!(entries[1].eps, None);
    assert_eq!(entries[1].updated_from_date, None);
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let result = serde_json::from_str::<Vec<TickerMovement>>(r#"[{"symbol": not valid json}]"#);
    assert!(result.is_err());
}

#[test]
fn deserialize_bar_keeps_every_digit() {
    let json = r#"[{"date":"2024-01-31","open":187.0400000000000001,"high":187.1,"low":184.35,"close":12345678901234567.89,"volume":55467803}]"#;
    let bars: Vec<Bar> = serde_json::from_str(json).unwrap();
    assert_eq!(bars[0].open, Decimal::from_str("187.0400000000000001").unwrap());
    assert_eq!(bars[0].close, Decimal::from_str("12345678901234567.89").unwrap());
    assert_eq!(bars[0].volume, Decimal::new(55_467_803, 0));
}

#[test]
fn deserialize_null_decimals_as_zero() {
    let quotes: Vec<TickerQuote> =
        serde_json::from_str(&load_fixture("quotes_with_nulls.json")).unwrap();
    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0].bid_price, Decimal::new(18924, 2));
    assert_eq!(quotes[1].bid_price, Decimal::ZERO);
    assert_eq!(quotes[1].ask_size, Decimal::ZERO);
    assert_eq!(quotes[1].volume, Decimal::ZERO);
    assert_eq!(quotes[1].last_updated, 1706734700000);

    let json = r#"[{"symbol":"XTND","price":null,"beta":null,"mktCap":null,"range":null}]"#;
    let profiles: Vec<CompanyProfile> = serde_json::from_str(json).unwrap();
    assert_eq!(profiles[0].beta, Decimal::ZERO);
    assert_eq!(profiles[0].mkt_cap, Decimal::ZERO);
    assert_eq!(profiles[0].range, "");

    let json = r#"{"date":"2024-01-31","open":1.5,"high":null,"low":1,"close":1.4,"volume":null}"#;
    let bar: Bar = serde_json::from_str(json).unwrap();
    assert_eq!(bar.high, Decimal::ZERO);
    assert_eq!(bar.volume, Decimal::ZERO);

    let json = r#"[{"symbol":"X","change":null,"price":2.5,"changesPercentage":null}]"#;
    let movers: Vec<TickerMovement> = serde_json::from_str(json).unwrap();
    assert_eq!(movers[0].change, Decimal::ZERO);
    assert_eq!(movers[0].price, Decimal::new(25, 1));
}
