use std::str::FromStr;

use anyhow::{anyhow, Result};
use fmp_api::types::{
    Bar, BulkCompanyProfile, CompanyProfile, EarningsCalendarEntry, HistoricalPriceEod,
    KeyMetrics, PriceChange, TickerMovement, TickerPrice,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(anyhow!(
                "unknown output format `{}` (expected table, json, csv or markdown)",
                other
            )),
        }
    }
}

#[derive(Tabled, Serialize)]
pub struct ProfileRow {
    #[tabled(rename = "Symbol")]
    #[serde(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Exchange")]
    #[serde(rename = "Exchange")]
    exchange: String,
    #[tabled(rename = "Sector")]
    #[serde(rename = "Sector")]
    sector: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Market Cap")]
    #[serde(rename = "Market Cap")]
    market_cap: String,
}

#[derive(Tabled, Serialize)]
pub struct BarRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Open")]
    #[serde(rename = "Open")]
    open: String,
    #[tabled(rename = "High")]
    #[serde(rename = "High")]
    high: String,
    #[tabled(rename = "Low")]
    #[serde(rename = "Low")]
    low: String,
    #[tabled(rename = "Close")]
    #[serde(rename = "Close")]
    close: String,
    #[tabled(rename = "Volume")]
    #[serde(rename = "Volume")]
    volume: String,
}

#[derive(Tabled, Serialize)]
pub struct MoverRow {
    #[tabled(rename = "Symbol")]
    #[serde(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Change")]
    #[serde(rename = "Change")]
    change: String,
    #[tabled(rename = "Change %")]
    #[serde(rename = "Change %")]
    change_percentage: String,
}

#[derive(Tabled, Serialize)]
pub struct QuoteRow {
    #[tabled(rename = "Symbol")]
    #[serde(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Change %")]
    #[serde(rename = "Change %")]
    change_percentage: String,
    #[tabled(rename = "Day Range")]
    #[serde(rename = "Day Range")]
    day_range: String,
    #[tabled(rename = "Volume")]
    #[serde(rename = "Volume")]
    volume: String,
    #[tabled(rename = "Market Cap")]
    #[serde(rename = "Market Cap")]
    market_cap: String,
}

#[derive(Tabled, Serialize)]
pub struct PriceChangeRow {
    #[tabled(rename = "Symbol")]
    #[serde(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "1D")]
    #[serde(rename = "1D")]
    change_1d: String,
    #[tabled(rename = "1M")]
    #[serde(rename = "1M")]
    change_1m: String,
    #[tabled(rename = "YTD")]
    #[serde(rename = "YTD")]
    change_ytd: String,
    #[tabled(rename = "1Y")]
    #[serde(rename = "1Y")]
    change_1y: String,
    #[tabled(rename = "5Y")]
    #[serde(rename = "5Y")]
    change_5y: String,
}

#[derive(Tabled, Serialize)]
pub struct MetricsRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Period")]
    #[serde(rename = "Period")]
    period: String,
    #[tabled(rename = "P/E")]
    #[serde(rename = "P/E")]
    pe_ratio: String,
    #[tabled(rename = "P/B")]
    #[serde(rename = "P/B")]
    pb_ratio: String,
    #[tabled(rename = "EV/EBITDA")]
    #[serde(rename = "EV/EBITDA")]
    ev_to_ebitda: String,
    #[tabled(rename = "ROE")]
    #[serde(rename = "ROE")]
    roe: String,
}

#[derive(Tabled, Serialize)]
pub struct EarningsRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Symbol")]
    #[serde(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Time")]
    #[serde(rename = "Time")]
    time: String,
    #[tabled(rename = "EPS")]
    #[serde(rename = "EPS")]
    eps: String,
    #[tabled(rename = "EPS Est.")]
    #[serde(rename = "EPS Est.")]
    eps_estimated: String,
    #[tabled(rename = "Revenue")]
    #[serde(rename = "Revenue")]
    revenue: String,
}

// -- Row builders --

pub fn build_profile_rows(profiles: &[CompanyProfile]) -> Vec<ProfileRow> {
    profiles
        .iter()
        .map(|p| ProfileRow {
            symbol: p.symbol.clone(),
            name: p.company_name.clone(),
            exchange: p.exchange_short_name.clone(),
            sector: p.sector.clone().unwrap_or_default(),
            price: p.price.to_string(),
            market_cap: format_compact(p.mkt_cap),
        })
        .collect()
}

pub fn build_bulk_profile_rows(profiles: &[BulkCompanyProfile]) -> Vec<ProfileRow> {
    profiles
        .iter()
        .map(|p| ProfileRow {
            symbol: p.symbol.clone(),
            name: p.company_name.clone(),
            exchange: p.exchange.clone(),
            sector: p.sector.clone(),
            price: format_optional(p.price),
            market_cap: p.market_cap.map(format_compact).unwrap_or_default(),
        })
        .collect()
}

pub fn build_bar_rows(bars: &[Bar]) -> Vec<BarRow> {
    bars.iter()
        .map(|b| BarRow {
            date: b.date_time.to_string(),
            open: b.open.to_string(),
            high: b.high.to_string(),
            low: b.low.to_string(),
            close: b.close.to_string(),
            volume: b.volume.to_string(),
        })
        .collect()
}

pub fn build_eod_rows(bars: &[HistoricalPriceEod]) -> Vec<BarRow> {
    bars.iter()
        .map(|b| BarRow {
            date: b.date.to_string(),
            open: b.open.to_string(),
            high: b.high.to_string(),
            low: b.low.to_string(),
            close: b.close.to_string(),
            volume: b.volume.to_string(),
        })
        .collect()
}

pub fn build_mover_rows(movers: &[TickerMovement]) -> Vec<MoverRow> {
    movers
        .iter()
        .map(|m| MoverRow {
            symbol: m.symbol.clone(),
            name: m.name.clone(),
            price: m.price.to_string(),
            change: m.change.to_string(),
            change_percentage: format_percent(m.changes_percentage),
        })
        .collect()
}

pub fn build_quote_rows(prices: &[TickerPrice]) -> Vec<QuoteRow> {
    prices
        .iter()
        .map(|p| QuoteRow {
            symbol: p.symbol.clone(),
            price: p.price.to_string(),
            change_percentage: p.change_percentage.map(format_percent).unwrap_or_default(),
            day_range: match (p.day_low, p.day_high) {
                (Some(low), Some(high)) => format!("{}-{}", low, high),
                _ => String::new(),
            },
            volume: p.volume.map(format_compact).unwrap_or_default(),
            market_cap: p.market_cap.map(format_compact).unwrap_or_default(),
        })
        .collect()
}

pub fn build_price_change_rows(changes: &[PriceChange]) -> Vec<PriceChangeRow> {
    let pct = |v: Option<Decimal>| v.map(format_percent).unwrap_or_default();
    changes
        .iter()
        .map(|c| PriceChangeRow {
            symbol: c.symbol.clone(),
            change_1d: pct(c.change_1d),
            change_1m: pct(c.change_1m),
            change_ytd: pct(c.change_ytd),
            change_1y: pct(c.change_1y),
            change_5y: pct(c.change_5y),
        })
        .collect()
}

pub fn build_metrics_rows(metrics: &[KeyMetrics]) -> Vec<MetricsRow> {
    metrics
        .iter()
        .map(|m| MetricsRow {
            date: m.date.to_string(),
            period: m.period.clone(),
            pe_ratio: format_optional(m.pe_ratio.map(|v| v.round_dp(2))),
            pb_ratio: format_optional(m.pb_ratio.map(|v| v.round_dp(2))),
            ev_to_ebitda: format_optional(m.enterprise_value_over_ebitda.map(|v| v.round_dp(2))),
            roe: format_optional(m.roe.map(|v| v.round_dp(4))),
        })
        .collect()
}

pub fn build_earnings_rows(entries: &[EarningsCalendarEntry]) -> Vec<EarningsRow> {
    entries
        .iter()
        .map(|e| EarningsRow {
            date: e.date.to_string(),
            symbol: e.symbol.clone(),
            time: e.market_time.clone(),
            eps: format_optional(e.eps),
            eps_estimated: format_optional(e.eps_estimated),
            revenue: e.revenue.map(format_compact).unwrap_or_default(),
        })
        .collect()
}

// -- Rendering --

/// Prints `data` as JSON, or `rows` as a table, markdown table or CSV.
pub fn print<T, R>(data: &T, rows: Vec<R>, format: &OutputFormat) -> Result<()>
where
    T: Serialize + ?Sized,
    R: Tabled + Serialize,
{
    match format {
        OutputFormat::Json => print_json(data),
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_optional(value: Option<Decimal>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn format_percent(value: Decimal) -> String {
    format!("{}%", value.round_dp(2))
}

/// Abbreviates large amounts: `2.95T`, `55.5M`, `1.2K`.
fn format_compact(value: Decimal) -> String {
    let abs = value.abs();
    let units = [
        (Decimal::from(1_000_000_000_000i64), "T"),
        (Decimal::from(1_000_000_000i64), "B"),
        (Decimal::from(1_000_000i64), "M"),
        (Decimal::from(1_000i64), "K"),
    ];
    for (scale, suffix) in units {
        if abs >= scale {
            return format!("{}{}", (value / scale).round_dp(2).normalize(), suffix);
        }
    }
    value.normalize().to_string()
}
