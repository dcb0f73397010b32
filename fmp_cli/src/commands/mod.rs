//! CLI subcommand implementations.

pub mod bars;
pub mod earnings;
pub mod movers;
pub mod profile;
pub mod quote;

use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Parses a `YYYY-MM-DD` flag value.
pub(crate) fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("invalid date `{}`, expected YYYY-MM-DD", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-31").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
        );
        assert!(parse_date("31/01/2024").is_err());
    }
}
