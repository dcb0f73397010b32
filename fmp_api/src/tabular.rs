//! CSV decoding for the bulk endpoints.

use serde::de::DeserializeOwned;

use crate::Error;

/// Decodes a CSV body into typed records, matching columns by header name.
///
/// The first line is the header. Every data row must have exactly as many
/// fields as the header; the first row that does not aborts the whole batch
/// with [`Error::Format`]. A field that cannot be parsed into its target type
/// aborts with [`Error::Decode`]. Rows are numbered from 1, header excluded.
pub fn decode_csv<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, Error> {
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body);

    let headers = reader
        .headers()
        .map_err(|e| Error::decode(format!("reading header: {}", e)))?
        .clone();

    let mut records = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let row = index + 1;
        let record = result.map_err(|e| Error::decode(format!("reading row {}: {}", row, e)))?;
        if record.len() != headers.len() {
            tracing::error!(
                "CSV row {} has {} fields, header has {}",
                row,
                record.len(),
                headers.len()
            );
            return Err(Error::Format {
                row,
                expected: headers.len(),
                actual: record.len(),
            });
        }
        let parsed = record
            .deserialize::<T>(Some(&headers))
            .map_err(|e| Error::decode(format!("parsing row {}: {}", row, e)))?;
        records.push(parsed);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde::Deserialize;

    use super::*;
    use crate::types::BulkCompanyProfile;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Row {
        symbol: String,
        price: Decimal,
        note: Option<String>,
    }

    const WELL_FORMED: &str = "symbol,price,note\nAAPL,189.25,\"large, liquid\"\nMSFT,410.1,\n";

    #[test]
    fn maps_rows_by_header_name() {
        let rows: Vec<Row> = decode_csv(WELL_FORMED.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].symbol, "AAPL");
        assert_eq!(rows[0].price, Decimal::new(18925, 2));
        assert_eq!(rows[0].note.as_deref(), Some("large, liquid"));
        assert_eq!(rows[1].note, None);
    }

    #[test]
    fn column_order_does_not_matter() {
        let rows: Vec<Row> = decode_csv(b"price,note,symbol\n1.5,x,IBM\n").unwrap();
        assert_eq!(rows[0].symbol, "IBM");
        assert_eq!(rows[0].price, Decimal::new(15, 1));
    }

    #[test]
    fn decoding_is_repeatable() {
        let first: Vec<Row> = decode_csv(WELL_FORMED.as_bytes()).unwrap();
        let second: Vec<Row> = decode_csv(WELL_FORMED.as_bytes()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn short_row_fails_whole_batch() {
        let body = "symbol,price,note\nAAPL,189.25,x\nMSFT,410.1\nNVDA,900,y\n";
        let err = decode_csv::<Row>(body.as_bytes()).unwrap_err();
        match err {
            Error::Format {
                row,
                expected,
                actual,
            } => {
                assert_eq!(row, 2);
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn long_row_fails_whole_batch() {
        let body = "symbol,price,note\nAAPL,189.25,x,extra\n";
        let err = decode_csv::<Row>(body.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::Format {
                row: 1,
                expected: 3,
                actual: 4
            }
        ));
    }

    #[test]
    fn unparsable_field_is_a_decode_error() {
        let body = "symbol,price,note\nAAPL,not-a-number,x\n";
        let err = decode_csv::<Row>(body.as_bytes()).unwrap_err();
        match err {
            Error::Decode { message } => assert!(message.contains("row 1")),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn empty_body_is_empty_batch() {
        assert!(decode_csv::<Row>(b"").unwrap().is_empty());
        assert!(decode_csv::<Row>(b"symbol,price,note\n").unwrap().is_empty());
    }

    #[test]
    fn decodes_bulk_profile_rows() {
        let body = "symbol,price,marketCap,companyName,ipoDate,isEtf,fullTimeEmployees\n\
                    AAPL,189.25,2950000000000,Apple Inc.,1980-12-12,false,161000\n\
                    SPY,510.5,,SPDR S&P 500 ETF Trust,,true,\n";
        let rows: Vec<BulkCompanyProfile> = decode_csv(body.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].company_name, "Apple Inc.");
        assert_eq!(rows[0].market_cap, Some(Decimal::new(2_950_000_000_000, 0)));
        assert_eq!(rows[0].full_time_employees, Some(161000));
        assert_eq!(
            rows[0].ipo_date.map(|d| d.to_string()).as_deref(),
            Some("1980-12-12")
        );
        assert!(rows[1].is_etf);
        assert_eq!(rows[1].market_cap, None);
        assert_eq!(rows[1].ipo_date, None);
    }
}
