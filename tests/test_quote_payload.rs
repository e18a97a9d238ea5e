use papertrade::quote::{parse_quote, QuotePayload};
use rust_decimal_macros::dec;

fn payload(json: &str) -> QuotePayload {
    serde_json::from_str(json).expect("valid payload json")
}

#[test]
fn test_parse_quote_reads_upstream_fields() {
    let quote = parse_quote(payload(
        r#"{"companyName": "Netflix Inc.", "symbol": "nflx", "latestPrice": 400.0}"#,
    ))
    .expect("priced quote");

    assert_eq!(quote.name, "Netflix Inc.");
    assert_eq!(quote.symbol, "NFLX");
    assert_eq!(quote.price, dec!(400));
}

#[test]
fn test_parse_quote_without_price_is_unknown() {
    let result = parse_quote(payload(
        r#"{"companyName": "Ghost Corp", "symbol": "GHST", "latestPrice": null}"#,
    ));

    assert!(result.is_none());
}

#[test]
fn test_parse_quote_rejects_non_positive_price() {
    let zero = parse_quote(payload(
        r#"{"companyName": "Zero Corp", "symbol": "ZERO", "latestPrice": 0.0}"#,
    ));
    let negative = parse_quote(payload(
        r#"{"companyName": "Deep Corp", "symbol": "DEEP", "latestPrice": -1.25}"#,
    ));

    assert!(zero.is_none());
    assert!(negative.is_none());
}
