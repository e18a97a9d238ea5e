use papertrade::money::usd;
use rust_decimal_macros::dec;

#[test]
fn test_usd_groups_thousands() {
    assert_eq!(usd(dec!(4000)), "$4,000.00");
    assert_eq!(usd(dec!(1234567.89)), "$1,234,567.89");
}

#[test]
fn test_usd_small_amounts() {
    assert_eq!(usd(dec!(0.5)), "$0.50");
    assert_eq!(usd(dec!(999.99)), "$999.99");
}

#[test]
fn test_usd_rounds_to_cents() {
    assert_eq!(usd(dec!(10.006)), "$10.01");
    assert_eq!(usd(dec!(10.004)), "$10.00");
}

#[test]
fn test_usd_negative_amounts() {
    assert_eq!(usd(dec!(-1234.5)), "-$1,234.50");
}
