use papertrade::trade::{parse_shares, plan_buy, plan_sell, TradeError};
use rust_decimal_macros::dec;

#[test]
fn test_buy_debits_cash_by_total_cost() {
    let plan = plan_buy(dec!(10000.00), dec!(400.00), 10).expect("affordable buy");

    assert_eq!(plan.shares, 10);
    assert_eq!(plan.cost, dec!(4000.00));
    assert_eq!(plan.cash_after, dec!(6000.00));
}

#[test]
fn test_buy_allows_spending_entire_balance() {
    let plan = plan_buy(dec!(4000.00), dec!(400.00), 10).expect("exact-cash buy");

    assert_eq!(plan.cash_after, dec!(0.00));
}

#[test]
fn test_buy_rejected_when_cost_exceeds_cash() {
    let err = plan_buy(dec!(3999.99), dec!(400.00), 10).expect_err("unaffordable buy");

    assert_eq!(err, TradeError::CannotAfford);
}

#[test]
fn test_buy_cost_rounds_to_cents() {
    let plan = plan_buy(dec!(100.00), dec!(33.333), 3).expect("affordable buy");

    assert_eq!(plan.cost, dec!(100.00));
    assert_eq!(plan.cash_after, dec!(0.00));
}

#[test]
fn test_sell_partial_leaves_remainder() {
    let plan = plan_sell(dec!(500.00), 10, dec!(25.00), 4).expect("partial sell");

    assert_eq!(plan.proceeds, dec!(100.00));
    assert_eq!(plan.cash_after, dec!(600.00));
    assert_eq!(plan.shares_after, 6);
    assert!(!plan.closes_position);
}

#[test]
fn test_sell_entire_position_closes_it() {
    let plan = plan_sell(dec!(0.00), 10, dec!(25.00), 10).expect("full sell");

    assert_eq!(plan.proceeds, dec!(250.00));
    assert_eq!(plan.cash_after, dec!(250.00));
    assert_eq!(plan.shares_after, 0);
    assert!(plan.closes_position);
}

#[test]
fn test_sell_more_than_held_rejected() {
    let err = plan_sell(dec!(0.00), 5, dec!(25.00), 6).expect_err("oversell");

    assert_eq!(
        err,
        TradeError::InsufficientShares {
            requested: 6,
            held: 5
        }
    );
}

#[test]
fn test_sell_without_position_rejected() {
    let err = plan_sell(dec!(0.00), 0, dec!(25.00), 1).expect_err("no position");

    assert_eq!(err, TradeError::NoPosition);
}

#[test]
fn test_parse_shares_accepts_whole_numbers() {
    assert_eq!(parse_shares("10"), Ok(10));
    assert_eq!(parse_shares(" 3 "), Ok(3));
}

#[test]
fn test_parse_shares_rejects_garbage() {
    assert_eq!(parse_shares(""), Err(TradeError::MalformedShares));
    assert_eq!(parse_shares("ten"), Err(TradeError::MalformedShares));
    assert_eq!(parse_shares("1.5"), Err(TradeError::MalformedShares));
}

#[test]
fn test_parse_shares_rejects_zero_and_negative() {
    assert_eq!(parse_shares("0"), Err(TradeError::NonPositiveShares));
    assert_eq!(parse_shares("-4"), Err(TradeError::NonPositiveShares));
}
