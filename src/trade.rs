//! Pure planning arithmetic for buy and sell orders. Handlers run these
//! against rows locked inside a transaction, then apply the resulting plan.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TradeError {
    #[error("enter a valid number of shares")]
    MalformedShares,

    #[error("share quantity must be a positive whole number")]
    NonPositiveShares,

    #[error("unable to purchase: cannot afford")]
    CannotAfford,

    #[error("no position held in that stock")]
    NoPosition,

    #[error("cannot sell {requested} shares: only {held} held")]
    InsufficientShares { requested: i64, held: i64 },
}

/// Parses a share quantity from a form field. Zero is rejected: a zero-share
/// order would record a no-op trade in history.
pub fn parse_shares(raw: &str) -> Result<i64, TradeError> {
    let shares: i64 = raw.trim().parse().map_err(|_| TradeError::MalformedShares)?;
    if shares <= 0 {
        return Err(TradeError::NonPositiveShares);
    }
    Ok(shares)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyPlan {
    pub shares: i64,
    /// Total cost, rounded to cents; also the amount recorded in history.
    pub cost: Decimal,
    pub cash_after: Decimal,
}

/// Plans a purchase of `shares` at unit price `price` against available
/// `cash`. No partial fills: the whole order must be affordable.
pub fn plan_buy(cash: Decimal, price: Decimal, shares: i64) -> Result<BuyPlan, TradeError> {
    let cost = (price * Decimal::from(shares)).round_dp(2);
    if cost > cash {
        return Err(TradeError::CannotAfford);
    }
    Ok(BuyPlan {
        shares,
        cost,
        cash_after: cash - cost,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellPlan {
    pub shares: i64,
    /// Total proceeds, rounded to cents; also the amount recorded in history.
    pub proceeds: Decimal,
    pub cash_after: Decimal,
    pub shares_after: i64,
    /// The holding row is deleted when the position reaches zero.
    pub closes_position: bool,
}

/// Plans a sale of `shares` out of a position of `held` shares. No short
/// selling: the order must not exceed the held quantity.
pub fn plan_sell(
    cash: Decimal,
    held: i64,
    price: Decimal,
    shares: i64,
) -> Result<SellPlan, TradeError> {
    if held <= 0 {
        return Err(TradeError::NoPosition);
    }
    if shares > held {
        return Err(TradeError::InsufficientShares {
            requested: shares,
            held,
        });
    }
    let proceeds = (price * Decimal::from(shares)).round_dp(2);
    let shares_after = held - shares;
    Ok(SellPlan {
        shares,
        proceeds,
        cash_after: cash + proceeds,
        shares_after,
        closes_position: shares_after == 0,
    })
}
