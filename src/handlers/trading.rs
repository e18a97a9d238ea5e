use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use rust_decimal::Decimal;

use crate::{
    error::AppError,
    middleware::auth::AuthUser,
    models::{Holding, TradeForm},
    state::AppState,
    templates::{render, BuyTemplate, SellOption, SellTemplate},
    trade,
};

pub async fn buy_form(_auth: AuthUser) -> Result<Html<String>, AppError> {
    render(BuyTemplate {})
}

/// Executes a purchase. The quote is looked up before the transaction opens;
/// the three writes (history, holding, cash) commit or roll back together.
pub async fn buy(
    State(state): State<AppState>,
    auth: AuthUser,
    Form(form): Form<TradeForm>,
) -> Result<Redirect, AppError> {
    let symbol = form.symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(AppError::Validation("must provide a stock symbol"));
    }
    let shares = trade::parse_shares(&form.shares)?;

    let quote = state
        .quotes
        .lookup(&symbol)
        .await?
        .ok_or(AppError::UnknownSymbol)?;

    let mut tx = state.pool.begin().await?;

    let cash: Decimal = sqlx::query_scalar("SELECT cash FROM users WHERE id = $1 FOR UPDATE")
        .bind(auth.0)
        .fetch_one(&mut *tx)
        .await?;

    let plan = trade::plan_buy(cash, quote.price, shares)?;

    sqlx::query("INSERT INTO history (user_id, symbol, stocks, price) VALUES ($1, $2, $3, $4)")
        .bind(auth.0)
        .bind(&symbol)
        .bind(plan.shares)
        .bind(plan.cost)
        .execute(&mut *tx)
        .await?;

    sqlx::query(
        r#"
        INSERT INTO holdings (user_id, symbol, stocks)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id, symbol) DO UPDATE SET stocks = holdings.stocks + EXCLUDED.stocks
        "#,
    )
    .bind(auth.0)
    .bind(&symbol)
    .bind(plan.shares)
    .execute(&mut *tx)
    .await?;

    sqlx::query("UPDATE users SET cash = $1 WHERE id = $2")
        .bind(plan.cash_after)
        .bind(auth.0)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(symbol = %symbol, shares, cost = %plan.cost, "bought shares");

    Ok(Redirect::to("/"))
}

pub async fn sell_form(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Html<String>, AppError> {
    let holdings: Vec<Holding> = sqlx::query_as(
        "SELECT symbol, stocks FROM holdings WHERE user_id = $1 ORDER BY symbol ASC",
    )
    .bind(auth.0)
    .fetch_all(&state.pool)
    .await?;

    let options = holdings
        .into_iter()
        .map(|h| SellOption {
            symbol: h.symbol,
            stocks: h.stocks,
        })
        .collect();

    render(SellTemplate { holdings: options })
}

/// Executes a sale. The holding row is locked for the duration of the
/// transaction; when the position reaches zero its row is deleted, scoped to
/// this user and symbol.
pub async fn sell(
    State(state): State<AppState>,
    auth: AuthUser,
    Form(form): Form<TradeForm>,
) -> Result<Redirect, AppError> {
    let symbol = form.symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(AppError::Validation("no stock selected"));
    }
    let shares = trade::parse_shares(&form.shares)?;

    let quote = state
        .quotes
        .lookup(&symbol)
        .await?
        .ok_or(AppError::UnknownSymbol)?;

    let mut tx = state.pool.begin().await?;

    let held: Option<i64> = sqlx::query_scalar(
        "SELECT stocks FROM holdings WHERE user_id = $1 AND symbol = $2 FOR UPDATE",
    )
    .bind(auth.0)
    .bind(&symbol)
    .fetch_optional(&mut *tx)
    .await?;

    let cash: Decimal = sqlx::query_scalar("SELECT cash FROM users WHERE id = $1 FOR UPDATE")
        .bind(auth.0)
        .fetch_one(&mut *tx)
        .await?;

    let plan = trade::plan_sell(cash, held.unwrap_or(0), quote.price, shares)?;

    sqlx::query("INSERT INTO history (user_id, symbol, stocks, price) VALUES ($1, $2, $3, $4)")
        .bind(auth.0)
        .bind(&symbol)
        .bind(-plan.shares)
        .bind(plan.proceeds)
        .execute(&mut *tx)
        .await?;

    if plan.closes_position {
        sqlx::query("DELETE FROM holdings WHERE user_id = $1 AND symbol = $2")
            .bind(auth.0)
            .bind(&symbol)
            .execute(&mut *tx)
            .await?;
    } else {
        sqlx::query("UPDATE holdings SET stocks = $1 WHERE user_id = $2 AND symbol = $3")
            .bind(plan.shares_after)
            .bind(auth.0)
            .bind(&symbol)
            .execute(&mut *tx)
            .await?;
    }

    sqlx::query("UPDATE users SET cash = $1 WHERE id = $2")
        .bind(plan.cash_after)
        .bind(auth.0)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(symbol = %symbol, shares, proceeds = %plan.proceeds, "sold shares");

    Ok(Redirect::to("/"))
}
