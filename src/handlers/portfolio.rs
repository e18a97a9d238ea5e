use axum::{extract::State, response::Html, Form};
use rust_decimal::Decimal;

use crate::{
    error::AppError,
    middleware::auth::AuthUser,
    models::{HistoryEntry, Holding, QuoteForm},
    money::usd,
    state::AppState,
    templates::{
        render, HistoryRow, HistoryTemplate, HoldingRow, IndexTemplate, QuoteTemplate,
        QuotedTemplate,
    },
};

/// Portfolio view: every holding enriched with a live quote, plus cash and
/// the grand total. A failed lookup degrades that row instead of taking the
/// whole page down.
pub async fn index(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Html<String>, AppError> {
    let cash: Decimal = sqlx::query_scalar("SELECT cash FROM users WHERE id = $1")
        .bind(auth.0)
        .fetch_one(&state.pool)
        .await?;

    let holdings: Vec<Holding> = sqlx::query_as(
        "SELECT symbol, stocks FROM holdings WHERE user_id = $1 ORDER BY symbol ASC",
    )
    .bind(auth.0)
    .fetch_all(&state.pool)
    .await?;

    let mut total = cash;
    let mut rows = Vec::with_capacity(holdings.len());
    for holding in holdings {
        match state.quotes.lookup(&holding.symbol).await {
            Ok(Some(quote)) => {
                let value = (quote.price * Decimal::from(holding.stocks)).round_dp(2);
                total += value;
                rows.push(HoldingRow {
                    symbol: holding.symbol,
                    stocks: holding.stocks,
                    name: quote.name,
                    price: usd(quote.price),
                    value: usd(value),
                    priced: true,
                });
            }
            Ok(None) | Err(_) => {
                tracing::warn!(symbol = %holding.symbol, "no quote for held symbol");
                rows.push(HoldingRow {
                    symbol: holding.symbol,
                    stocks: holding.stocks,
                    name: String::new(),
                    price: String::new(),
                    value: String::new(),
                    priced: false,
                });
            }
        }
    }

    render(IndexTemplate {
        holdings: rows,
        cash: usd(cash),
        total: usd(total),
    })
}

/// Transaction history in insertion order.
pub async fn history(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Html<String>, AppError> {
    let entries: Vec<HistoryEntry> = sqlx::query_as(
        "SELECT id, symbol, stocks, price, created_at FROM history WHERE user_id = $1 ORDER BY id ASC",
    )
    .bind(auth.0)
    .fetch_all(&state.pool)
    .await?;

    let rows = entries
        .into_iter()
        .map(|entry| HistoryRow {
            symbol: entry.symbol,
            stocks: entry.stocks,
            price: usd(entry.price),
            at: entry.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        })
        .collect();

    render(HistoryTemplate { entries: rows })
}

pub async fn quote_form(_auth: AuthUser) -> Result<Html<String>, AppError> {
    render(QuoteTemplate {})
}

pub async fn quote(
    State(state): State<AppState>,
    _auth: AuthUser,
    Form(form): Form<QuoteForm>,
) -> Result<Html<String>, AppError> {
    if form.symbol.trim().is_empty() {
        return Err(AppError::Validation("must provide a stock symbol"));
    }

    let quote = state
        .quotes
        .lookup(&form.symbol)
        .await?
        .ok_or(AppError::QuoteNotFound)?;

    render(QuotedTemplate {
        name: quote.name,
        symbol: quote.symbol,
        price: usd(quote.price),
    })
}
