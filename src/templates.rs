//! Askama templates for every page. Money and timestamps are pre-formatted
//! into display strings by the handlers, so the templates only move text.

use askama::Template;
use axum::response::Html;

use crate::error::AppError;

pub fn render<T: Template>(template: T) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}

/// One enriched portfolio line. When the quote lookup for a held symbol
/// fails, `priced` is false and the row renders without price columns.
pub struct HoldingRow {
    pub symbol: String,
    pub stocks: i64,
    pub name: String,
    pub price: String,
    pub value: String,
    pub priced: bool,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub holdings: Vec<HoldingRow>,
    pub cash: String,
    pub total: String,
}

#[derive(Template)]
#[template(path = "buy.html")]
pub struct BuyTemplate {}

pub struct SellOption {
    pub symbol: String,
    pub stocks: i64,
}

#[derive(Template)]
#[template(path = "sell.html")]
pub struct SellTemplate {
    pub holdings: Vec<SellOption>,
}

pub struct HistoryRow {
    pub symbol: String,
    pub stocks: i64,
    pub price: String,
    pub at: String,
}

#[derive(Template)]
#[template(path = "history.html")]
pub struct HistoryTemplate {
    pub entries: Vec<HistoryRow>,
}

#[derive(Template)]
#[template(path = "quote.html")]
pub struct QuoteTemplate {}

#[derive(Template)]
#[template(path = "quoted.html")]
pub struct QuotedTemplate {
    pub name: String,
    pub symbol: String,
    pub price: String,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {}

#[derive(Template)]
#[template(path = "apology.html")]
pub struct ApologyTemplate {
    pub code: u16,
    pub message: String,
}
