use reqwest::StatusCode;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// A point-in-time price for a stock symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub name: String,
    pub symbol: String,
    pub price: Decimal,
}

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("quote request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("quote service returned {0}")]
    Status(StatusCode),
}

/// Wire shape of the upstream quote endpoint.
#[derive(Debug, Deserialize)]
pub struct QuotePayload {
    #[serde(rename = "companyName")]
    pub company_name: String,
    pub symbol: String,
    #[serde(rename = "latestPrice")]
    pub latest_price: Option<f64>,
}

/// Client for the external price source. One independent request per lookup;
/// no caching, no retries.
#[derive(Clone)]
pub struct QuoteClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl QuoteClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Looks up the current quote for `symbol` (case-insensitive). Returns
    /// `Ok(None)` when the symbol is unknown to the price source.
    pub async fn lookup(&self, symbol: &str) -> Result<Option<Quote>, QuoteError> {
        let symbol = symbol.trim().to_uppercase();
        let url = format!(
            "{}/stock/{}/quote",
            self.base_url.trim_end_matches('/'),
            symbol
        );
        let response = self
            .http
            .get(&url)
            .query(&[("token", self.api_key.as_str())])
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let payload: QuotePayload = response.json().await?;
                Ok(parse_quote(payload))
            }
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(QuoteError::Status(status)),
        }
    }
}

/// A payload without a positive price is treated the same as an unknown
/// symbol.
pub fn parse_quote(payload: QuotePayload) -> Option<Quote> {
    let price = Decimal::from_f64(payload.latest_price?)?;
    if price <= Decimal::ZERO {
        return None;
    }
    Some(Quote {
        name: payload.company_name,
        symbol: payload.symbol.to_uppercase(),
        price,
    })
}
