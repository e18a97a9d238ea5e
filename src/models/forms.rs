use serde::Deserialize;

// Missing fields deserialize to empty strings so the handlers can answer
// with the apology page instead of an extractor rejection.

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct TradeForm {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub shares: String,
}

#[derive(Debug, Deserialize)]
pub struct QuoteForm {
    #[serde(default)]
    pub symbol: String,
}
