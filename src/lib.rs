pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod money;
pub mod quote;
pub mod state;
pub mod templates;
pub mod trade;

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tower_sessions::{cookie::time::Duration, Expiry, MemoryStore, SessionManagerLayer};

use handlers::{
    buy, buy_form, history, index, login, login_form, logout, quote as quote_view, quote_form,
    register, register_form, sell, sell_form,
};
use state::AppState;

pub fn app(state: AppState) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::hours(2)));

    Router::new()
        .route("/", get(index))
        .route("/buy", get(buy_form).post(buy))
        .route("/sell", get(sell_form).post(sell))
        .route("/history", get(history))
        .route("/quote", get(quote_form).post(quote_view))
        .route("/register", get(register_form).post(register))
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
        .layer(session_layer)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
