use sqlx::PgPool;

use crate::config::Config;
use crate::quote::QuoteClient;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub quotes: QuoteClient,
}
