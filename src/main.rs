use std::net::SocketAddr;

use papertrade::{config::Config, db, quote::QuoteClient, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let pool = db::create_pool(&config).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let quotes = QuoteClient::new(config.quote_api_url.clone(), config.quote_api_key.clone());
    let state = AppState {
        pool,
        config,
        quotes,
    };

    let app = papertrade::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!("listening on http://{}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
