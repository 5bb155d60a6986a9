mod app;
mod auth;
mod config;
mod db;
mod errors;
mod external;
mod logging;
mod models;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

use crate::auth::TokenService;
use crate::config::AppConfig;
use crate::external::finnhub::FinnhubProvider;
use crate::external::quote_provider::QuoteProvider;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    logging::init_logging(logging::LoggingConfig::from_env());

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!().run(&pool).await?;

    let quote_provider: Arc<dyn QuoteProvider> = Arc::new(FinnhubProvider::from_env()?);
    let tokens = TokenService::new(&config.jwt_secret)?;

    let state = AppState {
        pool,
        quote_provider,
        tokens,
    };
    let app = app::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 TradeShift backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
