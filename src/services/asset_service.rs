use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::external::quote_provider::QuoteProvider;
use crate::models::{Asset, CreateAsset};
use crate::services::portfolio_service;

/// Attaches a new asset to the portfolio, pricing it from a live quote.
/// Any fetch failure degrades to a zero price rather than surfacing to the
/// caller; the parent portfolio's total is recomputed afterwards.
pub async fn add_asset(
    pool: &PgPool,
    quotes: &dyn QuoteProvider,
    portfolio_id: Uuid,
    input: CreateAsset,
) -> Result<Asset, AppError> {
    if !db::portfolio_queries::exists(pool, portfolio_id).await? {
        return Err(AppError::NotFound("Portfolio not found".to_string()));
    }

    let price = fetched_price(quotes, &input.symbol).await;

    let asset = db::asset_queries::insert(
        pool,
        Asset::new(input.symbol, input.quantity, Some(price), portfolio_id),
    )
    .await?;

    portfolio_service::recompute_value(pool, portfolio_id).await?;

    Ok(asset)
}

pub async fn fetch_for_portfolio(pool: &PgPool, portfolio_id: Uuid) -> Result<Vec<Asset>, AppError> {
    let assets = db::asset_queries::fetch_by_portfolio(pool, portfolio_id).await?;
    Ok(assets)
}

async fn fetched_price(quotes: &dyn QuoteProvider, symbol: &str) -> f64 {
    match quotes.fetch_quote(symbol).await {
        Ok(price) => price,
        Err(e) => {
            warn!("Failed to fetch quote for {}: {}", symbol, e);
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::quote_provider::QuoteProviderError;
    use async_trait::async_trait;

    struct FixedQuote(f64);

    #[async_trait]
    impl QuoteProvider for FixedQuote {
        async fn fetch_quote(&self, _symbol: &str) -> Result<f64, QuoteProviderError> {
            Ok(self.0)
        }
    }

    struct FailingQuote;

    #[async_trait]
    impl QuoteProvider for FailingQuote {
        async fn fetch_quote(&self, _symbol: &str) -> Result<f64, QuoteProviderError> {
            Err(QuoteProviderError::Network("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn live_quote_is_used_as_the_asset_price() {
        assert_eq!(fetched_price(&FixedQuote(187.5), "AAPL").await, 187.5);
    }

    #[tokio::test]
    async fn fetch_failure_degrades_to_zero_price() {
        assert_eq!(fetched_price(&FailingQuote, "AAPL").await, 0.0);
    }
}
