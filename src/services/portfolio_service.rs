use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{Asset, CreatePortfolio, Portfolio};

pub async fn create(
    pool: &PgPool,
    owner_username: &str,
    input: CreatePortfolio,
) -> Result<Portfolio, AppError> {
    if input.name.trim().is_empty() {
        return Err(AppError::Validation("Portfolio name cannot be empty".into()));
    }
    let owner = db::user_queries::fetch_by_username(pool, owner_username)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    let portfolio = db::portfolio_queries::insert(pool, Portfolio::new(input.name, owner.id)).await?;
    Ok(portfolio)
}

pub async fn fetch_for_user(pool: &PgPool, owner_username: &str) -> Result<Vec<Portfolio>, AppError> {
    let owner = db::user_queries::fetch_by_username(pool, owner_username)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    let portfolios = db::portfolio_queries::fetch_by_user(pool, owner.id).await?;
    Ok(portfolios)
}

/// Recomputes the cached total from the portfolio's current assets and
/// persists it. Idempotent: with unchanged assets, repeated calls write the
/// same total.
pub async fn recompute_value(pool: &PgPool, id: Uuid) -> Result<Portfolio, AppError> {
    let assets = db::asset_queries::fetch_by_portfolio(pool, id).await?;
    let total = total_value(&assets);
    let portfolio = db::portfolio_queries::update_total_value(pool, id, total)
        .await?
        .ok_or_else(|| AppError::NotFound("Portfolio not found".to_string()))?;
    Ok(portfolio)
}

/// Sum of quantity × price over the assets, missing values counted as zero.
pub fn total_value(assets: &[Asset]) -> f64 {
    assets
        .iter()
        .map(|a| a.quantity.unwrap_or(0.0) * a.price.unwrap_or(0.0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(symbol: &str, quantity: Option<f64>, price: Option<f64>) -> Asset {
        Asset::new(symbol.to_string(), quantity, price, uuid::Uuid::new_v4())
    }

    #[test]
    fn total_is_sum_of_quantity_times_price() {
        let assets = vec![
            asset("AAPL", Some(2.0), Some(150.0)),
            asset("MSFT", Some(1.0), Some(300.0)),
        ];
        assert_eq!(total_value(&assets), 600.0);
    }

    #[test]
    fn missing_quantity_or_price_counts_as_zero() {
        let assets = vec![
            asset("AAPL", None, Some(150.0)),
            asset("MSFT", Some(1.0), None),
            asset("GOOG", Some(3.0), Some(10.0)),
        ];
        assert_eq!(total_value(&assets), 30.0);
    }

    #[test]
    fn empty_portfolio_is_worth_zero() {
        assert_eq!(total_value(&[]), 0.0);
    }

    #[test]
    fn recompute_is_idempotent_over_unchanged_assets() {
        let assets = vec![
            asset("AAPL", Some(2.0), Some(150.0)),
            asset("MSFT", Some(1.0), Some(300.0)),
        ];
        assert_eq!(total_value(&assets), total_value(&assets));
    }
}
