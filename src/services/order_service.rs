use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{CreateOrder, Order};

const RECENT_LIMIT: i64 = 5;

/// Persists an order against the portfolio. Order placement is a log entry:
/// it does not touch asset holdings or the cached portfolio value.
pub async fn place(pool: &PgPool, portfolio_id: Uuid, input: CreateOrder) -> Result<Order, AppError> {
    if !db::portfolio_queries::exists(pool, portfolio_id).await? {
        return Err(AppError::NotFound("Portfolio not found".to_string()));
    }
    let order = db::order_queries::insert(
        pool,
        Order::new(
            input.symbol,
            input.side,
            input.quantity,
            input.price,
            "Completed",
            Some(portfolio_id),
        ),
    )
    .await?;
    Ok(order)
}

/// Standalone order with no portfolio link and no existence checks.
pub async fn quick(pool: &PgPool, input: CreateOrder) -> Result<Order, AppError> {
    let order = db::order_queries::insert(
        pool,
        Order::new(
            input.symbol,
            input.side,
            input.quantity,
            input.price,
            "SUCCESS",
            None,
        ),
    )
    .await?;
    Ok(order)
}

pub async fn fetch_for_portfolio(pool: &PgPool, portfolio_id: Uuid) -> Result<Vec<Order>, AppError> {
    let orders = db::order_queries::fetch_by_portfolio(pool, portfolio_id).await?;
    Ok(orders)
}

pub async fn recent_global(pool: &PgPool) -> Result<Vec<Order>, AppError> {
    let orders = db::order_queries::fetch_recent_global(pool, RECENT_LIMIT).await?;
    Ok(orders)
}

pub async fn recent_for_portfolio(pool: &PgPool, portfolio_id: Uuid) -> Result<Vec<Order>, AppError> {
    let orders =
        db::order_queries::fetch_recent_by_portfolio(pool, portfolio_id, RECENT_LIMIT).await?;
    Ok(orders)
}
