use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Asset;

pub async fn insert(pool: &PgPool, input: Asset) -> Result<Asset, sqlx::Error> {
    sqlx::query_as::<_, Asset>(
        "INSERT INTO assets (id, symbol, quantity, price, portfolio_id)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, symbol, quantity, price, portfolio_id",
    )
    .bind(input.id)
    .bind(input.symbol)
    .bind(input.quantity)
    .bind(input.price)
    .bind(input.portfolio_id)
    .fetch_one(pool)
    .await
}

pub async fn fetch_by_portfolio(
    pool: &PgPool,
    portfolio_id: Uuid,
) -> Result<Vec<Asset>, sqlx::Error> {
    sqlx::query_as::<_, Asset>(
        "SELECT id, symbol, quantity, price, portfolio_id
         FROM assets
         WHERE portfolio_id = $1",
    )
    .bind(portfolio_id)
    .fetch_all(pool)
    .await
}
