use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Order;

const ORDER_COLUMNS: &str = "id, symbol, side, quantity, price, order_time, status, portfolio_id";

pub async fn insert(pool: &PgPool, input: Order) -> Result<Order, sqlx::Error> {
    sqlx::query_as::<_, Order>(&format!(
        "INSERT INTO orders (id, symbol, side, quantity, price, order_time, status, portfolio_id)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         RETURNING {ORDER_COLUMNS}"
    ))
    .bind(input.id)
    .bind(input.symbol)
    .bind(input.side)
    .bind(input.quantity)
    .bind(input.price)
    .bind(input.order_time)
    .bind(input.status)
    .bind(input.portfolio_id)
    .fetch_one(pool)
    .await
}

pub async fn fetch_by_portfolio(
    pool: &PgPool,
    portfolio_id: Uuid,
) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders WHERE portfolio_id = $1"
    ))
    .bind(portfolio_id)
    .fetch_all(pool)
    .await
}

pub async fn fetch_recent_global(pool: &PgPool, limit: i64) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders ORDER BY order_time DESC LIMIT $1"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn fetch_recent_by_portfolio(
    pool: &PgPool,
    portfolio_id: Uuid,
    limit: i64,
) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders
         WHERE portfolio_id = $1
         ORDER BY order_time DESC
         LIMIT $2"
    ))
    .bind(portfolio_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}
