use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Portfolio;

pub async fn insert(pool: &PgPool, input: Portfolio) -> Result<Portfolio, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>(
        "INSERT INTO portfolios (id, name, total_value, user_id, created_at)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, name, total_value, user_id, created_at",
    )
    .bind(input.id)
    .bind(input.name)
    .bind(input.total_value)
    .bind(input.user_id)
    .bind(input.created_at)
    .fetch_one(pool)
    .await
}

pub async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<Option<Portfolio>, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>(
        "SELECT id, name, total_value, user_id, created_at
         FROM portfolios
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn fetch_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Portfolio>, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>(
        "SELECT id, name, total_value, user_id, created_at
         FROM portfolios
         WHERE user_id = $1
         ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn update_total_value(
    pool: &PgPool,
    id: Uuid,
    total_value: f64,
) -> Result<Option<Portfolio>, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>(
        "UPDATE portfolios
         SET total_value = $1
         WHERE id = $2
         RETURNING id, name, total_value, user_id, created_at",
    )
    .bind(total_value)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn exists(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM portfolios WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await
}
