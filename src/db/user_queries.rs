use sqlx::PgPool;

use crate::models::{UpdateProfileRequest, User};

const USER_COLUMNS: &str = "id, username, password, role, first_name, last_name, \
                            phone_number, date_of_birth, gender, account_type";

pub async fn fetch_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
    ))
    .bind(username)
    .fetch_optional(pool)
    .await
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY username"))
        .fetch_all(pool)
        .await
}

pub async fn insert(pool: &PgPool, input: User) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        "INSERT INTO users (id, username, password, role, first_name, last_name, \
                            phone_number, date_of_birth, gender, account_type)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
         RETURNING {USER_COLUMNS}"
    ))
    .bind(input.id)
    .bind(input.username)
    .bind(input.password)
    .bind(input.role)
    .bind(input.first_name)
    .bind(input.last_name)
    .bind(input.phone_number)
    .bind(input.date_of_birth)
    .bind(input.gender)
    .bind(input.account_type)
    .fetch_one(pool)
    .await
}

pub async fn update_profile(
    pool: &PgPool,
    username: &str,
    input: UpdateProfileRequest,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        "UPDATE users
         SET first_name = $1, last_name = $2, phone_number = $3,
             date_of_birth = $4, gender = $5, account_type = $6
         WHERE username = $7
         RETURNING {USER_COLUMNS}"
    ))
    .bind(input.first_name)
    .bind(input.last_name)
    .bind(input.phone_number)
    .bind(input.date_of_birth)
    .bind(input.gender)
    .bind(input.account_type)
    .bind(username)
    .fetch_optional(pool)
    .await
}
