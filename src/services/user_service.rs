use sqlx::PgPool;

use crate::auth::{password, TokenService};
use crate::db;
use crate::errors::AppError;
use crate::models::{LoginRequest, RegisterRequest, TokenResponse, UpdateProfileRequest, User};

pub async fn register(pool: &PgPool, input: RegisterRequest) -> Result<User, AppError> {
    if input.username.trim().is_empty() {
        return Err(AppError::Validation("Username cannot be empty".into()));
    }
    if input.password.is_empty() {
        return Err(AppError::Validation("Password cannot be empty".into()));
    }
    if db::user_queries::fetch_by_username(pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::DuplicateUsername);
    }

    let password_hash = password::hash(&input.password)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;
    let user = db::user_queries::insert(pool, User::new(input, password_hash)).await?;
    Ok(user)
}

pub async fn login(
    pool: &PgPool,
    tokens: &TokenService,
    input: LoginRequest,
) -> Result<TokenResponse, AppError> {
    let user = db::user_queries::fetch_by_username(pool, &input.username)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !password::verify(&input.password, &user.password) {
        return Err(AppError::InvalidCredentials);
    }

    let token = tokens
        .issue(&user.username, user.role)
        .map_err(|e| AppError::Internal(format!("token issuance failed: {e}")))?;
    Ok(TokenResponse { token })
}

/// Overwrites the allowed profile fields only; role and password are not
/// mutable through this path.
pub async fn update_profile(
    pool: &PgPool,
    username: &str,
    input: UpdateProfileRequest,
) -> Result<User, AppError> {
    let user = db::user_queries::update_profile(pool, username, input)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(user)
}

pub async fn fetch_profile(pool: &PgPool, username: &str) -> Result<User, AppError> {
    let user = db::user_queries::fetch_by_username(pool, username)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(user)
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<User>, AppError> {
    let users = db::user_queries::fetch_all(pool).await?;
    Ok(users)
}
