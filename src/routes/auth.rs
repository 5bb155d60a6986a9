use axum::extract::{Path, State};
use axum::routing::{get, post, put};
use axum::{Extension, Json, Router};
use tracing::{error, info};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{LoginRequest, RegisterRequest, TokenResponse, UpdateProfileRequest, User};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/:username", put(update_user))
        .route("/profile/:username", get(get_profile))
}

pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> Result<Json<User>, AppError> {
    info!("POST /api/auth/register - Registering {}", input.username);
    let user = services::user_service::register(&state.pool, input)
        .await
        .map_err(|e| {
            error!("Failed to register user: {}", e);
            e
        })?;
    Ok(Json(user))
}

pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    info!("POST /api/auth/login - Login attempt for {}", input.username);
    let response = services::user_service::login(&state.pool, &state.tokens, input).await?;
    Ok(Json(response))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Extension(actor): Extension<AuthUser>,
    Json(input): Json<UpdateProfileRequest>,
) -> Result<Json<User>, AppError> {
    info!(
        "PUT /api/auth/{} - Updating profile, requested by {} ({})",
        username,
        actor.username,
        actor.role.as_str()
    );
    let user = services::user_service::update_profile(&state.pool, &username, input)
        .await
        .map_err(|e| {
            error!("Failed to update profile for {}: {}", username, e);
            e
        })?;
    Ok(Json(user))
}

pub async fn get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<User>, AppError> {
    info!("GET /api/auth/profile/{} - Fetching profile", username);
    let user = services::user_service::fetch_profile(&state.pool, &username).await?;
    Ok(Json(user))
}
