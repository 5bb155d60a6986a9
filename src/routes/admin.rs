use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::errors::AppError;
use crate::models::User;
use crate::services;
use crate::state::AppState;

// The gate admits ADMIN tokens only for anything nested here.
pub fn router() -> Router<AppState> {
    Router::new().route("/users", get(list_users))
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    info!("GET /api/admin/users - Listing users");
    let users = services::user_service::fetch_all(&state.pool).await?;
    Ok(Json(users))
}
