use axum::extract::{Path, State};
use axum::routing::post;
use axum::{Extension, Json, Router};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{Asset, CreateAsset, CreatePortfolio, Portfolio};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_portfolio).get(fetch_portfolios))
        .route("/:id/assets", post(add_asset).get(fetch_assets))
}

#[axum::debug_handler]
pub async fn create_portfolio(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(input): Json<CreatePortfolio>,
) -> Result<Json<Portfolio>, AppError> {
    info!(
        "POST /api/portfolio - Creating portfolio for {}",
        user.username
    );
    let portfolio = services::portfolio_service::create(&state.pool, &user.username, input)
        .await
        .map_err(|e| {
            error!("Failed to create portfolio: {}", e);
            e
        })?;
    Ok(Json(portfolio))
}

pub async fn fetch_portfolios(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Portfolio>>, AppError> {
    info!(
        "GET /api/portfolio - Fetching portfolios of {}",
        user.username
    );
    let portfolios =
        services::portfolio_service::fetch_for_user(&state.pool, &user.username).await?;
    Ok(Json(portfolios))
}

pub async fn add_asset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<CreateAsset>,
) -> Result<Json<Asset>, AppError> {
    info!("POST /api/portfolio/{}/assets - Adding {}", id, input.symbol);
    let asset =
        services::asset_service::add_asset(&state.pool, state.quote_provider.as_ref(), id, input)
            .await
            .map_err(|e| {
                error!("Failed to add asset to portfolio {}: {}", id, e);
                e
            })?;
    Ok(Json(asset))
}

pub async fn fetch_assets(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Asset>>, AppError> {
    info!("GET /api/portfolio/{}/assets - Fetching assets", id);
    let assets = services::asset_service::fetch_for_portfolio(&state.pool, id).await?;
    Ok(Json(assets))
}
