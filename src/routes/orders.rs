use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{CreateOrder, Order};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:id/orders", post(place_order).get(fetch_orders))
        .route("/:id/orders/public", post(quick_order))
        .route("/:id/orders/recent", get(recent_for_portfolio))
        .route("/:id/orders/recent/all", get(recent_global))
}

pub async fn place_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<CreateOrder>,
) -> Result<Json<Order>, AppError> {
    info!(
        "POST /api/portfolio/{}/orders - {:?} {} x {}",
        id, input.side, input.quantity, input.symbol
    );
    let order = services::order_service::place(&state.pool, id, input).await?;
    Ok(Json(order))
}

// Standalone entry point: the path id is accepted for routing compatibility
// but the stored order carries no portfolio link.
pub async fn quick_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<CreateOrder>,
) -> Result<Json<Order>, AppError> {
    info!(
        "POST /api/portfolio/{}/orders/public - quick {:?} {}",
        id, input.side, input.symbol
    );
    let order = services::order_service::quick(&state.pool, input).await?;
    Ok(Json(order))
}

pub async fn fetch_orders(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Order>>, AppError> {
    info!("GET /api/portfolio/{}/orders - Fetching orders", id);
    let orders = services::order_service::fetch_for_portfolio(&state.pool, id).await?;
    Ok(Json(orders))
}

pub async fn recent_for_portfolio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Order>>, AppError> {
    info!("GET /api/portfolio/{}/orders/recent - Recent orders", id);
    let orders = services::order_service::recent_for_portfolio(&state.pool, id).await?;
    Ok(Json(orders))
}

pub async fn recent_global(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Order>>, AppError> {
    info!("GET /api/portfolio/{}/orders/recent/all - Recent orders globally", id);
    let orders = services::order_service::recent_global(&state.pool).await?;
    Ok(Json(orders))
}
