use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::ApiResponse;
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profit-loss", get(get_profit_loss))
        .route("/asset-allocation", get(get_asset_allocation))
        .route("/performance", get(get_performance))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyticsQuery {
    portfolio_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PerformanceQuery {
    portfolio_id: Uuid,
    period: String,
}

async fn get_profit_loss(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> Result<Json<ApiResponse<f64>>, AppError> {
    info!(
        "GET /api/analytics/profit-loss - portfolio {}",
        query.portfolio_id
    );
    let profit_loss = services::analytics_service::profit_loss(&state.pool, query.portfolio_id).await?;
    Ok(Json(ApiResponse::success(
        profit_loss,
        "Profit/Loss calculated successfully",
    )))
}

async fn get_asset_allocation(
    State(state): State<AppState>,
    Query(query): Query<AnalyticsQuery>,
) -> Result<Json<ApiResponse<HashMap<String, f64>>>, AppError> {
    info!(
        "GET /api/analytics/asset-allocation - portfolio {}",
        query.portfolio_id
    );
    let allocation =
        services::analytics_service::asset_allocation(&state.pool, query.portfolio_id).await?;
    Ok(Json(ApiResponse::success(
        allocation,
        "Asset allocation fetched successfully",
    )))
}

async fn get_performance(
    State(state): State<AppState>,
    Query(query): Query<PerformanceQuery>,
) -> Result<Json<ApiResponse<f64>>, AppError> {
    info!(
        "GET /api/analytics/performance - portfolio {} period {}",
        query.portfolio_id, query.period
    );
    let performance =
        services::analytics_service::performance(&state.pool, query.portfolio_id, &query.period)
            .await?;
    Ok(Json(ApiResponse::success(
        performance,
        "Performance data calculated successfully",
    )))
}
