use axum::routing::get;
use axum::Router;

use crate::state::AppState;

// Liveness probe, mounted outside the authenticated /api tree.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health))
}

async fn health() -> &'static str {
    "OK"
}
