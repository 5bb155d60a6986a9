use sqlx::PgPool;
use std::sync::Arc;

use crate::auth::TokenService;
use crate::external::quote_provider::QuoteProvider;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub quote_provider: Arc<dyn QuoteProvider>,
    pub tokens: TokenService,
}
