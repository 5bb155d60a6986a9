use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// A holding of one symbol inside a portfolio. quantity and price are nullable
// in the store; valuation treats missing values as zero. portfolio_id is the
// foreign-key column only and is never traversed outward.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Asset {
    pub id: uuid::Uuid,
    pub symbol: String,
    pub quantity: Option<f64>,
    pub price: Option<f64>,
    pub portfolio_id: uuid::Uuid,
}

impl Asset {
    pub(crate) fn new(
        symbol: String,
        quantity: Option<f64>,
        price: Option<f64>,
        portfolio_id: uuid::Uuid,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            symbol,
            quantity,
            price,
            portfolio_id,
        }
    }
}

// Price is not part of the request: it is set once at creation from a live
// quote fetch.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAsset {
    pub symbol: String,
    pub quantity: Option<f64>,
}
