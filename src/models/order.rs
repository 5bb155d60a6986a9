use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_side", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

// An immutable record of a buy/sell intent. Orders are append-only and never
// mutate asset holdings or portfolio value.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
    pub id: uuid::Uuid,
    pub symbol: String,
    pub side: Side,
    pub quantity: f64,
    pub price: f64,
    pub order_time: chrono::DateTime<chrono::Utc>,
    pub status: String,
    pub portfolio_id: Option<uuid::Uuid>,
}

impl Order {
    pub(crate) fn new(
        symbol: String,
        side: Side,
        quantity: f64,
        price: f64,
        status: &str,
        portfolio_id: Option<uuid::Uuid>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            symbol,
            side,
            quantity,
            price,
            order_time: chrono::Utc::now(),
            status: status.to_string(),
            portfolio_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateOrder {
    pub symbol: String,
    // The wire field is "type" for compatibility with existing clients
    #[serde(rename = "type")]
    pub side: Side,
    pub quantity: f64,
    pub price: f64,
}
