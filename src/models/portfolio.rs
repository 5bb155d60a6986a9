use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// A named grouping of assets owned by one user. total_value is derived and
// cached; it is rewritten by every valuation recompute.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Portfolio {
    pub id: uuid::Uuid,
    pub name: String,
    pub total_value: f64,
    #[serde(skip_serializing)]
    pub user_id: uuid::Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Portfolio {
    pub(crate) fn new(name: String, user_id: uuid::Uuid) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            name,
            total_value: 0.0,
            user_id,
            created_at: chrono::Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatePortfolio {
    pub name: String,
}
