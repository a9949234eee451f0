use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use store::Credits;

/// One row of the purchase ledger.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Purchase {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    /// Name at the time of purchase; the catalog may change between restarts.
    pub product_name: String,
    pub price: Credits,
    pub balance_after: Credits,
    pub created_at: NaiveDateTime,
}
