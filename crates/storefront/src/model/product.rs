use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i64,
    pub name: String,
    pub price: f64,
    pub active: bool,
    pub created_at: Option<NaiveDateTime>,
}
