use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A line item carries the unit price snapshotted at order creation, so
/// later catalog price changes never alter a committed order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub order_item_id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub price: f64,
}
