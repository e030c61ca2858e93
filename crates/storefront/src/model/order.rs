use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Order lifecycle. `paid` is only ever set by a payment adapter, which is
/// disabled by default, so persisted orders stay `created` in this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
    Paid,
    Cancelled,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum FulfillmentMode {
    #[default]
    Pickup,
    Delivery,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_id: i64,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub total: f64,
    pub status: OrderStatus,
    pub mode: FulfillmentMode,
    pub delivery_date: Option<NaiveDate>,
    pub checkout_url: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}
