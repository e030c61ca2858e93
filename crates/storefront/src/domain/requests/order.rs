use crate::model::order::FulfillmentMode;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "customer_name is required"))]
    #[serde(rename = "customer_name")]
    pub customer_name: String,

    #[validate(length(min = 1, message = "customer_phone is required"))]
    #[serde(rename = "customer_phone")]
    pub customer_phone: String,

    #[validate(length(min = 1, message = "customer_address is required"))]
    #[serde(rename = "customer_address")]
    pub customer_address: String,

    /// Optional on the wire; omitted means store pickup.
    #[serde(default)]
    pub mode: FulfillmentMode,

    #[validate(length(min = 1, message = "items must not be empty"))]
    pub items: Vec<CreateOrderItemRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderItemRequest {
    #[validate(range(min = 1))]
    #[serde(rename = "product_id")]
    pub product_id: i64,

    #[validate(range(min = 1))]
    pub quantity: i64,
}

/// Fully-priced order ready for insertion; built by the order service after
/// the catalog lookup, never taken from client input.
#[derive(Debug, Clone)]
pub struct CreateOrderRecordRequest {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub total: f64,
    pub mode: FulfillmentMode,
    pub delivery_date: Option<NaiveDate>,
    pub checkout_url: Option<String>,
    pub items: Vec<CreateOrderItemRecordRequest>,
}

#[derive(Debug, Clone)]
pub struct CreateOrderItemRecordRequest {
    pub product_id: i64,
    pub quantity: i64,
    pub price: f64,
}
