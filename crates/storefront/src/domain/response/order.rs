use crate::model::{
    order::{FulfillmentMode, Order as OrderModel, OrderStatus},
    order_item::OrderItem as OrderItemModel,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Confirmation payload returned to the customer right after checkout
/// submission; `order_id` is the confirmation reference.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderCreatedResponse {
    #[serde(rename = "order_id")]
    pub order_id: i64,
    pub total: f64,
    pub status: OrderStatus,
    pub mode: FulfillmentMode,
    #[serde(rename = "delivery_date")]
    pub delivery_date: Option<NaiveDate>,
    #[serde(rename = "checkout_url")]
    pub checkout_url: Option<String>,
}

// model to response
impl From<OrderModel> for OrderCreatedResponse {
    fn from(value: OrderModel) -> Self {
        OrderCreatedResponse {
            order_id: value.order_id,
            total: value.total,
            status: value.status,
            mode: value.mode,
            delivery_date: value.delivery_date,
            checkout_url: value.checkout_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItemResponse {
    #[serde(rename = "product_id")]
    pub product_id: i64,
    pub quantity: i64,
    pub price: f64,
}

impl From<OrderItemModel> for OrderItemResponse {
    fn from(value: OrderItemModel) -> Self {
        OrderItemResponse {
            product_id: value.product_id,
            quantity: value.quantity,
            price: value.price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: i64,
    #[serde(rename = "customer_name")]
    pub customer_name: String,
    #[serde(rename = "customer_phone")]
    pub customer_phone: String,
    #[serde(rename = "customer_address")]
    pub customer_address: String,
    pub total: f64,
    pub status: OrderStatus,
    pub mode: FulfillmentMode,
    #[serde(rename = "delivery_date")]
    pub delivery_date: Option<NaiveDate>,
    #[serde(rename = "checkout_url")]
    pub checkout_url: Option<String>,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    pub items: Vec<OrderItemResponse>,
}

impl OrderResponse {
    pub fn from_parts(order: OrderModel, items: Vec<OrderItemModel>) -> Self {
        OrderResponse {
            id: order.order_id,
            customer_name: order.customer_name,
            customer_phone: order.customer_phone,
            customer_address: order.customer_address,
            total: order.total,
            status: order.status,
            mode: order.mode,
            delivery_date: order.delivery_date,
            checkout_url: order.checkout_url,
            created_at: order.created_at.map(|dt| dt.to_string()),
            items: items.into_iter().map(OrderItemResponse::from).collect(),
        }
    }
}
