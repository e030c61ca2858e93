use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckoutSession {
    #[serde(rename = "order_id")]
    pub order_id: i64,
    pub url: String,
}
