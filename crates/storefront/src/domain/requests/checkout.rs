use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCheckoutRequest {
    #[validate(range(min = 1))]
    #[serde(rename = "order_id")]
    pub order_id: i64,
}
