use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(range(min = 0.0))]
    pub price: f64,

    pub active: bool,
}
