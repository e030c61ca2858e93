use crate::model::product::Product as ProductModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

// model to response
impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.product_id,
            name: value.name,
            price: value.price,
        }
    }
}
