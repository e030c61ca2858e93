use crate::domain::{requests::product::CreateProductRequest, response::product::ProductResponse};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;
pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    /// Products visible to customers, in catalog order.
    async fn list_active(&self) -> Result<Vec<ProductResponse>, ServiceError>;
}

#[async_trait]
pub trait ProductCommandServiceTrait {
    /// Inserts `defaults` only when the catalog holds zero products.
    /// Returns the number of rows inserted; idempotent across restarts.
    async fn seed_if_empty(&self, defaults: &[CreateProductRequest]) -> Result<u64, ServiceError>;
}
