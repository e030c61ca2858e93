use crate::domain::{
    requests::order::CreateOrderRequest,
    response::order::{OrderCreatedResponse, OrderResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_by_id(&self, id: i64) -> Result<OrderResponse, ServiceError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<OrderCreatedResponse, ServiceError>;
}
