use crate::{
    domain::requests::order::CreateOrderRecordRequest,
    model::{order::Order, order_item::OrderItem},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, RepositoryError>;
    async fn find_items(&self, order_id: i64) -> Result<Vec<OrderItem>, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Persists the order row and every line item in one transaction.
    async fn create_order(
        &self,
        req: &CreateOrderRecordRequest,
    ) -> Result<Order, RepositoryError>;
}
