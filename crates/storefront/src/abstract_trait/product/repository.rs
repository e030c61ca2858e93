use crate::{domain::requests::product::CreateProductRequest, model::product::Product};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;
pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_active(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, RepositoryError>;
    async fn count(&self) -> Result<i64, RepositoryError>;
}

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn insert(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError>;
}
