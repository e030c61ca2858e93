use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::{ProductCommandServiceTrait, ProductQueryServiceTrait},
    },
    domain::{requests::product::CreateProductRequest, response::product::ProductResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn list_active(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        info!("🟢 Listing active products");

        let products = self.query.find_active().await.map_err(|e| {
            error!("❌ Failed to fetch active products: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!("✅ Found {} active products", products.len());

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }
}

#[derive(Clone)]
pub struct ProductCommandService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(query: DynProductQueryRepository, command: DynProductCommandRepository) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn seed_if_empty(&self, defaults: &[CreateProductRequest]) -> Result<u64, ServiceError> {
        let existing = self.query.count().await.map_err(ServiceError::Repo)?;

        if existing > 0 {
            info!("🌱 Catalog already holds {existing} products, skipping seed");
            return Ok(0);
        }

        let mut inserted = 0u64;
        for product in defaults {
            self.command.insert(product).await.map_err(|e| {
                error!("❌ Failed to seed product '{}': {e:?}", product.name);
                ServiceError::Repo(e)
            })?;
            inserted += 1;
        }

        info!("🌱 Seeded catalog with {inserted} default products");
        Ok(inserted)
    }
}
