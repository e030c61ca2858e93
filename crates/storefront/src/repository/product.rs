use crate::{
    abstract_trait::product::repository::{
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
    },
    domain::requests::product::CreateProductRequest,
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_active(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("🔍 Fetching active products");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        let products = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT product_id, name, price, active, created_at
            FROM products
            WHERE active = 1
            ORDER BY product_id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch active products: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(products)
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<ProductModel>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // SQLite has no array binding; expand one placeholder per id
        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!(
            "SELECT product_id, name, price, active, created_at \
             FROM products WHERE product_id IN ({placeholders})"
        );

        let mut query = sqlx::query_as::<_, ProductModel>(&sql);
        for id in ids {
            query = query.bind(id);
        }

        let products = query.fetch_all(&mut *conn).await.map_err(|e| {
            error!("❌ Failed to fetch products {ids:?}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(products)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(count)
    }
}

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn insert(&self, req: &CreateProductRequest) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (name, price, active)
            VALUES (?, ?, ?)
            RETURNING product_id, name, price, active, created_at
            "#,
        )
        .bind(&req.name)
        .bind(req.price)
        .bind(req.active)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to insert product '{}': {err:?}", req.name);
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Inserted product '{}' (ID: {})",
            product.name, product.product_id
        );
        Ok(product)
    }
}
