#![allow(dead_code)]

use shared::config::{ConnectionManager, ConnectionPool};
use storefront::{
    MIGRATOR, config::CheckoutConfig, di::DependenciesInject,
    domain::requests::product::CreateProductRequest,
};

/// Fresh in-memory database with the schema applied and the full service
/// stack wired against it.
pub async fn setup() -> (ConnectionPool, DependenciesInject) {
    let pool = ConnectionManager::new_memory_pool()
        .await
        .expect("in-memory pool");

    MIGRATOR.run(&pool).await.expect("migrations");

    let checkout = CheckoutConfig {
        enabled: false,
        stripe_secret: String::new(),
        success_url: "http://127.0.0.1:8000/success".to_string(),
        cancel_url: "http://127.0.0.1:8000/cancelled".to_string(),
    };

    let di = DependenciesInject::new(pool.clone(), &checkout);

    (pool, di)
}

pub fn product(name: &str, price: f64, active: bool) -> CreateProductRequest {
    CreateProductRequest {
        name: name.to_string(),
        price,
        active,
    }
}

pub async fn product_count(pool: &ConnectionPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await
        .expect("product count")
}

pub async fn order_count(pool: &ConnectionPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders")
        .fetch_one(pool)
        .await
        .expect("order count")
}

pub async fn order_item_count(pool: &ConnectionPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM order_items")
        .fetch_one(pool)
        .await
        .expect("order item count")
}
