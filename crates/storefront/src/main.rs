use anyhow::{Context, Result};
use shared::{config::ConnectionManager, utils::init_logger};
use storefront::{
    MIGRATOR, config::Config, domain::requests::product::CreateProductRequest,
    handler::AppRouter, state::AppState,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    init_logger("storefront");

    let config = Config::init().context("Failed to load configuration")?;

    info!("🚀 Starting storefront initialization...");

    let pool = ConnectionManager::new_pool(&config.database_path)
        .await
        .context("Failed to initialize database pool")?;

    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    let state = AppState::new(pool, &config);

    let seeded = state
        .di_container
        .product_command
        .seed_if_empty(&default_catalog())
        .await
        .context("Failed to seed product catalog")?;

    if seeded > 0 {
        info!("🌱 Inserted {seeded} default products");
    }

    AppRouter::serve(config.port, &config.static_dir, state)
        .await
        .context("Failed to start server")?;

    info!("✅ Storefront shutdown complete");

    Ok(())
}

/// Catalog inserted on the very first start, when the products table is empty.
fn default_catalog() -> Vec<CreateProductRequest> {
    vec![
        CreateProductRequest {
            name: "Vacuum-packed bag of 10 French rolls (store pickup)".to_string(),
            price: 5.00,
            active: true,
        },
        CreateProductRequest {
            name: "Vacuum-packed delivery box of 20 French rolls (2x10)".to_string(),
            price: 14.00,
            active: true,
        },
    ]
}
