mod checkout;
mod order;
mod product;

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{Json, extract::DefaultBodyLimit, routing::get};
use serde_json::json;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer, limit::RequestBodyLimitLayer, services::ServeDir, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::checkout::checkout_routes;
pub use self::order::order_routes;
pub use self::product::product_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        product::list_products,
        order::create_order,
        order::get_order,
        checkout::create_checkout_session,
    ),
    tags(
        (name = "Product", description = "Catalog endpoints"),
        (name = "Order", description = "Order endpoints"),
        (name = "Checkout", description = "Payment checkout endpoints"),
    )
)]
struct ApiDoc;

async fn root() -> Json<serde_json::Value> {
    Json(json!({ "ok": true, "service": "breadbox-storefront" }))
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, static_dir: &str, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/", get(root))
            .merge(product_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()))
            .merge(checkout_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(1024 * 1024))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
            .fallback_service(ServeDir::new(static_dir));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server failed")?;

        Ok(())
    }
}
