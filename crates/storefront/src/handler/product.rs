use crate::{
    abstract_trait::product::service::DynProductQueryService,
    domain::response::product::ProductResponse, state::AppState,
};
use axum::{
    Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::get,
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/products",
    tag = "Product",
    responses(
        (status = 200, description = "Products visible to customers", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_products(
    Extension(service): Extension<DynProductQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let products = service.list_active().await?;
    Ok((StatusCode::OK, Json(products)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/products", get(list_products))
        .layer(Extension(app_state.di_container.product_query.clone()))
}
