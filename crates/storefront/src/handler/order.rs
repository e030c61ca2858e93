use crate::{
    abstract_trait::order::service::{DynOrderCommandService, DynOrderQueryService},
    domain::{
        requests::order::CreateOrderRequest,
        response::order::{OrderCreatedResponse, OrderResponse},
    },
    middleware::validate::ValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/orders",
    tag = "Order",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = OrderCreatedResponse),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderCommandService>,
    ValidatedJson(body): ValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_order(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = "Order",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order details", body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderQueryService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/orders", post(create_order))
        .route("/orders/{id}", get(get_order))
        .layer(Extension(app_state.di_container.order_command.clone()))
        .layer(Extension(app_state.di_container.order_query.clone()))
}
