use crate::{
    abstract_trait::{checkout::DynCheckoutService, order::service::DynOrderQueryService},
    domain::{requests::checkout::CreateCheckoutRequest, response::checkout::CheckoutSession},
    middleware::validate::ValidatedJson,
    state::AppState,
};
use axum::{
    Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::post,
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/checkout",
    tag = "Checkout",
    request_body = CreateCheckoutRequest,
    responses(
        (status = 200, description = "Hosted checkout session", body = CheckoutSession),
        (status = 404, description = "Order not found"),
        (status = 503, description = "Checkout is disabled")
    )
)]
pub async fn create_checkout_session(
    Extension(orders): Extension<DynOrderQueryService>,
    Extension(checkout): Extension<DynCheckoutService>,
    ValidatedJson(body): ValidatedJson<CreateCheckoutRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let order = orders.find_by_id(body.order_id).await?;

    if !checkout.is_enabled() {
        return Err(HttpError::ServiceUnavailable(
            "payment checkout is disabled".to_string(),
        ));
    }

    let session = checkout.create_session(&order).await?;
    Ok((StatusCode::OK, Json(session)))
}

pub fn checkout_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/checkout", post(create_checkout_session))
        .layer(Extension(app_state.di_container.order_query.clone()))
        .layer(Extension(app_state.di_container.checkout.clone()))
}
