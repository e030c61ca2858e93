use crate::domain::response::{checkout::CheckoutSession, order::OrderResponse};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCheckoutService = Arc<dyn CheckoutServiceTrait + Send + Sync>;

/// Seam for a hosted payment-checkout provider. The implementation shipped
/// by default is permanently disabled; see `service::checkout`.
#[async_trait]
pub trait CheckoutServiceTrait {
    fn is_enabled(&self) -> bool;

    async fn create_session(
        &self,
        order: &OrderResponse,
    ) -> Result<CheckoutSession, ServiceError>;
}
