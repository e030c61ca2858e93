use crate::{
    abstract_trait::checkout::CheckoutServiceTrait,
    config::CheckoutConfig,
    domain::response::{checkout::CheckoutSession, order::OrderResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::warn;

/// The adapter wired while no payment provider is compiled in. Every order
/// keeps status `created` and a NULL `checkout_url`.
pub struct DisabledCheckout;

impl DisabledCheckout {
    pub fn new(config: &CheckoutConfig) -> Self {
        if config.enabled {
            warn!(
                "⚠️ CHECKOUT_ENABLED is set but no payment provider is built in; checkout stays disabled"
            );
        }

        Self
    }
}

#[async_trait]
impl CheckoutServiceTrait for DisabledCheckout {
    fn is_enabled(&self) -> bool {
        false
    }

    async fn create_session(
        &self,
        order: &OrderResponse,
    ) -> Result<CheckoutSession, ServiceError> {
        Err(ServiceError::CheckoutUnavailable(format!(
            "payment checkout is disabled; order {} was not charged",
            order.id
        )))
    }
}
