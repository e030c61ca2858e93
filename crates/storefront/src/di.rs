use crate::{
    abstract_trait::{
        checkout::DynCheckoutService,
        order::{
            repository::{DynOrderCommandRepository, DynOrderQueryRepository},
            service::{DynOrderCommandService, DynOrderQueryService},
        },
        product::{
            repository::{DynProductCommandRepository, DynProductQueryRepository},
            service::{DynProductCommandService, DynProductQueryService},
        },
    },
    config::CheckoutConfig,
    repository::{
        order::{OrderCommandRepository, OrderQueryRepository},
        product::{ProductCommandRepository, ProductQueryRepository},
    },
    service::{
        checkout::DisabledCheckout,
        order::{OrderCommandService, OrderQueryService},
        product::{ProductCommandService, ProductQueryService},
    },
};
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub order_query: DynOrderQueryService,
    pub order_command: DynOrderCommandService,
    pub checkout: DynCheckoutService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .field("order_query", &"OrderQueryService")
            .field("order_command", &"OrderCommandService")
            .field("checkout", &"CheckoutService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, checkout_config: &CheckoutConfig) -> Self {
        let product_query_repo: DynProductQueryRepository =
            Arc::new(ProductQueryRepository::new(pool.clone()));
        let product_command_repo: DynProductCommandRepository =
            Arc::new(ProductCommandRepository::new(pool.clone()));
        let order_query_repo: DynOrderQueryRepository =
            Arc::new(OrderQueryRepository::new(pool.clone()));
        let order_command_repo: DynOrderCommandRepository =
            Arc::new(OrderCommandRepository::new(pool));

        let checkout: DynCheckoutService = Arc::new(DisabledCheckout::new(checkout_config));

        let product_query: DynProductQueryService =
            Arc::new(ProductQueryService::new(product_query_repo.clone()));

        let product_command: DynProductCommandService = Arc::new(ProductCommandService::new(
            product_query_repo.clone(),
            product_command_repo,
        ));

        let order_query: DynOrderQueryService = Arc::new(OrderQueryService::new(order_query_repo));

        let order_command: DynOrderCommandService = Arc::new(OrderCommandService::new(
            product_query_repo,
            order_command_repo,
        ));

        Self {
            product_query,
            product_command,
            order_query,
            order_command,
            checkout,
        }
    }
}
