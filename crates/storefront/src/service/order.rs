use crate::{
    abstract_trait::{
        order::{
            repository::{DynOrderCommandRepository, DynOrderQueryRepository},
            service::{OrderCommandServiceTrait, OrderQueryServiceTrait},
        },
        product::repository::DynProductQueryRepository,
    },
    domain::{
        requests::order::{
            CreateOrderItemRecordRequest, CreateOrderRecordRequest, CreateOrderRequest,
        },
        response::order::{OrderCreatedResponse, OrderResponse},
    },
    model::{order::FulfillmentMode, product::Product as ProductModel},
    utils::next_friday,
};
use async_trait::async_trait;
use chrono::Local;
use shared::errors::ServiceError;
use std::collections::HashMap;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct OrderCommandService {
    products: DynProductQueryRepository,
    command: DynOrderCommandRepository,
}

impl OrderCommandService {
    pub fn new(products: DynProductQueryRepository, command: DynOrderCommandRepository) -> Self {
        Self { products, command }
    }

    fn validate(req: &CreateOrderRequest) -> Result<(), ServiceError> {
        let mut errors = Vec::new();

        if req.customer_name.trim().is_empty() {
            errors.push("customer_name must not be empty".to_string());
        }
        if req.customer_phone.trim().is_empty() {
            errors.push("customer_phone must not be empty".to_string());
        }
        if req.customer_address.trim().is_empty() {
            errors.push("customer_address must not be empty".to_string());
        }
        if req.items.is_empty() {
            errors.push("items must not be empty".to_string());
        }
        for item in &req.items {
            if item.quantity <= 0 {
                errors.push(format!(
                    "quantity for product {} must be positive",
                    item.product_id
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::Validation(errors))
        }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<OrderCreatedResponse, ServiceError> {
        info!(
            "🏗️ Creating order for '{}' ({} item(s))",
            req.customer_name,
            req.items.len()
        );

        Self::validate(req)?;

        let ids = {
            let mut ids: Vec<i64> = req.items.iter().map(|item| item.product_id).collect();
            ids.sort_unstable();
            ids.dedup();
            ids
        };

        let catalog: HashMap<i64, ProductModel> = self
            .products
            .find_by_ids(&ids)
            .await
            .map_err(|e| {
                error!("❌ Failed to price order against the catalog: {e:?}");
                ServiceError::Repo(e)
            })?
            .into_iter()
            .map(|product| (product.product_id, product))
            .collect();

        // prices come from the catalog at this instant, never from the client
        let mut total = 0.0;
        let mut items = Vec::with_capacity(req.items.len());

        for item in &req.items {
            let product = catalog
                .get(&item.product_id)
                .filter(|product| product.active)
                .ok_or_else(|| {
                    warn!(
                        "⚠️ Order references unknown or inactive product {}",
                        item.product_id
                    );
                    ServiceError::Validation(vec![format!(
                        "product {} does not exist or is not available",
                        item.product_id
                    )])
                })?;

            total += product.price * item.quantity as f64;
            items.push(CreateOrderItemRecordRequest {
                product_id: product.product_id,
                quantity: item.quantity,
                price: product.price,
            });
        }

        let delivery_date = match req.mode {
            FulfillmentMode::Delivery => Some(next_friday(Local::now().date_naive())),
            FulfillmentMode::Pickup => None,
        };

        let record = CreateOrderRecordRequest {
            customer_name: req.customer_name.trim().to_string(),
            customer_phone: req.customer_phone.trim().to_string(),
            customer_address: req.customer_address.trim().to_string(),
            total,
            mode: req.mode,
            delivery_date,
            // only a payment adapter fills this in; none is wired by default
            checkout_url: None,
            items,
        };

        let order = self.command.create_order(&record).await.map_err(|e| {
            error!("❌ Failed to persist order: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!("✅ Order {} created, total {:.2}", order.order_id, order.total);

        Ok(OrderCreatedResponse::from(order))
    }
}

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_by_id(&self, id: i64) -> Result<OrderResponse, ServiceError> {
        info!("🆔 Finding order by ID: {id}");

        let order = self
            .query
            .find_by_id(id)
            .await
            .map_err(ServiceError::Repo)?
            .ok_or_else(|| {
                warn!("⚠️ Order not found: {id}");
                ServiceError::NotFound(format!("order {id} not found"))
            })?;

        let items = self.query.find_items(id).await.map_err(ServiceError::Repo)?;

        info!("✅ Found order {id} with {} item(s)", items.len());

        Ok(OrderResponse::from_parts(order, items))
    }
}
