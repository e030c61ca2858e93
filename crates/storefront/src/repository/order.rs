use crate::{
    abstract_trait::order::repository::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
    domain::requests::order::CreateOrderRecordRequest,
    model::{
        order::{Order as OrderModel, OrderStatus},
        order_item::OrderItem as OrderItemModel,
    },
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(
        &self,
        req: &CreateOrderRecordRequest,
    ) -> Result<OrderModel, RepositoryError> {
        // the order row and every line item commit as one unit or not at all
        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin order transaction: {e:?}");
            RepositoryError::from(e)
        })?;

        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            INSERT INTO orders
                (customer_name, customer_phone, customer_address, total, status, mode, delivery_date, checkout_url)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING order_id, customer_name, customer_phone, customer_address,
                      total, status, mode, delivery_date, checkout_url, created_at
            "#,
        )
        .bind(&req.customer_name)
        .bind(&req.customer_phone)
        .bind(&req.customer_address)
        .bind(req.total)
        .bind(OrderStatus::Created)
        .bind(req.mode)
        .bind(req.delivery_date)
        .bind(&req.checkout_url)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create order for '{}': {err:?}",
                req.customer_name
            );
            RepositoryError::from(err)
        })?;

        for item in &req.items {
            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, product_id, quantity, price)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(order.order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.price)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to create order item (product {}) for order {}: {err:?}",
                    item.product_id, order.order_id
                );
                RepositoryError::from(err)
            })?;
        }

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit order {}: {e:?}", order.order_id);
            RepositoryError::from(e)
        })?;

        info!(
            "✅ Created order ID {} with {} item(s), total {:.2}",
            order.order_id,
            req.items.len(),
            order.total
        );
        Ok(order)
    }
}

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<OrderModel>, RepositoryError> {
        info!("🆔 Fetching order by ID: {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT order_id, customer_name, customer_phone, customer_address,
                   total, status, mode, delivery_date, checkout_url, created_at
            FROM orders
            WHERE order_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(result)
    }

    async fn find_items(&self, order_id: i64) -> Result<Vec<OrderItemModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let items = sqlx::query_as::<_, OrderItemModel>(
            r#"
            SELECT order_item_id, order_id, product_id, quantity, price
            FROM order_items
            WHERE order_id = ?
            ORDER BY order_item_id
            "#,
        )
        .bind(order_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch items for order {order_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(items)
    }
}
