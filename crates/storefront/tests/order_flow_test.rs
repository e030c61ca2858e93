mod common;

use chrono::{Datelike, Weekday};
use shared::errors::ServiceError;
use storefront::{
    domain::requests::order::{CreateOrderItemRequest, CreateOrderRequest},
    model::order::{FulfillmentMode, OrderStatus},
};

fn order_request(items: Vec<CreateOrderItemRequest>) -> CreateOrderRequest {
    CreateOrderRequest {
        customer_name: "Ana Souza".to_string(),
        customer_phone: "555-0100".to_string(),
        customer_address: "Rua das Flores 12".to_string(),
        mode: FulfillmentMode::Pickup,
        items,
    }
}

fn item(product_id: i64, quantity: i64) -> CreateOrderItemRequest {
    CreateOrderItemRequest {
        product_id,
        quantity,
    }
}

#[tokio::test]
async fn create_order_totals_current_catalog_prices() {
    let (_pool, di) = common::setup().await;

    di.product_command
        .seed_if_empty(&[common::product("Burger", 25.00, true)])
        .await
        .expect("seed");

    let created = di
        .order_command
        .create_order(&order_request(vec![item(1, 2)]))
        .await
        .expect("order");

    assert_eq!(created.total, 50.00);
    assert_eq!(created.status, OrderStatus::Created);
    assert_eq!(created.order_id, 1);
    assert!(created.checkout_url.is_none());
}

#[tokio::test]
async fn create_order_sums_across_distinct_products() {
    let (pool, di) = common::setup().await;

    di.product_command
        .seed_if_empty(&[
            common::product("Baguette", 3.50, true),
            common::product("Croissant", 2.25, true),
        ])
        .await
        .expect("seed");

    let created = di
        .order_command
        .create_order(&order_request(vec![item(1, 2), item(2, 4)]))
        .await
        .expect("order");

    assert_eq!(created.total, 3.50 * 2.0 + 2.25 * 4.0);
    assert_eq!(common::order_item_count(&pool).await, 2);
}

#[tokio::test]
async fn empty_cart_is_rejected_and_nothing_is_persisted() {
    let (pool, di) = common::setup().await;

    di.product_command
        .seed_if_empty(&[common::product("Burger", 25.00, true)])
        .await
        .expect("seed");

    let err = di
        .order_command
        .create_order(&order_request(vec![]))
        .await
        .expect_err("empty cart must fail");

    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(common::order_count(&pool).await, 0);
}

#[tokio::test]
async fn unknown_product_is_rejected() {
    let (pool, di) = common::setup().await;

    di.product_command
        .seed_if_empty(&[common::product("Burger", 25.00, true)])
        .await
        .expect("seed");

    let err = di
        .order_command
        .create_order(&order_request(vec![item(999, 1)]))
        .await
        .expect_err("unknown product must fail");

    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(common::order_count(&pool).await, 0);
}

#[tokio::test]
async fn one_bad_item_rejects_the_entire_order() {
    let (pool, di) = common::setup().await;

    di.product_command
        .seed_if_empty(&[common::product("Burger", 25.00, true)])
        .await
        .expect("seed");

    // one valid item plus one unknown reference: zero rows, not a partial order
    let err = di
        .order_command
        .create_order(&order_request(vec![item(1, 2), item(999, 1)]))
        .await
        .expect_err("mixed order must fail");

    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(common::order_count(&pool).await, 0);
    assert_eq!(common::order_item_count(&pool).await, 0);
}

#[tokio::test]
async fn inactive_product_is_rejected() {
    let (pool, di) = common::setup().await;

    di.product_command
        .seed_if_empty(&[
            common::product("Burger", 25.00, true),
            common::product("Discontinued roll", 2.00, false),
        ])
        .await
        .expect("seed");

    let err = di
        .order_command
        .create_order(&order_request(vec![item(2, 1)]))
        .await
        .expect_err("inactive product must fail");

    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(common::order_count(&pool).await, 0);
}

#[tokio::test]
async fn non_positive_quantity_is_rejected() {
    let (pool, di) = common::setup().await;

    di.product_command
        .seed_if_empty(&[common::product("Burger", 25.00, true)])
        .await
        .expect("seed");

    let err = di
        .order_command
        .create_order(&order_request(vec![item(1, 0)]))
        .await
        .expect_err("zero quantity must fail");

    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(common::order_count(&pool).await, 0);
}

#[tokio::test]
async fn blank_customer_fields_are_rejected() {
    let (pool, di) = common::setup().await;

    di.product_command
        .seed_if_empty(&[common::product("Burger", 25.00, true)])
        .await
        .expect("seed");

    let mut request = order_request(vec![item(1, 1)]);
    request.customer_name = "   ".to_string();

    let err = di
        .order_command
        .create_order(&request)
        .await
        .expect_err("blank name must fail");

    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(common::order_count(&pool).await, 0);
}

#[tokio::test]
async fn totals_are_snapshotted_against_later_price_changes() {
    let (pool, di) = common::setup().await;

    di.product_command
        .seed_if_empty(&[common::product("Burger", 25.00, true)])
        .await
        .expect("seed");

    let created = di
        .order_command
        .create_order(&order_request(vec![item(1, 2)]))
        .await
        .expect("order");

    sqlx::query("UPDATE products SET price = 99.00 WHERE product_id = 1")
        .execute(&pool)
        .await
        .expect("price change");

    let fetched = di
        .order_query
        .find_by_id(created.order_id)
        .await
        .expect("lookup");

    assert_eq!(fetched.total, 50.00);
    assert_eq!(fetched.items[0].price, 25.00);
}

#[tokio::test]
async fn get_order_echoes_customer_info_and_items() {
    let (_pool, di) = common::setup().await;

    di.product_command
        .seed_if_empty(&[common::product("Burger", 25.00, true)])
        .await
        .expect("seed");

    let created = di
        .order_command
        .create_order(&order_request(vec![item(1, 3)]))
        .await
        .expect("order");

    let fetched = di
        .order_query
        .find_by_id(created.order_id)
        .await
        .expect("lookup");

    assert_eq!(fetched.id, created.order_id);
    assert_eq!(fetched.customer_name, "Ana Souza");
    assert_eq!(fetched.customer_phone, "555-0100");
    assert_eq!(fetched.customer_address, "Rua das Flores 12");
    assert_eq!(fetched.items.len(), 1);
    assert_eq!(fetched.items[0].product_id, 1);
    assert_eq!(fetched.items[0].quantity, 3);
    assert_eq!(fetched.status, OrderStatus::Created);
}

#[tokio::test]
async fn missing_order_lookup_fails_with_not_found() {
    let (_pool, di) = common::setup().await;

    let err = di
        .order_query
        .find_by_id(42)
        .await
        .expect_err("missing order must fail");

    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn delivery_orders_are_scheduled_for_a_friday() {
    let (_pool, di) = common::setup().await;

    di.product_command
        .seed_if_empty(&[common::product("Delivery box", 14.00, true)])
        .await
        .expect("seed");

    let mut request = order_request(vec![item(1, 1)]);
    request.mode = FulfillmentMode::Delivery;

    let created = di.order_command.create_order(&request).await.expect("order");

    let date = created.delivery_date.expect("delivery orders carry a date");
    assert_eq!(date.weekday(), Weekday::Fri);
}

#[tokio::test]
async fn pickup_orders_have_no_delivery_date() {
    let (_pool, di) = common::setup().await;

    di.product_command
        .seed_if_empty(&[common::product("Burger", 25.00, true)])
        .await
        .expect("seed");

    let created = di
        .order_command
        .create_order(&order_request(vec![item(1, 1)]))
        .await
        .expect("order");

    assert!(created.delivery_date.is_none());
}

#[tokio::test]
async fn order_ids_are_never_reused() {
    let (_pool, di) = common::setup().await;

    di.product_command
        .seed_if_empty(&[common::product("Burger", 25.00, true)])
        .await
        .expect("seed");

    let first = di
        .order_command
        .create_order(&order_request(vec![item(1, 1)]))
        .await
        .expect("first order");
    let second = di
        .order_command
        .create_order(&order_request(vec![item(1, 1)]))
        .await
        .expect("second order");

    assert!(second.order_id > first.order_id);
}
