mod common;

use shared::errors::ServiceError;
use storefront::{
    domain::requests::order::{CreateOrderItemRequest, CreateOrderRequest},
    model::order::{FulfillmentMode, OrderStatus},
};

#[tokio::test]
async fn default_adapter_reports_disabled() {
    let (_pool, di) = common::setup().await;

    assert!(!di.checkout.is_enabled());
}

#[tokio::test]
async fn checkout_session_is_unavailable_and_order_stays_created() {
    let (_pool, di) = common::setup().await;

    di.product_command
        .seed_if_empty(&[common::product("Burger", 25.00, true)])
        .await
        .expect("seed");

    let created = di
        .order_command
        .create_order(&CreateOrderRequest {
            customer_name: "Ana Souza".to_string(),
            customer_phone: "555-0100".to_string(),
            customer_address: "Rua das Flores 12".to_string(),
            mode: FulfillmentMode::Pickup,
            items: vec![CreateOrderItemRequest {
                product_id: 1,
                quantity: 1,
            }],
        })
        .await
        .expect("order");

    let order = di
        .order_query
        .find_by_id(created.order_id)
        .await
        .expect("lookup");

    let err = di
        .checkout
        .create_session(&order)
        .await
        .expect_err("disabled adapter must refuse");
    assert!(matches!(err, ServiceError::CheckoutUnavailable(_)));

    let refetched = di
        .order_query
        .find_by_id(created.order_id)
        .await
        .expect("second lookup");
    assert_eq!(refetched.status, OrderStatus::Created);
    assert!(refetched.checkout_url.is_none());
}
