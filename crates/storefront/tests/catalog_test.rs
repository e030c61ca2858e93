mod common;

#[tokio::test]
async fn seed_if_empty_populates_an_empty_catalog() {
    let (pool, di) = common::setup().await;

    let defaults = vec![
        common::product("Baguette", 3.50, true),
        common::product("Sourdough loaf", 6.00, true),
    ];

    let inserted = di
        .product_command
        .seed_if_empty(&defaults)
        .await
        .expect("seed");
    assert_eq!(inserted, 2);
    assert_eq!(common::product_count(&pool).await, 2);
}

#[tokio::test]
async fn seeding_twice_leaves_the_catalog_unchanged() {
    let (pool, di) = common::setup().await;

    let defaults = vec![
        common::product("Baguette", 3.50, true),
        common::product("Sourdough loaf", 6.00, true),
    ];

    di.product_command
        .seed_if_empty(&defaults)
        .await
        .expect("first seed");
    let after_first = common::product_count(&pool).await;

    let inserted = di
        .product_command
        .seed_if_empty(&defaults)
        .await
        .expect("second seed");

    assert_eq!(inserted, 0);
    assert_eq!(common::product_count(&pool).await, after_first);
}

#[tokio::test]
async fn list_active_never_returns_inactive_products() {
    let (_pool, di) = common::setup().await;

    di.product_command
        .seed_if_empty(&[
            common::product("Baguette", 3.50, true),
            common::product("Day-old loaf", 1.00, false),
            common::product("Croissant", 2.25, true),
        ])
        .await
        .expect("seed");

    let products = di.product_query.list_active().await.expect("list");

    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|p| p.name != "Day-old loaf"));
}

#[tokio::test]
async fn listed_products_expose_id_name_and_price() {
    let (_pool, di) = common::setup().await;

    di.product_command
        .seed_if_empty(&[common::product("Baguette", 3.50, true)])
        .await
        .expect("seed");

    let products = di.product_query.list_active().await.expect("list");

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, 1);
    assert_eq!(products[0].name, "Baguette");
    assert_eq!(products[0].price, 3.50);
}
