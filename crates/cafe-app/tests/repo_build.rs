use cafe_hex::application::order_service::{OrderCreateRequest, OrderService};
use cafe_repo::{build_repo, Repo};
use cafe_types::domain::order::Order;
use cafe_types::domain::product::{Product, ProductSellingStatus, ProductType};
use cafe_types::ports::{OrderRepository, ProductRepository};

#[tokio::test]
async fn builds_repo_and_persists_an_order() {
    // Use a temp DB path for isolation.
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("cafe-test.db");
    let url = format!("sqlite://{}", db_path.display());

    let repo: Repo = build_repo(Some(&url)).await.expect("build repo");
    let shown = repo
        .find_all_by_selling_status_in(&ProductSellingStatus::for_display())
        .await
        .expect("list");
    assert!(shown.is_empty());

    let saved = repo
        .save_all(vec![Product::new(
            "001".into(),
            ProductType::Handmade,
            ProductSellingStatus::Selling,
            "Americano".into(),
            4000,
        )
        .unwrap()])
        .await
        .expect("save products");
    let order = repo
        .save(Order::create(saved, chrono::Utc::now()).unwrap())
        .await
        .expect("save order");
    let found = repo.find_by_id(order.id).await.expect("find").unwrap();
    assert_eq!(found.total_price, 4000);
}

#[tokio::test]
async fn order_over_sqlite_takes_first_catalog_entry() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("cafe-order.db").display());
    let repo: Repo = build_repo(Some(&url)).await.expect("build repo");

    let product = |number: &str, price: i64| {
        Product::new(
            number.into(),
            ProductType::Handmade,
            ProductSellingStatus::Selling,
            "Menu".into(),
            price,
        )
        .unwrap()
    };
    repo.save_all(vec![
        product("001", 4000),
        product("001", 4100),
        product("001", 4200),
    ])
    .await
    .expect("save products");

    let svc = OrderService::new(repo.clone(), repo.clone());
    let res = svc
        .create_order(
            OrderCreateRequest {
                product_numbers: vec!["001".into(), "002".into(), "003".into()],
            },
            chrono::Utc::now(),
        )
        .await
        .expect("create order");
    assert_eq!(res.total_price, 4000);
    assert_eq!(res.products.len(), 1);

    let stored = repo.find_by_id(res.id).await.expect("find").unwrap();
    assert_eq!(stored.total_price, 4000);
}
