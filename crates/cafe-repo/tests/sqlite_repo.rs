#![cfg(feature = "sqlite")]

use cafe_repo::sqlite::SqliteRepo;
use cafe_types::domain::order::{Order, OrderStatus};
use cafe_types::domain::product::{Product, ProductSellingStatus, ProductType};
use cafe_types::ports::{OrderRepository, ProductRepository};
use std::path::PathBuf;
use uuid::Uuid;

fn temp_db_url() -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut path = PathBuf::from(dir.path());
    path.push(format!("cafe-{}.db", Uuid::new_v4()));
    let url = format!("sqlite://{}", path.display());
    (dir, url)
}

fn product(number: &str, name: &str, status: ProductSellingStatus, price: i64) -> Product {
    Product::new(
        number.into(),
        ProductType::Handmade,
        status,
        name.into(),
        price,
    )
    .unwrap()
}

#[tokio::test]
async fn sqlite_repo_filters_by_selling_status() {
    let (_dir, url) = temp_db_url();
    let repo = SqliteRepo::new(&url).await.unwrap();
    repo.save_all(vec![
        product("001", "Americano", ProductSellingStatus::Selling, 4000),
        product("002", "Latte", ProductSellingStatus::Selling, 4000),
        product("003", "Bagel", ProductSellingStatus::StopSelling, 4000),
    ])
    .await
    .unwrap();

    let shown = repo
        .find_all_by_selling_status_in(&ProductSellingStatus::for_display())
        .await
        .unwrap();
    let rows: Vec<_> = shown
        .iter()
        .map(|p| (p.product_number.as_str(), p.name.as_str(), p.selling_status))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("001", "Americano", ProductSellingStatus::Selling),
            ("002", "Latte", ProductSellingStatus::Selling),
        ]
    );
}

#[tokio::test]
async fn sqlite_repo_round_trips_products() {
    let (_dir, url) = temp_db_url();
    let repo = SqliteRepo::new(&url).await.unwrap();
    let original = product("001", "Americano", ProductSellingStatus::Hold, 4000);
    repo.save_all(vec![original.clone()]).await.unwrap();

    let found = repo
        .find_all_by_product_number_in(&["001".to_string()])
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, original.id);
    assert_eq!(found[0].product_type, ProductType::Handmade);
    assert_eq!(found[0].selling_status, ProductSellingStatus::Hold);
    assert_eq!(found[0].price, 4000);

    let empty = repo.find_all_by_product_number_in(&[]).await.unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn sqlite_repo_saves_order_with_lines() {
    let (_dir, url) = temp_db_url();
    let repo = SqliteRepo::new(&url).await.unwrap();
    let products = repo
        .save_all(vec![
            product("001", "Americano", ProductSellingStatus::Selling, 4000),
            product("002", "Latte", ProductSellingStatus::Selling, 4500),
        ])
        .await
        .unwrap();

    let order = Order::create(products, chrono::Utc::now()).unwrap();
    repo.save(order.clone()).await.unwrap();

    let fetched = repo.find_by_id(order.id).await.unwrap().unwrap();
    assert_eq!(fetched.status, OrderStatus::Init);
    assert_eq!(fetched.total_price, 8500);
    let numbers: Vec<_> = fetched
        .products()
        .map(|p| p.product_number.as_str())
        .collect();
    assert_eq!(numbers, vec!["001", "002"]);
    assert_eq!(fetched.order_products[0].id, order.order_products[0].id);

    let missing = repo.find_by_id(Uuid::new_v4()).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn sqlite_repo_reopens_existing_database() {
    let (_dir, url) = temp_db_url();
    {
        let repo = SqliteRepo::new(&url).await.unwrap();
        repo.save_all(vec![product(
            "001",
            "Americano",
            ProductSellingStatus::Selling,
            4000,
        )])
        .await
        .unwrap();
    }
    let reopened = SqliteRepo::new(&url).await.unwrap();
    let found = reopened
        .find_all_by_product_number_in(&["001".to_string()])
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn sqlite_repo_keeps_insertion_order_for_duplicate_numbers() {
    let (_dir, url) = temp_db_url();
    let repo = SqliteRepo::new(&url).await.unwrap();
    repo.save_all(vec![
        product("001", "Americano", ProductSellingStatus::Selling, 4000),
        product("002", "Latte", ProductSellingStatus::Selling, 4500),
        product("001", "Americano", ProductSellingStatus::Selling, 4100),
    ])
    .await
    .unwrap();

    let found = repo
        .find_all_by_product_number_in(&["001".to_string()])
        .await
        .unwrap();
    let prices: Vec<_> = found.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![4000, 4100]);
}

#[tokio::test]
async fn sqlite_repo_handles_requests_beyond_the_variable_limit() {
    let (_dir, url) = temp_db_url();
    let repo = SqliteRepo::new(&url).await.unwrap();
    repo.save_all(vec![
        product("002", "Latte", ProductSellingStatus::Selling, 4500),
        product("001", "Americano", ProductSellingStatus::Selling, 4000),
    ])
    .await
    .unwrap();

    // "001-*" sorts between "001" and "002", so the two hits land in
    // different lookup batches.
    let mut numbers: Vec<String> = (0..40_000).map(|i| format!("001-{i:05}")).collect();
    numbers.push("002".to_string());
    numbers.push("001".to_string());

    let found = repo.find_all_by_product_number_in(&numbers).await.unwrap();
    let picked: Vec<_> = found.iter().map(|p| p.product_number.as_str()).collect();
    assert_eq!(picked, vec!["002", "001"]);
}
