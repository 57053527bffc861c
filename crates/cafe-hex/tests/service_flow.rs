use cafe_hex::application::order_service::{OrderCreateRequest, OrderService};
use cafe_hex::application::product_service::ProductService;
use cafe_repo::memory::InMemoryRepo;
use cafe_types::domain::product::{Product, ProductSellingStatus, ProductType};
use cafe_types::ports::{OrderRepository, ProductRepository};

// Menu listing followed by an order, against the in-memory adapter.
#[tokio::test]
async fn list_menu_then_order_flow() {
    let repo = InMemoryRepo::new();
    repo.save_all(vec![
        Product::new(
            "001".into(),
            ProductType::Handmade,
            ProductSellingStatus::Selling,
            "Americano".into(),
            4000,
        )
        .unwrap(),
        Product::new(
            "002".into(),
            ProductType::Bakery,
            ProductSellingStatus::Hold,
            "Croissant".into(),
            3500,
        )
        .unwrap(),
        Product::new(
            "003".into(),
            ProductType::Bottle,
            ProductSellingStatus::StopSelling,
            "Juice".into(),
            3000,
        )
        .unwrap(),
    ])
    .await
    .unwrap();

    let menu = ProductService::new(repo.clone())
        .get_selling_products()
        .await
        .unwrap();
    let numbers: Vec<String> = menu.iter().map(|p| p.product_number.clone()).collect();
    assert_eq!(numbers, vec!["001", "002"]);

    let orders = OrderService::new(repo.clone(), repo.clone());
    let created = orders
        .create_order(
            OrderCreateRequest {
                product_numbers: numbers,
            },
            chrono::Utc::now(),
        )
        .await
        .unwrap();
    assert_eq!(created.total_price, 7500);
    assert_eq!(created.products.len(), 2);

    let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored.order_products.len(), 2);
}
