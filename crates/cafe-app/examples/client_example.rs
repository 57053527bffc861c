///  To run :
///  cargo r --example client_example
use cafe_client::CafeClient;
use cafe_hex::application::order_service::OrderService;
use cafe_hex::application::product_service::ProductService;
use cafe_hex::inbound::http::{HttpServer, HttpServerConfig};
use cafe_repo::build_repo;
use cafe_types::domain::product::{Product, ProductSellingStatus, ProductType};
use cafe_types::ports::ProductRepository;
use tempfile::tempdir;

fn find_free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let port = find_free_port();
    let addr = format!("http://127.0.0.1:{port}/");

    // Use a temp file-backed SQLite DB so multiple connections see the same data.
    let tmp = tempdir()?;
    let db_path = tmp.path().join("cafe.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let repo = build_repo(Some(&db_url)).await?;
    repo.save_all(vec![
        Product::new(
            "001".into(),
            ProductType::Handmade,
            ProductSellingStatus::Selling,
            "Americano".into(),
            4000,
        )?,
        Product::new(
            "002".into(),
            ProductType::Handmade,
            ProductSellingStatus::Hold,
            "Latte".into(),
            4500,
        )?,
        Product::new(
            "003".into(),
            ProductType::Bakery,
            ProductSellingStatus::StopSelling,
            "Scone".into(),
            3500,
        )?,
    ])
    .await?;

    let server = HttpServer::new(
        ProductService::new(repo.clone()),
        OrderService::new(repo.clone(), repo),
        HttpServerConfig {
            host: "127.0.0.1".into(),
            port: port.to_string(),
        },
    )
    .await?;

    let handle = tokio::spawn(async move {
        server.run().await.expect("server run");
    });
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let client = CafeClient::new(&addr)?;
    let menu = client.get_selling_products().await?;
    for p in &menu {
        println!("{} {} {} ({:?})", p.product_number, p.name, p.price, p.selling_status);
    }
    assert_eq!(menu.len(), 2);

    let order = client.create_order(["001", "002", "001", "404"]).await?;
    println!(
        "Created order id={} total={} items={}",
        order.id,
        order.total_price,
        order.products.len()
    );
    assert_eq!(order.total_price, 8500);

    handle.abort();
    Ok(())
}
