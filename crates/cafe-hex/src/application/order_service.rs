use crate::application::response::OrderResponse;
use crate::errors::AppError;
use cafe_types::domain::order::{select_products, Order};
use cafe_types::ports::{OrderRepository, ProductRepository};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreateRequest {
    pub product_numbers: Vec<String>,
}

pub struct OrderService<P: ProductRepository, O: OrderRepository> {
    products: P,
    orders: O,
}

impl<P: ProductRepository, O: OrderRepository> OrderService<P, O> {
    pub fn new(products: P, orders: O) -> Self {
        Self { products, orders }
    }

    pub async fn create_order(
        &self,
        request: OrderCreateRequest,
        registered_at: DateTime<Utc>,
    ) -> Result<OrderResponse, AppError> {
        if request.product_numbers.iter().any(|n| n.trim().is_empty()) {
            return Err(AppError::BadRequest("product number empty".into()));
        }

        let mut distinct = request.product_numbers.clone();
        distinct.sort();
        distinct.dedup();

        let catalog = self.products.find_all_by_product_number_in(&distinct).await?;
        let selected = select_products(&request.product_numbers, catalog);
        let order = Order::create(selected, registered_at)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        let order = self.orders.save(order).await?;

        tracing::info!(
            order_id = %order.id,
            requested = request.product_numbers.len(),
            matched = order.order_products.len(),
            total_price = order.total_price,
            "order created"
        );
        Ok(order.into())
    }
}
