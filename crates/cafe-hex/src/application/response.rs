use cafe_types::domain::order::Order;
use cafe_types::domain::product::{Product, ProductSellingStatus, ProductType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductResponse {
    pub id: Uuid,
    pub product_number: String,
    pub product_type: ProductType,
    pub selling_status: ProductSellingStatus,
    pub name: String,
    pub price: i64,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            product_number: p.product_number,
            product_type: p.product_type,
            selling_status: p.selling_status,
            name: p.name,
            price: p.price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderResponse {
    pub id: Uuid,
    pub total_price: i64,
    pub registered_at: DateTime<Utc>,
    pub products: Vec<ProductResponse>,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            total_price: o.total_price,
            registered_at: o.registered_at,
            products: o
                .order_products
                .into_iter()
                .map(|line| line.product.into())
                .collect(),
        }
    }
}
