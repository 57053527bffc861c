use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::product::{ParseEnumError, Product};
use crate::domain::timestamps::Timestamps;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Init,
    Canceled,
    PaymentCompleted,
    PaymentFailed,
    Received,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Init => "INIT",
            OrderStatus::Canceled => "CANCELED",
            OrderStatus::PaymentCompleted => "PAYMENT_COMPLETED",
            OrderStatus::PaymentFailed => "PAYMENT_FAILED",
            OrderStatus::Received => "RECEIVED",
            OrderStatus::Completed => "COMPLETED",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INIT" => Ok(OrderStatus::Init),
            "CANCELED" => Ok(OrderStatus::Canceled),
            "PAYMENT_COMPLETED" => Ok(OrderStatus::PaymentCompleted),
            "PAYMENT_FAILED" => Ok(OrderStatus::PaymentFailed),
            "RECEIVED" => Ok(OrderStatus::Received),
            "COMPLETED" => Ok(OrderStatus::Completed),
            other => Err(ParseEnumError {
                kind: "order status",
                value: other.to_string(),
            }),
        }
    }
}

/// One line of an order, pointing at exactly one catalog product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderProduct {
    pub id: Uuid,
    pub product: Product,
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub id: Uuid,
    pub status: OrderStatus,
    pub total_price: i64,
    pub registered_at: DateTime<Utc>,
    pub order_products: Vec<OrderProduct>,
    pub timestamps: Timestamps,
}

impl Order {
    pub fn create(products: Vec<Product>, registered_at: DateTime<Utc>) -> anyhow::Result<Self> {
        let total_price = products
            .iter()
            .try_fold(0i64, |acc, p| acc.checked_add(p.price))
            .ok_or_else(|| anyhow::anyhow!("order total exceeds {}", i64::MAX))?;
        let order_products = products
            .into_iter()
            .map(|product| OrderProduct {
                id: Uuid::new_v4(),
                product,
                timestamps: Timestamps::now(),
            })
            .collect();
        Ok(Self {
            id: Uuid::new_v4(),
            status: OrderStatus::Init,
            total_price,
            registered_at,
            order_products,
            timestamps: Timestamps::now(),
        })
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.order_products.iter().map(|line| &line.product)
    }
}

/// Resolves requested product numbers against catalog entries.
///
/// Each distinct requested number yields at most one product: the first
/// catalog entry carrying it, in catalog order. Repeated numbers in the
/// request count once; numbers with no catalog entry are dropped.
pub fn select_products(requested: &[String], catalog: Vec<Product>) -> Vec<Product> {
    let mut wanted: HashSet<&str> = requested.iter().map(String::as_str).collect();
    let mut selected = Vec::with_capacity(wanted.len());
    for product in catalog {
        if wanted.remove(product.product_number.as_str()) {
            selected.push(product);
        }
    }
    selected
}
