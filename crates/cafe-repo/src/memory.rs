use async_trait::async_trait;
use cafe_types::domain::order::Order;
use cafe_types::domain::product::{Product, ProductSellingStatus};
use cafe_types::ports::{OrderRepository, ProductRepository, RepoError};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct InMemoryRepo {
    // keyed by insertion sequence so scans keep catalog order
    pub products: Arc<DashMap<u64, Product>>,
    pub orders: Arc<DashMap<Uuid, Order>>,
    next_seq: Arc<AtomicU64>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self {
            products: Arc::new(DashMap::new()),
            orders: Arc::new(DashMap::new()),
            next_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    fn scan_products<F>(&self, keep: F) -> Vec<Product>
    where
        F: Fn(&Product) -> bool,
    {
        let mut rows: Vec<(u64, Product)> = self
            .products
            .iter()
            .filter(|kv| keep(kv.value()))
            .map(|kv| (*kv.key(), kv.value().clone()))
            .collect();
        rows.sort_by_key(|(seq, _)| *seq);
        rows.into_iter().map(|(_, p)| p).collect()
    }
}

impl Default for InMemoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryRepo {
    async fn save_all(&self, products: Vec<Product>) -> Result<Vec<Product>, RepoError> {
        for product in &products {
            let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
            self.products.insert(seq, product.clone());
        }
        Ok(products)
    }

    async fn find_all_by_selling_status_in(
        &self,
        statuses: &[ProductSellingStatus],
    ) -> Result<Vec<Product>, RepoError> {
        Ok(self.scan_products(|p| statuses.contains(&p.selling_status)))
    }

    async fn find_all_by_product_number_in(
        &self,
        product_numbers: &[String],
    ) -> Result<Vec<Product>, RepoError> {
        Ok(self.scan_products(|p| product_numbers.contains(&p.product_number)))
    }
}

#[async_trait]
impl OrderRepository for InMemoryRepo {
    async fn save(&self, order: Order) -> Result<Order, RepoError> {
        self.orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, RepoError> {
        Ok(self.orders.get(&id).map(|r| r.clone()))
    }
}
