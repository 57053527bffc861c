use async_trait::async_trait;

use crate::domain::product::{Product, ProductSellingStatus};
use crate::ports::order_repository::RepoError;

/// Catalog storage. Finders return entries in storage (insertion) order and
/// may yield several entries sharing one product number.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    async fn save_all(&self, products: Vec<Product>) -> Result<Vec<Product>, RepoError>;
    async fn find_all_by_selling_status_in(
        &self,
        statuses: &[ProductSellingStatus],
    ) -> Result<Vec<Product>, RepoError>;
    async fn find_all_by_product_number_in(
        &self,
        product_numbers: &[String],
    ) -> Result<Vec<Product>, RepoError>;
}
