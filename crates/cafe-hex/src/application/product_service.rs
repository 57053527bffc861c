use crate::application::response::ProductResponse;
use crate::errors::AppError;
use cafe_types::domain::product::ProductSellingStatus;
use cafe_types::ports::ProductRepository;

pub struct ProductService<R: ProductRepository> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Products currently on the menu, in catalog order.
    pub async fn get_selling_products(&self) -> Result<Vec<ProductResponse>, AppError> {
        let products = self
            .repo
            .find_all_by_selling_status_in(&ProductSellingStatus::for_display())
            .await?;
        tracing::debug!(count = products.len(), "loaded selling products");
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }
}
