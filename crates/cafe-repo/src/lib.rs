#[cfg(not(any(feature = "memory", feature = "sqlite")))]
compile_error!("Enable a repo feature: `memory` or `sqlite`.");

use cafe_types::domain::order::Order;
use cafe_types::domain::product::{Product, ProductSellingStatus};
use cafe_types::ports::{OrderRepository, ProductRepository, RepoError};
use uuid::Uuid;

#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;

// SQLite wins when both features are enabled.
#[cfg(feature = "sqlite")]
type Backend = sqlite::SqliteRepo;
#[cfg(all(feature = "memory", not(feature = "sqlite")))]
type Backend = memory::InMemoryRepo;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://cafe.db";

#[derive(Clone)]
pub struct Repo {
    backend: Backend,
}

pub async fn build_repo(url: Option<&str>) -> anyhow::Result<Repo> {
    Repo::build_repo(url).await
}

impl Repo {
    #[cfg(all(feature = "memory", not(feature = "sqlite")))]
    pub async fn build_repo(_: Option<&str>) -> anyhow::Result<Self> {
        Ok(Self {
            backend: crate::memory::InMemoryRepo::new(),
        })
    }

    #[cfg(feature = "sqlite")]
    pub async fn build_repo(database_url: Option<&str>) -> anyhow::Result<Self> {
        let url = database_url.unwrap_or(DEFAULT_DATABASE_URL);
        let backend = sqlite::SqliteRepo::new(url).await?;
        Ok(Self { backend })
    }
}

#[async_trait::async_trait]
impl ProductRepository for Repo {
    async fn save_all(&self, products: Vec<Product>) -> Result<Vec<Product>, RepoError> {
        self.backend.save_all(products).await
    }

    async fn find_all_by_selling_status_in(
        &self,
        statuses: &[ProductSellingStatus],
    ) -> Result<Vec<Product>, RepoError> {
        self.backend.find_all_by_selling_status_in(statuses).await
    }

    async fn find_all_by_product_number_in(
        &self,
        product_numbers: &[String],
    ) -> Result<Vec<Product>, RepoError> {
        self.backend
            .find_all_by_product_number_in(product_numbers)
            .await
    }
}

#[async_trait::async_trait]
impl OrderRepository for Repo {
    async fn save(&self, order: Order) -> Result<Order, RepoError> {
        self.backend.save(order).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, RepoError> {
        self.backend.find_by_id(id).await
    }
}
