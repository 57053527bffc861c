use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::Order;

#[derive(thiserror::Error, Debug)]
pub enum RepoError {
    #[error("db error: {0}")]
    DbError(String),
}

#[async_trait]
pub trait OrderRepository: Send + Sync + 'static {
    async fn save(&self, order: Order) -> Result<Order, RepoError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, RepoError>;
}
