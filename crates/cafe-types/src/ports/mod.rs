pub mod order_repository;
pub mod product_repository;

pub use order_repository::{OrderRepository, RepoError};
pub use product_repository::ProductRepository;
