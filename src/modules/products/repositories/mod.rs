pub mod in_memory_product_repository;
pub mod product_repository;

pub use in_memory_product_repository::InMemoryProductRepository;
pub use product_repository::{MySqlProductRepository, ProductRepository};
