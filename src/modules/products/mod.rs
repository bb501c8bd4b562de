// Products module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{Product, ProductDto, ProductPatch, ProductStatus};
pub use repositories::{InMemoryProductRepository, MySqlProductRepository, ProductRepository};
pub use services::ProductService;
