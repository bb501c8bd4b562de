//! Pluto user and product management API
//!
//! Layered as HTTP controllers over services over repository traits, with MySQL and
//! in-memory repository implementations.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::products;
pub use modules::users;
