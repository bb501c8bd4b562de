pub mod entity;
pub mod repository;

pub use entity::{validate_id, Identifiable, MAX_ID};
pub use repository::Repository;
