pub mod error;
pub mod in_memory;
pub mod traits;

pub use error::{AppError, Result};
pub use in_memory::InMemoryTable;
pub use traits::{Identifiable, Repository};
