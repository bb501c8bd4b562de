use async_trait::async_trait;

use crate::core::Result;

/// Base repository trait for CRUD operations.
///
/// Every resource repository extends this contract; adapters (MySQL, in-memory)
/// are chosen at composition time and injected into services.
///
/// Mutating operations are atomic: they either fully apply or leave storage unchanged.
#[async_trait]
pub trait Repository<T, ID>: Send + Sync {
    /// Persist a new entity, assigning its identity if absent.
    /// Fails with `AppError::Conflict` on a uniqueness violation.
    async fn create(&self, entity: T) -> Result<T>;

    /// Find entity by ID. A miss is `Ok(None)`.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>>;

    /// All entities in ascending identity order
    async fn find_all(&self) -> Result<Vec<T>>;

    /// Page through entities in ascending identity order
    async fn list(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Vec<T>>;

    /// Replace all mutable fields of a stored entity.
    /// Fails with `AppError::NotFound` if the identity is not stored.
    async fn update(&self, entity: T) -> Result<T>;

    /// Delete by ID; returns whether a record existed and was removed
    async fn delete_by_id(&self, id: ID) -> Result<bool>;

    /// Total number of stored entities
    async fn count(&self) -> Result<u64>;
}
