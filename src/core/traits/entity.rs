use crate::core::{AppError, Result};

/// Largest identity a caller may supply; the one above it must stay assignable.
pub const MAX_ID: i64 = i64::MAX - 1;

/// An entity whose integer identity is assigned by the persistence layer.
///
/// Identity is absent before the first successful create and immutable afterwards:
/// `assign_id` only fills an absent identity.
pub trait Identifiable: Clone + Send + Sync {
    fn id(&self) -> Option<i64>;

    fn assign_id(self, id: i64) -> Self;
}

/// Reject identities storage could never have assigned
pub fn validate_id(id: i64) -> Result<i64> {
    if !(1..=MAX_ID).contains(&id) {
        return Err(AppError::validation(format!(
            "ID must be between 1 and {}, got {}",
            MAX_ID, id
        )));
    }
    Ok(id)
}
