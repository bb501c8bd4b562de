use async_trait::async_trait;

use crate::core::in_memory::TableState;
use crate::core::traits::Repository;
use crate::core::{AppError, InMemoryTable, Result};
use crate::modules::users::models::{User, UserStatus};

use super::user_repository::UserRepository;

/// In-memory user repository.
///
/// Enforces the same username/email uniqueness as the `users` table.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    table: InMemoryTable<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_unique(state: &TableState<User>, user: &User) -> Result<()> {
        let clash = state.values().any(|existing| {
            existing.id() != user.id()
                && (existing.username() == user.username() || existing.email() == user.email())
        });

        if clash {
            let message = format!(
                "User already exists with username '{}' or email '{}'",
                user.username(),
                user.email()
            );
            tracing::warn!(username = %user.username(), "{}", message);
            return Err(AppError::Conflict(message));
        }

        Ok(())
    }

    fn insert(state: &mut TableState<User>, user: User) -> Result<User> {
        Self::ensure_unique(state, &user)?;
        state.insert(user)
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self {
            table: InMemoryTable::new("User"),
        }
    }
}

#[async_trait]
impl Repository<User, i64> for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User> {
        let mut state = self.table.write()?;
        Self::insert(&mut state, user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        Ok(self.table.read()?.get(id))
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        Ok(self.table.read()?.values().cloned().collect())
    }

    async fn list(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Vec<User>> {
        Ok(self.table.read()?.page(limit, offset))
    }

    async fn update(&self, user: User) -> Result<User> {
        let mut state = self.table.write()?;

        // Existence is reported before uniqueness, matching the MySQL adapter
        if let Some(id) = user.id() {
            if state.get(id).is_none() {
                return Err(AppError::not_found(format!("User with ID {} not found", id)));
            }
        }
        Self::ensure_unique(&state, &user)?;

        state.replace(user)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.table.write()?.remove(id))
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.table.read()?.len())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_many(&self, users: Vec<User>) -> Result<Vec<User>> {
        self.table.transaction(|state| {
            users
                .into_iter()
                .map(|user| Self::insert(state, user))
                .collect()
        })
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let state = self.table.read()?;
        let found = state.values().find(|u| u.username() == username).cloned();
        Ok(found)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let state = self.table.read()?;
        let found = state.values().find(|u| u.email() == email).cloned();
        Ok(found)
    }

    async fn find_by_status(
        &self,
        status: UserStatus,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<User>> {
        let state = self.table.read()?;
        let offset = offset.unwrap_or(0) as usize;
        let limit = limit.map(|l| l as usize).unwrap_or(usize::MAX);

        let users = state
            .values()
            .filter(|u| u.status() == status)
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        Ok(users)
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool> {
        Ok(self.find_by_username(username).await?.is_some())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn delete_many(&self, ids: &[i64]) -> Result<u64> {
        let mut state = self.table.write()?;
        Ok(ids.iter().filter(|id| state.remove(**id)).count() as u64)
    }

    async fn delete_by_username(&self, username: &str) -> Result<bool> {
        let mut state = self.table.write()?;
        let id = state
            .values()
            .find(|u| u.username() == username)
            .and_then(|u| u.id());

        Ok(id.is_some_and(|id| state.remove(id)))
    }
}
