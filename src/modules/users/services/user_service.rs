use std::sync::Arc;

use tracing::{info, warn};

use crate::core::{AppError, Result};
use crate::modules::users::models::{User, UserDto, UserPatch, UserStatus};
use crate::modules::users::repositories::UserRepository;

/// Use cases for the user resource.
///
/// Each operation validates through the entity, then performs a single
/// repository mutation. Errors are never swallowed.
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Create a new user
    pub async fn create_user(&self, dto: UserDto) -> Result<UserDto> {
        let user = dto.to_domain()?;

        let created = self.user_repo.create(user).await?;
        info!(user_id = ?created.id(), username = %created.username(), "User created");

        Ok(UserDto::from_domain(&created))
    }

    /// Create several users in one all-or-nothing step
    pub async fn bulk_create_users(&self, dtos: Vec<UserDto>) -> Result<Vec<UserDto>> {
        let users = dtos
            .iter()
            .map(UserDto::to_domain)
            .collect::<Result<Vec<User>>>()?;

        let created = self.user_repo.create_many(users).await?;
        info!(count = created.len(), "Users created in bulk");

        Ok(created.iter().map(UserDto::from_domain).collect())
    }

    pub async fn get_user_by_id(&self, id: i64) -> Result<Option<UserDto>> {
        let user = self.user_repo.find_by_id(id).await?;
        Ok(user.as_ref().map(UserDto::from_domain))
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<UserDto>> {
        let user = self.user_repo.find_by_username(username).await?;
        Ok(user.as_ref().map(UserDto::from_domain))
    }

    pub async fn get_all_users(&self) -> Result<Vec<UserDto>> {
        let users = self.user_repo.find_all().await?;
        Ok(users.iter().map(UserDto::from_domain).collect())
    }

    pub async fn list_users(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Vec<UserDto>> {
        let users = self.user_repo.list(limit, offset).await?;
        Ok(users.iter().map(UserDto::from_domain).collect())
    }

    pub async fn list_users_by_status(
        &self,
        status: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<UserDto>> {
        let status: UserStatus = status.parse()?;
        let users = self.user_repo.find_by_status(status, limit, offset).await?;
        Ok(users.iter().map(UserDto::from_domain).collect())
    }

    /// Replace every field of an existing user
    pub async fn update_user(&self, dto: UserDto) -> Result<UserDto> {
        if dto.id.is_none() {
            return Err(AppError::validation("User ID is required for update"));
        }
        let user = dto.to_domain()?;

        let updated = self.user_repo.update(user).await?;
        info!(user_id = ?updated.id(), "User updated");

        Ok(UserDto::from_domain(&updated))
    }

    /// Apply the supplied fields over the stored user and re-validate the whole record
    pub async fn update_user_partial(&self, id: i64, patch: UserPatch) -> Result<UserDto> {
        if patch.is_empty() {
            return Err(AppError::validation("No fields provided for update"));
        }

        let current = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User with ID {} not found", id)))?;

        let merged = UserDto::from_domain(&current).merged(patch);
        let user = merged.to_domain()?;

        let updated = self.user_repo.update(user).await?;
        info!(user_id = id, "User partially updated");

        Ok(UserDto::from_domain(&updated))
    }

    pub async fn update_user_status(&self, id: i64, status: &str) -> Result<UserDto> {
        let status: UserStatus = status.parse()?;

        let mut user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User with ID {} not found", id)))?;

        if !user.change_status(status) {
            return Ok(UserDto::from_domain(&user));
        }

        let updated = self.user_repo.update(user).await?;
        info!(user_id = id, status = %status, "User status changed");

        Ok(UserDto::from_domain(&updated))
    }

    /// Returns `false` when no user had this ID
    pub async fn delete_user(&self, id: i64) -> Result<bool> {
        let deleted = self.user_repo.delete_by_id(id).await?;
        if deleted {
            info!(user_id = id, "User deleted");
        } else {
            warn!(user_id = id, "Delete requested for unknown user");
        }

        Ok(deleted)
    }

    /// Returns `false` when no user had this username
    pub async fn delete_user_by_username(&self, username: &str) -> Result<bool> {
        let deleted = self.user_repo.delete_by_username(username).await?;
        if deleted {
            info!(username = %username, "User deleted");
        } else {
            warn!(username = %username, "Delete requested for unknown username");
        }

        Ok(deleted)
    }

    /// Mark a user inactive instead of removing it
    pub async fn soft_delete_user(&self, id: i64) -> Result<UserDto> {
        self.update_user_status(id, UserStatus::Inactive.as_str()).await
    }

    pub async fn bulk_delete_users(&self, ids: &[i64]) -> Result<u64> {
        let deleted = self.user_repo.delete_many(ids).await?;
        info!(requested = ids.len(), deleted, "Users deleted in bulk");

        Ok(deleted)
    }
}
