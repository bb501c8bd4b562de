// UserRepository contract and its MySQL implementation
//
// Every mutation runs in a single transaction; a failure before commit drops the
// transaction, which rolls it back.

use async_trait::async_trait;
use sqlx::{FromRow, MySql, MySqlPool, QueryBuilder, Transaction};

use crate::core::traits::{Identifiable, Repository};
use crate::core::{AppError, Result};
use crate::modules::users::models::{User, UserStatus};

/// Persistence operations for users beyond basic CRUD
#[async_trait]
pub trait UserRepository: Repository<User, i64> {
    /// Create several users; either all are stored or none are
    async fn create_many(&self, users: Vec<User>) -> Result<Vec<User>>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Users in `status`, ascending by id, paged like `list`
    async fn find_by_status(
        &self,
        status: UserStatus,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<User>>;

    async fn exists_by_username(&self, username: &str) -> Result<bool>;

    async fn exists_by_email(&self, email: &str) -> Result<bool>;

    /// Delete every listed user that exists; returns how many were removed
    async fn delete_many(&self, ids: &[i64]) -> Result<u64>;

    async fn delete_by_username(&self, username: &str) -> Result<bool>;
}

/// Row model for the `users` table
#[derive(Debug, Clone, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    status: String,
}

impl UserRow {
    fn into_domain(self) -> Result<User> {
        let status: UserStatus = self.status.parse().map_err(|_| {
            AppError::internal(format!(
                "User {} has unknown stored status '{}'",
                self.id, self.status
            ))
        })?;

        Ok(User::restore(self.id, self.username, self.email, status))
    }
}

fn rows_into_domain(rows: Vec<UserRow>) -> Result<Vec<User>> {
    rows.into_iter().map(UserRow::into_domain).collect()
}

fn duplicate_message(user: &User) -> String {
    format!(
        "User already exists with username '{}' or email '{}'",
        user.username(),
        user.email()
    )
}

fn page_bounds(limit: Option<u32>, offset: Option<u32>) -> (i64, i64) {
    (
        limit.map(i64::from).unwrap_or(i64::MAX),
        offset.map(i64::from).unwrap_or(0),
    )
}

/// MySQL-backed user repository
#[derive(Clone)]
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Insert a user within an existing transaction
    async fn insert_with_tx(tx: &mut Transaction<'_, MySql>, user: User) -> Result<User> {
        let taken: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT id FROM users
            WHERE username = ? OR email = ?
            LIMIT 1
            "#,
        )
        .bind(user.username())
        .bind(user.email())
        .fetch_optional(&mut **tx)
        .await?;

        if taken.is_some() {
            let message = duplicate_message(&user);
            tracing::warn!(username = %user.username(), "{}", message);
            return Err(AppError::Conflict(message));
        }

        // A NULL id lets AUTO_INCREMENT assign one
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, username, email, status)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(user.id())
        .bind(user.username())
        .bind(user.email())
        .bind(user.status().as_str())
        .execute(&mut **tx)
        .await
        .map_err(|e| AppError::from_write(e, || duplicate_message(&user)))?;

        let id = match user.id() {
            Some(id) => id,
            None => i64::try_from(result.last_insert_id())
                .map_err(|_| AppError::internal("Generated user ID out of range"))?,
        };

        Ok(user.assign_id(id))
    }
}

#[async_trait]
impl Repository<User, i64> for MySqlUserRepository {
    async fn create(&self, user: User) -> Result<User> {
        let mut tx = self.pool.begin().await?;
        let created = Self::insert_with_tx(&mut tx, user).await?;
        tx.commit().await?;

        tracing::debug!(user_id = ?created.id(), "User row inserted");
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email, status FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_domain).transpose()
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email, status FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows_into_domain(rows)
    }

    async fn list(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Vec<User>> {
        let (limit, offset) = page_bounds(limit, offset);

        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, status
            FROM users
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows_into_domain(rows)
    }

    async fn update(&self, user: User) -> Result<User> {
        let id = user
            .id()
            .ok_or_else(|| AppError::validation("User ID is required for update"))?;

        let mut tx = self.pool.begin().await?;

        let existing: Option<i64> =
            sqlx::query_scalar("SELECT id FROM users WHERE id = ? FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if existing.is_none() {
            return Err(AppError::not_found(format!("User with ID {} not found", id)));
        }

        let taken: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT id FROM users
            WHERE (username = ? OR email = ?) AND id <> ?
            LIMIT 1
            "#,
        )
        .bind(user.username())
        .bind(user.email())
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
        if taken.is_some() {
            return Err(AppError::Conflict(duplicate_message(&user)));
        }

        sqlx::query(
            r#"
            UPDATE users
            SET username = ?, email = ?, status = ?
            WHERE id = ?
            "#,
        )
        .bind(user.username())
        .bind(user.email())
        .bind(user.status().as_str())
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::from_write(e, || duplicate_message(&user)))?;

        tx.commit().await?;

        Ok(user)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(total.max(0) as u64)
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create_many(&self, users: Vec<User>) -> Result<Vec<User>> {
        let mut tx = self.pool.begin().await?;

        let mut created = Vec::with_capacity(users.len());
        for user in users {
            created.push(Self::insert_with_tx(&mut tx, user).await?);
        }

        tx.commit().await?;

        Ok(created)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email, status FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_domain).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, email, status FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_domain).transpose()
    }

    async fn find_by_status(
        &self,
        status: UserStatus,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<User>> {
        let (limit, offset) = page_bounds(limit, offset);

        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, status
            FROM users
            WHERE status = ?
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(status.as_str())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows_into_domain(rows)
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }

    async fn delete_many(&self, ids: &[i64]) -> Result<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut builder = QueryBuilder::<MySql>::new("DELETE FROM users WHERE id IN (");
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");

        let result = builder.build().execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    async fn delete_by_username(&self, username: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE username = ?")
            .bind(username)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
