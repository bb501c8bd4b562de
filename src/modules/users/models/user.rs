// User entity with validated state transitions
//
// A user carries an identity assigned by storage, a unique username and email,
// and a status drawn from a closed set. Mutation goes through named behaviors
// that re-check the field rules.

use serde::{Deserialize, Serialize};

use crate::core::traits::{validate_id, Identifiable};
use crate::core::{AppError, Result};

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 50;
pub const EMAIL_MAX_LEN: usize = 100;

/// User account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    Banned,
    Pending,
}

impl UserStatus {
    pub const ALL: [UserStatus; 4] = [
        UserStatus::Active,
        UserStatus::Inactive,
        UserStatus::Banned,
        UserStatus::Pending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Banned => "banned",
            UserStatus::Pending => "pending",
        }
    }

    /// Comma-separated list used in error messages
    pub fn valid_values() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserStatus {
    type Err = AppError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            "banned" => Ok(UserStatus::Banned),
            "pending" => Ok(UserStatus::Pending),
            _ => Err(AppError::validation(format!(
                "Unsupported user status: {}. Valid values: {}",
                s,
                Self::valid_values()
            ))),
        }
    }
}

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Option<i64>,
    username: String,
    email: String,
    status: UserStatus,
}

impl User {
    /// Create a new, not yet persisted user
    pub fn new(username: String, email: String, status: UserStatus) -> Result<Self> {
        Self::validate_username(&username)?;
        Self::validate_email(&email)?;

        Ok(Self {
            id: None,
            username,
            email,
            status,
        })
    }

    /// Rehydrate a user from storage
    pub fn restore(id: i64, username: String, email: String, status: UserStatus) -> Self {
        Self {
            id: Some(id),
            username,
            email,
            status,
        }
    }

    /// Build a user whose identity may or may not be known yet, validating all fields
    pub fn with_identity(
        id: Option<i64>,
        username: String,
        email: String,
        status: UserStatus,
    ) -> Result<Self> {
        let user = Self::new(username, email, status)?;
        match id {
            Some(id) => Ok(user.assign_id(validate_id(id)?)),
            None => Ok(user),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Move to `new_status`. Returns `false` when already there (no-op).
    pub fn change_status(&mut self, new_status: UserStatus) -> bool {
        if self.status == new_status {
            return false;
        }
        self.status = new_status;
        true
    }

    pub fn activate(&mut self) -> bool {
        self.change_status(UserStatus::Active)
    }

    pub fn deactivate(&mut self) -> bool {
        self.change_status(UserStatus::Inactive)
    }

    pub fn ban(&mut self) -> bool {
        self.change_status(UserStatus::Banned)
    }

    pub fn update_username(&mut self, new_username: String) -> Result<()> {
        Self::validate_username(&new_username)?;
        self.username = new_username;
        Ok(())
    }

    pub fn update_email(&mut self, new_email: String) -> Result<()> {
        Self::validate_email(&new_email)?;
        self.email = new_email;
        Ok(())
    }

    /// Plain mapping for transport
    pub fn to_map(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "username": self.username,
            "email": self.email,
            "status": self.status.as_str(),
        })
    }

    fn validate_username(username: &str) -> Result<()> {
        if username.trim().is_empty() {
            return Err(AppError::validation("Username cannot be empty"));
        }
        if username.trim() != username {
            return Err(AppError::validation(
                "Username must not start or end with whitespace",
            ));
        }

        let len = username.chars().count();
        if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
            return Err(AppError::validation(format!(
                "Username must be between {} and {} characters",
                USERNAME_MIN_LEN, USERNAME_MAX_LEN
            )));
        }

        Ok(())
    }

    fn validate_email(email: &str) -> Result<()> {
        if email.trim().is_empty() {
            return Err(AppError::validation("Email cannot be empty"));
        }
        if email.trim() != email {
            return Err(AppError::validation("Email must not start or end with whitespace"));
        }

        if email.chars().count() > EMAIL_MAX_LEN {
            return Err(AppError::validation(format!(
                "Email must be at most {} characters",
                EMAIL_MAX_LEN
            )));
        }

        let valid = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
            }
            None => false,
        };
        if !valid {
            return Err(AppError::validation(format!("Invalid email address: {}", email)));
        }

        Ok(())
    }
}

impl Identifiable for User {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(mut self, id: i64) -> Self {
        self.id.get_or_insert(id);
        self
    }
}
