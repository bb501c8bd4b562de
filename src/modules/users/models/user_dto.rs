use serde::{Deserialize, Serialize};

use super::user::{User, UserStatus};
use crate::core::Result;

/// Application-layer representation of a user used for inbound/outbound data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
    pub status: String,
}

impl UserDto {
    pub fn new(username: impl Into<String>, email: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            email: email.into(),
            status: status.into(),
        }
    }

    /// Convert into a domain entity, running every entity rule
    pub fn to_domain(&self) -> Result<User> {
        let status: UserStatus = self.status.parse()?;
        User::with_identity(self.id, self.username.clone(), self.email.clone(), status)
    }

    pub fn from_domain(user: &User) -> Self {
        Self {
            id: user.id(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            status: user.status().to_string(),
        }
    }

    pub fn with_id(self, id: i64) -> Self {
        Self { id: Some(id), ..self }
    }

    /// New value with the supplied patch fields applied over this one
    pub fn merged(self, patch: UserPatch) -> Self {
        Self {
            id: self.id,
            username: patch.username.unwrap_or(self.username),
            email: patch.email.unwrap_or(self.email),
            status: patch.status.unwrap_or(self.status),
        }
    }
}

/// Fields of a partial user update; `None` leaves the stored value untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.status.is_none()
    }
}
