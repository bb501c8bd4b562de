// HTTP request/response schemas for the users API

use serde::{Deserialize, Serialize};

use super::user::UserStatus;
use super::user_dto::{UserDto, UserPatch};

fn default_status() -> String {
    UserStatus::default().to_string()
}

/// Request body for user creation and full replacement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    #[serde(default = "default_status")]
    pub status: String,
}

impl CreateUserRequest {
    pub fn into_dto(self, id: Option<i64>) -> UserDto {
        UserDto {
            id,
            username: self.username,
            email: self.email,
            status: self.status,
        }
    }
}

/// Request body for PATCH /users/{id}
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPartialUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
}

impl From<UserPartialUpdate> for UserPatch {
    fn from(update: UserPartialUpdate) -> Self {
        UserPatch {
            username: update.username,
            email: update.email,
            status: update.status,
        }
    }
}

/// Request body for PATCH /users/{id}/status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStatusUpdate {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkCreateUsersRequest {
    pub users: Vec<CreateUserRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkDeleteUsersRequest {
    pub ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkDeleteResponse {
    pub deleted: u64,
}

/// User as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
    pub status: String,
}

impl From<UserDto> for UserResponse {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            username: dto.username,
            email: dto.email,
            status: dto.status,
        }
    }
}
