mod user;
mod user_dto;
mod user_requests;

pub use user::{User, UserStatus, EMAIL_MAX_LEN, USERNAME_MAX_LEN, USERNAME_MIN_LEN};
pub use user_dto::{UserDto, UserPatch};
pub use user_requests::{
    BulkCreateUsersRequest, BulkDeleteResponse, BulkDeleteUsersRequest, CreateUserRequest,
    UserPartialUpdate, UserResponse, UserStatusUpdate,
};
