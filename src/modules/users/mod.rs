// Users module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{User, UserDto, UserPatch, UserStatus};
pub use repositories::{InMemoryUserRepository, MySqlUserRepository, UserRepository};
pub use services::UserService;
