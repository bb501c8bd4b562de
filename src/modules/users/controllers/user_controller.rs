use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::users::models::{
    BulkCreateUsersRequest, BulkDeleteResponse, BulkDeleteUsersRequest, CreateUserRequest,
    UserPartialUpdate, UserResponse, UserStatusUpdate,
};
use crate::modules::users::services::UserService;

/// Query parameters for listing users
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    pub status: Option<String>,
}

fn default_limit() -> u32 {
    50
}

fn user_not_found(id: i64) -> AppError {
    AppError::not_found(format!("User with ID {} not found", id))
}

/// Create a new user
/// POST /users
pub async fn create_user(
    service: web::Data<Arc<UserService>>,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = service.create_user(request.into_inner().into_dto(None)).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// Create several users atomically
/// POST /users/bulk
pub async fn bulk_create_users(
    service: web::Data<Arc<UserService>>,
    request: web::Json<BulkCreateUsersRequest>,
) -> Result<HttpResponse, AppError> {
    let dtos = request
        .into_inner()
        .users
        .into_iter()
        .map(|user| user.into_dto(None))
        .collect();

    let users: Vec<UserResponse> = service
        .bulk_create_users(dtos)
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(HttpResponse::Created().json(users))
}

/// List users, optionally filtered by status
/// GET /users
pub async fn list_users(
    service: web::Data<Arc<UserService>>,
    query: web::Query<ListUsersQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();

    let users = match query.status.as_deref() {
        Some(status) => {
            service
                .list_users_by_status(status, Some(query.limit), Some(query.offset))
                .await?
        }
        None => service.list_users(Some(query.limit), Some(query.offset)).await?,
    };

    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(users))
}

/// Get user by ID
/// GET /users/{id}
pub async fn get_user(
    service: web::Data<Arc<UserService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    let user = service
        .get_user_by_id(user_id)
        .await?
        .ok_or_else(|| user_not_found(user_id))?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Get user by username
/// GET /users/by-username/{username}
pub async fn get_user_by_username(
    service: web::Data<Arc<UserService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let username = path.into_inner();
    let user = service
        .get_user_by_username(&username)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("User with username '{}' not found", username))
        })?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Replace a user
/// PUT /users/{id}
pub async fn update_user(
    service: web::Data<Arc<UserService>>,
    path: web::Path<i64>,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    let user = service
        .update_user(request.into_inner().into_dto(Some(user_id)))
        .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Update specific fields of a user
/// PATCH /users/{id}
pub async fn update_user_partial(
    service: web::Data<Arc<UserService>>,
    path: web::Path<i64>,
    request: web::Json<UserPartialUpdate>,
) -> Result<HttpResponse, AppError> {
    let user = service
        .update_user_partial(path.into_inner(), request.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Update a user's status
/// PATCH /users/{id}/status
pub async fn update_status(
    service: web::Data<Arc<UserService>>,
    path: web::Path<i64>,
    request: web::Json<UserStatusUpdate>,
) -> Result<HttpResponse, AppError> {
    let status = request.into_inner().status;
    let user = service.update_user_status(path.into_inner(), &status).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Delete a user
/// DELETE /users/{id}
pub async fn delete_user(
    service: web::Data<Arc<UserService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    if !service.delete_user(user_id).await? {
        return Err(user_not_found(user_id));
    }

    Ok(HttpResponse::NoContent().finish())
}

/// Soft delete a user (mark as inactive)
/// DELETE /users/{id}/soft
pub async fn soft_delete_user(
    service: web::Data<Arc<UserService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = service.soft_delete_user(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Delete several users
/// POST /users/bulk-delete
pub async fn bulk_delete_users(
    service: web::Data<Arc<UserService>>,
    request: web::Json<BulkDeleteUsersRequest>,
) -> Result<HttpResponse, AppError> {
    let deleted = service.bulk_delete_users(&request.ids).await?;

    Ok(HttpResponse::Ok().json(BulkDeleteResponse { deleted }))
}

/// Configure user routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::post().to(create_user))
            .route("", web::get().to(list_users))
            .route("/bulk", web::post().to(bulk_create_users))
            .route("/bulk-delete", web::post().to(bulk_delete_users))
            .route("/by-username/{username}", web::get().to(get_user_by_username))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::put().to(update_user))
            .route("/{id}", web::patch().to(update_user_partial))
            .route("/{id}", web::delete().to(delete_user))
            .route("/{id}/status", web::patch().to(update_status))
            .route("/{id}/soft", web::delete().to(soft_delete_user)),
    );
}
