use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::UserService;
use crate::domain::user::User;
use crate::errors::AppError;

use super::DbActionResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id.get(),
            username: u.username,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
}

/// GET /users
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = UserListResponse),
        (status = 500, description = "Internal server error", body = super::ErrorResponse),
    ),
    tag = "users"
)]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = web::block(move || service.list())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(UserListResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
    }))
}

/// DELETE /users/{id}
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User deleted", body = DbActionResponse),
        (status = 400, description = "Malformed user ID", body = super::ErrorResponse),
        (status = 404, description = "User not found", body = super::ErrorResponse),
        (status = 500, description = "Internal server error", body = super::ErrorResponse),
    ),
    tag = "users"
)]
pub async fn delete_user(
    service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();

    web::block(move || service.delete(&user_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(DbActionResponse::success()))
}
