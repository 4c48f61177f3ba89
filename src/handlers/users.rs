use actix_web::{web, HttpRequest, HttpResponse, Result};
use utoipa;

use crate::auth::JwtManager;
use crate::handlers::{data_response, message_response};
use crate::middleware::auth::{authenticate_request, authenticated_user_id};
use crate::models::{
    ApiResponse, ErrorResponse, ServiceError, SystemUser, SystemUserDetails, SystemUserForm,
    SystemUserOptions, SystemUserPatch,
};
use crate::services::{AuthService, SystemUserService};

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "System users with role name, by username", body = [SystemUserDetails]),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn list_users(
    user_service: web::Data<SystemUserService>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    authenticate_request(&req, &jwt_manager, &auth_service).await?;

    let users = user_service.list().await?;
    Ok(data_response(users))
}

#[utoipa::path(
    get,
    path = "/api/users/options",
    tag = "users",
    responses(
        (status = 200, description = "Roles to assign", body = SystemUserOptions),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn user_options(
    user_service: web::Data<SystemUserService>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    authenticate_request(&req, &jwt_manager, &auth_service).await?;

    let options = user_service.options().await?;
    Ok(data_response(options))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = SystemUserForm,
    responses(
        (status = 200, description = "System user created", body = SystemUser),
        (status = 400, description = "Missing fields, bad email or duplicate email", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn create_user(
    user_service: web::Data<SystemUserService>,
    form: web::Json<SystemUserForm>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    let user = user_service.create(&form, actor).await?;
    Ok(data_response(user))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "System user ID")),
    request_body = SystemUserPatch,
    responses(
        (status = 200, description = "System user updated", body = SystemUser),
        (status = 400, description = "Invalid input or duplicate email", body = ErrorResponse),
        (status = 404, description = "System user not found", body = ErrorResponse)
    )
)]
pub async fn update_user(
    user_service: web::Data<SystemUserService>,
    path: web::Path<i64>,
    patch: web::Json<SystemUserPatch>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    let user = user_service.update(path.into_inner(), &patch, actor).await?;
    Ok(data_response(user))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "System user ID")),
    responses(
        (status = 200, description = "System user deleted", body = ApiResponse),
        (status = 404, description = "System user not found", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    user_service: web::Data<SystemUserService>,
    path: web::Path<i64>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    user_service.remove(path.into_inner(), actor).await?;
    Ok(message_response("User deleted successfully"))
}
