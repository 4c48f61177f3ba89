use actix_web::{web, HttpRequest, HttpResponse, Result};
use utoipa;

use crate::auth::JwtManager;
use crate::handlers::{data_response, message_response};
use crate::middleware::auth::{authenticate_request, authenticated_user_id};
use crate::models::{ApiResponse, ErrorResponse, Role, RoleForm, ServiceError};
use crate::services::{AuthService, RoleService};

#[utoipa::path(
    get,
    path = "/api/roles",
    tag = "roles",
    responses(
        (status = 200, description = "Roles ordered by name", body = [Role]),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn list_roles(
    role_service: web::Data<RoleService>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    authenticate_request(&req, &jwt_manager, &auth_service).await?;

    let roles = role_service.list().await?;
    Ok(data_response(roles))
}

#[utoipa::path(
    post,
    path = "/api/roles",
    tag = "roles",
    request_body = RoleForm,
    responses(
        (status = 200, description = "Role created", body = Role),
        (status = 400, description = "Blank or duplicate name", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn create_role(
    role_service: web::Data<RoleService>,
    form: web::Json<RoleForm>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    let role = role_service.create(&form, actor).await?;
    Ok(data_response(role))
}

#[utoipa::path(
    put,
    path = "/api/roles/{id}",
    tag = "roles",
    params(("id" = i64, Path, description = "Role ID")),
    request_body = RoleForm,
    responses(
        (status = 200, description = "Role renamed", body = Role),
        (status = 400, description = "Blank or duplicate name", body = ErrorResponse),
        (status = 404, description = "Role not found", body = ErrorResponse)
    )
)]
pub async fn update_role(
    role_service: web::Data<RoleService>,
    path: web::Path<i64>,
    form: web::Json<RoleForm>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    let role = role_service.update(path.into_inner(), &form, actor).await?;
    Ok(data_response(role))
}

#[utoipa::path(
    delete,
    path = "/api/roles/{id}",
    tag = "roles",
    params(("id" = i64, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Role deleted", body = ApiResponse),
        (status = 400, description = "Role still assigned to users", body = ErrorResponse),
        (status = 404, description = "Role not found", body = ErrorResponse)
    )
)]
pub async fn delete_role(
    role_service: web::Data<RoleService>,
    path: web::Path<i64>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    role_service.remove(path.into_inner(), actor).await?;
    Ok(message_response("Role deleted successfully"))
}
