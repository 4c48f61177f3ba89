use actix_web::{web, HttpRequest, HttpResponse, Result};
use utoipa;

use crate::auth::JwtManager;
use crate::handlers::{data_response, message_response};
use crate::middleware::auth::{authenticate_request, authenticated_user_id};
use crate::models::{ApiResponse, ErrorResponse, Plane, PlaneForm, PlanePatch, ServiceError};
use crate::services::{AuthService, PlaneService};

#[utoipa::path(
    get,
    path = "/api/planes",
    tag = "planes",
    responses(
        (status = 200, description = "Planes ordered by model", body = [Plane]),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn list_planes(
    plane_service: web::Data<PlaneService>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    authenticate_request(&req, &jwt_manager, &auth_service).await?;

    let planes = plane_service.list().await?;
    Ok(data_response(planes))
}

#[utoipa::path(
    post,
    path = "/api/planes",
    tag = "planes",
    request_body = PlaneForm,
    responses(
        (status = 200, description = "Plane created", body = Plane),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn create_plane(
    plane_service: web::Data<PlaneService>,
    form: web::Json<PlaneForm>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    let plane = plane_service.create(&form, actor).await?;
    Ok(data_response(plane))
}

#[utoipa::path(
    put,
    path = "/api/planes/{id}",
    tag = "planes",
    params(("id" = i64, Path, description = "Plane ID")),
    request_body = PlanePatch,
    responses(
        (status = 200, description = "Plane updated", body = Plane),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Plane not found", body = ErrorResponse)
    )
)]
pub async fn update_plane(
    plane_service: web::Data<PlaneService>,
    path: web::Path<i64>,
    patch: web::Json<PlanePatch>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    let plane = plane_service.update(path.into_inner(), &patch, actor).await?;
    Ok(data_response(plane))
}

#[utoipa::path(
    delete,
    path = "/api/planes/{id}",
    tag = "planes",
    params(("id" = i64, Path, description = "Plane ID")),
    responses(
        (status = 200, description = "Plane deleted", body = ApiResponse),
        (status = 400, description = "Plane is still referenced by flights", body = ErrorResponse),
        (status = 404, description = "Plane not found", body = ErrorResponse)
    )
)]
pub async fn delete_plane(
    plane_service: web::Data<PlaneService>,
    path: web::Path<i64>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    plane_service.remove(path.into_inner(), actor).await?;
    Ok(message_response("Plane deleted successfully"))
}
