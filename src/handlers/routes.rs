use actix_web::{web, HttpRequest, HttpResponse, Result};
use utoipa;

use crate::auth::JwtManager;
use crate::handlers::{data_response, message_response};
use crate::middleware::auth::{authenticate_request, authenticated_user_id};
use crate::models::{ApiResponse, ErrorResponse, Route, RouteForm, RoutePatch, ServiceError};
use crate::services::{AuthService, RouteService};

#[utoipa::path(
    get,
    path = "/api/routes",
    tag = "routes",
    responses(
        (status = 200, description = "Routes ordered by origin", body = [Route]),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn list_routes(
    route_service: web::Data<RouteService>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    authenticate_request(&req, &jwt_manager, &auth_service).await?;

    let routes = route_service.list().await?;
    Ok(data_response(routes))
}

#[utoipa::path(
    post,
    path = "/api/routes",
    tag = "routes",
    request_body = RouteForm,
    responses(
        (status = 200, description = "Route created", body = Route),
        (status = 400, description = "Missing fields or origin equals destination", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn create_route(
    route_service: web::Data<RouteService>,
    form: web::Json<RouteForm>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    let route = route_service.create(&form, actor).await?;
    Ok(data_response(route))
}

#[utoipa::path(
    put,
    path = "/api/routes/{id}",
    tag = "routes",
    params(("id" = i64, Path, description = "Route ID")),
    request_body = RoutePatch,
    responses(
        (status = 200, description = "Route updated", body = Route),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Route not found", body = ErrorResponse)
    )
)]
pub async fn update_route(
    route_service: web::Data<RouteService>,
    path: web::Path<i64>,
    patch: web::Json<RoutePatch>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    let route = route_service.update(path.into_inner(), &patch, actor).await?;
    Ok(data_response(route))
}

#[utoipa::path(
    delete,
    path = "/api/routes/{id}",
    tag = "routes",
    params(("id" = i64, Path, description = "Route ID")),
    responses(
        (status = 200, description = "Route deleted", body = ApiResponse),
        (status = 404, description = "Route not found", body = ErrorResponse)
    )
)]
pub async fn delete_route(
    route_service: web::Data<RouteService>,
    path: web::Path<i64>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    route_service.remove(path.into_inner(), actor).await?;
    Ok(message_response("Route deleted successfully"))
}
