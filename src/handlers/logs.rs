use actix_web::{web, HttpRequest, HttpResponse, Result};
use utoipa;

use crate::auth::JwtManager;
use crate::handlers::data_response;
use crate::middleware::auth::authenticate_request;
use crate::models::{ErrorResponse, LogEntryDetails, LogFilter, LogOptions, ServiceError};
use crate::services::{ActivityLogService, AuthService};

#[utoipa::path(
    get,
    path = "/api/logs",
    tag = "logs",
    params(LogFilter),
    responses(
        (status = 200, description = "Activity log entries, newest first", body = [LogEntryDetails]),
        (status = 400, description = "Malformed filter", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn list_logs(
    activity_log: web::Data<ActivityLogService>,
    filter: web::Query<LogFilter>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    authenticate_request(&req, &jwt_manager, &auth_service).await?;

    let entries = activity_log.list(&filter).await?;
    Ok(data_response(entries))
}

#[utoipa::path(
    get,
    path = "/api/logs/options",
    tag = "logs",
    responses(
        (status = 200, description = "Table names and users to filter by", body = LogOptions),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn log_options(
    activity_log: web::Data<ActivityLogService>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    authenticate_request(&req, &jwt_manager, &auth_service).await?;

    let options = activity_log.options().await?;
    Ok(data_response(options))
}
