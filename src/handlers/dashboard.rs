use actix_web::{web, HttpRequest, HttpResponse, Result};
use utoipa;

use crate::auth::JwtManager;
use crate::middleware::auth::authenticate_request;
use crate::handlers::data_response;
use crate::models::{Dashboard, ErrorResponse, SearchQuery, ServiceError};
use crate::services::{AuthService, DashboardService};

#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "dashboard",
    params(SearchQuery),
    responses(
        (status = 200, description = "Entity counts and the next upcoming flights", body = Dashboard),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn dashboard_api(
    dashboard_service: web::Data<DashboardService>,
    query: web::Query<SearchQuery>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    authenticate_request(&req, &jwt_manager, &auth_service).await?;

    let stats = dashboard_service.stats().await?;
    let upcoming_flights = dashboard_service
        .upcoming_flights(query.search.as_deref())
        .await?;

    Ok(data_response(Dashboard {
        stats,
        upcoming_flights,
    }))
}
