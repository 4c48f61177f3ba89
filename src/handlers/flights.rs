use actix_web::{web, HttpRequest, HttpResponse, Result};
use utoipa;

use crate::auth::JwtManager;
use crate::handlers::{data_response, message_response};
use crate::middleware::auth::{authenticate_request, authenticated_user_id};
use crate::models::{
    ApiResponse, ErrorResponse, Flight, FlightDetails, FlightForm, FlightOptions, FlightPatch,
    ServiceError,
};
use crate::services::{AuthService, FlightService};

#[utoipa::path(
    get,
    path = "/api/flights",
    tag = "flights",
    responses(
        (status = 200, description = "Flights with route and plane, by departure", body = [FlightDetails]),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn list_flights(
    flight_service: web::Data<FlightService>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    authenticate_request(&req, &jwt_manager, &auth_service).await?;

    let flights = flight_service.list().await?;
    Ok(data_response(flights))
}

#[utoipa::path(
    get,
    path = "/api/flights/options",
    tag = "flights",
    responses(
        (status = 200, description = "Routes and planes to choose from", body = FlightOptions),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn flight_options(
    flight_service: web::Data<FlightService>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    authenticate_request(&req, &jwt_manager, &auth_service).await?;

    let options = flight_service.options().await?;
    Ok(data_response(options))
}

#[utoipa::path(
    post,
    path = "/api/flights",
    tag = "flights",
    request_body = FlightForm,
    responses(
        (status = 200, description = "Flight created", body = Flight),
        (status = 400, description = "Arrival not after departure, non-positive price, or unknown route / plane", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn create_flight(
    flight_service: web::Data<FlightService>,
    form: web::Json<FlightForm>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    let flight = flight_service.create(&form, actor).await?;
    Ok(data_response(flight))
}

#[utoipa::path(
    put,
    path = "/api/flights/{id}",
    tag = "flights",
    params(("id" = i64, Path, description = "Flight ID")),
    request_body = FlightPatch,
    responses(
        (status = 200, description = "Flight updated", body = Flight),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Flight not found", body = ErrorResponse)
    )
)]
pub async fn update_flight(
    flight_service: web::Data<FlightService>,
    path: web::Path<i64>,
    patch: web::Json<FlightPatch>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    let flight = flight_service.update(path.into_inner(), &patch, actor).await?;
    Ok(data_response(flight))
}

#[utoipa::path(
    delete,
    path = "/api/flights/{id}",
    tag = "flights",
    params(("id" = i64, Path, description = "Flight ID")),
    responses(
        (status = 200, description = "Flight deleted", body = ApiResponse),
        (status = 404, description = "Flight not found", body = ErrorResponse)
    )
)]
pub async fn delete_flight(
    flight_service: web::Data<FlightService>,
    path: web::Path<i64>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    flight_service.remove(path.into_inner(), actor).await?;
    Ok(message_response("Flight deleted successfully"))
}
