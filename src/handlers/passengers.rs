use actix_web::{web, HttpRequest, HttpResponse, Result};
use utoipa;

use crate::auth::JwtManager;
use crate::handlers::{data_response, message_response};
use crate::middleware::auth::{authenticate_request, authenticated_user_id};
use crate::models::{
    ApiResponse, ErrorResponse, Passenger, PassengerDetails, PassengerForm, PassengerOptions,
    PassengerPatch, ServiceError,
};
use crate::services::{AuthService, PassengerService};

#[utoipa::path(
    get,
    path = "/api/passengers",
    tag = "passengers",
    responses(
        (status = 200, description = "Passengers with reservation summary, by name", body = [PassengerDetails]),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn list_passengers(
    passenger_service: web::Data<PassengerService>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    authenticate_request(&req, &jwt_manager, &auth_service).await?;

    let passengers = passenger_service.list().await?;
    Ok(data_response(passengers))
}

#[utoipa::path(
    get,
    path = "/api/passengers/options",
    tag = "passengers",
    responses(
        (status = 200, description = "Reservations to attach passengers to", body = PassengerOptions),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn passenger_options(
    passenger_service: web::Data<PassengerService>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    authenticate_request(&req, &jwt_manager, &auth_service).await?;

    let options = passenger_service.options().await?;
    Ok(data_response(options))
}

#[utoipa::path(
    post,
    path = "/api/passengers",
    tag = "passengers",
    request_body = PassengerForm,
    responses(
        (status = 200, description = "Passenger created", body = Passenger),
        (status = 400, description = "Missing fields or unknown reservation", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn create_passenger(
    passenger_service: web::Data<PassengerService>,
    form: web::Json<PassengerForm>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    let passenger = passenger_service.create(&form, actor).await?;
    Ok(data_response(passenger))
}

#[utoipa::path(
    put,
    path = "/api/passengers/{id}",
    tag = "passengers",
    params(("id" = i64, Path, description = "Passenger ID")),
    request_body = PassengerPatch,
    responses(
        (status = 200, description = "Passenger updated", body = Passenger),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Passenger not found", body = ErrorResponse)
    )
)]
pub async fn update_passenger(
    passenger_service: web::Data<PassengerService>,
    path: web::Path<i64>,
    patch: web::Json<PassengerPatch>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    let passenger = passenger_service.update(path.into_inner(), &patch, actor).await?;
    Ok(data_response(passenger))
}

#[utoipa::path(
    delete,
    path = "/api/passengers/{id}",
    tag = "passengers",
    params(("id" = i64, Path, description = "Passenger ID")),
    responses(
        (status = 200, description = "Passenger deleted", body = ApiResponse),
        (status = 404, description = "Passenger not found", body = ErrorResponse)
    )
)]
pub async fn delete_passenger(
    passenger_service: web::Data<PassengerService>,
    path: web::Path<i64>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    passenger_service.remove(path.into_inner(), actor).await?;
    Ok(message_response("Passenger deleted successfully"))
}
