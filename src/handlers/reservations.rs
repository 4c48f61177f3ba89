use actix_web::{web, HttpRequest, HttpResponse, Result};
use utoipa;

use crate::auth::JwtManager;
use crate::handlers::{data_response, message_response};
use crate::middleware::auth::{authenticate_request, authenticated_user_id};
use crate::models::{
    ApiResponse, ErrorResponse, Reservation, ReservationDetails, ReservationForm,
    ReservationOptions, ReservationPatch, ServiceError,
};
use crate::services::{AuthService, ReservationService};

#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = "reservations",
    responses(
        (status = 200, description = "Reservations with client and flight, newest first", body = [ReservationDetails]),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn list_reservations(
    reservation_service: web::Data<ReservationService>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    authenticate_request(&req, &jwt_manager, &auth_service).await?;

    let reservations = reservation_service.list().await?;
    Ok(data_response(reservations))
}

#[utoipa::path(
    get,
    path = "/api/reservations/options",
    tag = "reservations",
    responses(
        (status = 200, description = "Clients and upcoming flights to choose from", body = ReservationOptions),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn reservation_options(
    reservation_service: web::Data<ReservationService>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    authenticate_request(&req, &jwt_manager, &auth_service).await?;

    let options = reservation_service.options().await?;
    Ok(data_response(options))
}

#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = "reservations",
    request_body = ReservationForm,
    responses(
        (status = 200, description = "Reservation created; a blank code is generated", body = Reservation),
        (status = 400, description = "Missing client, flight or date", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn create_reservation(
    reservation_service: web::Data<ReservationService>,
    form: web::Json<ReservationForm>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    let reservation = reservation_service.create(&form, actor).await?;
    Ok(data_response(reservation))
}

#[utoipa::path(
    put,
    path = "/api/reservations/{id}",
    tag = "reservations",
    params(("id" = i64, Path, description = "Reservation ID")),
    request_body = ReservationPatch,
    responses(
        (status = 200, description = "Reservation updated", body = Reservation),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Reservation not found", body = ErrorResponse)
    )
)]
pub async fn update_reservation(
    reservation_service: web::Data<ReservationService>,
    path: web::Path<i64>,
    patch: web::Json<ReservationPatch>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    let reservation = reservation_service
        .update(path.into_inner(), patch.into_inner(), actor)
        .await?;
    Ok(data_response(reservation))
}

#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    tag = "reservations",
    params(("id" = i64, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation deleted", body = ApiResponse),
        (status = 400, description = "Reservation still has passengers", body = ErrorResponse),
        (status = 404, description = "Reservation not found", body = ErrorResponse)
    )
)]
pub async fn delete_reservation(
    reservation_service: web::Data<ReservationService>,
    path: web::Path<i64>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    reservation_service.remove(path.into_inner(), actor).await?;
    Ok(message_response("Reservation deleted successfully"))
}
