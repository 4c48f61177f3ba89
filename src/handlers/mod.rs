pub mod auth;
pub mod clients;
pub mod dashboard;
pub mod flights;
pub mod logs;
pub mod passengers;
pub mod planes;
pub mod reservations;
pub mod roles;
pub mod routes;
pub mod users;

// Re-export all handler functions for easy importing
pub use auth::*;
pub use clients::*;
pub use dashboard::*;
pub use flights::*;
pub use logs::*;
pub use passengers::*;
pub use planes::*;
pub use reservations::*;
pub use roles::*;
pub use routes::*;
pub use users::*;

use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::json;

use crate::models::ServiceError;

/// `{"success": true, "data": ...}`
pub fn data_response<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": data,
    }))
}

/// `{"success": true, "message": ...}`
pub fn message_response(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": message,
    }))
}

/// Mounts every `/api` route. Static `/options` paths are registered ahead
/// of the `/{id}` resources they would otherwise collide with.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed bodies and query strings get the same JSON error shape as everything else.
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ServiceError::ValidationError(format!("Invalid request body: {}", err)).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        ServiceError::ValidationError(format!("Invalid query string: {}", err)).into()
    }));

    cfg.route("/api/login", web::post().to(login_api))
        .route("/api/logout", web::post().to(logout_api))
        .route("/api/session", web::get().to(session_api))
        .route("/api/dashboard", web::get().to(dashboard_api))
        // Planes
        .service(
            web::resource("/api/planes")
                .route(web::get().to(list_planes))
                .route(web::post().to(create_plane)),
        )
        .service(
            web::resource("/api/planes/{id}")
                .route(web::put().to(update_plane))
                .route(web::delete().to(delete_plane)),
        )
        // Clients
        .service(
            web::resource("/api/clients")
                .route(web::get().to(list_clients))
                .route(web::post().to(create_client)),
        )
        .service(
            web::resource("/api/clients/{id}")
                .route(web::put().to(update_client))
                .route(web::delete().to(delete_client)),
        )
        // Routes
        .service(
            web::resource("/api/routes")
                .route(web::get().to(list_routes))
                .route(web::post().to(create_route)),
        )
        .service(
            web::resource("/api/routes/{id}")
                .route(web::put().to(update_route))
                .route(web::delete().to(delete_route)),
        )
        // Flights
        .service(
            web::resource("/api/flights")
                .route(web::get().to(list_flights))
                .route(web::post().to(create_flight)),
        )
        .route("/api/flights/options", web::get().to(flight_options))
        .service(
            web::resource("/api/flights/{id}")
                .route(web::put().to(update_flight))
                .route(web::delete().to(delete_flight)),
        )
        // Reservations
        .service(
            web::resource("/api/reservations")
                .route(web::get().to(list_reservations))
                .route(web::post().to(create_reservation)),
        )
        .route("/api/reservations/options", web::get().to(reservation_options))
        .service(
            web::resource("/api/reservations/{id}")
                .route(web::put().to(update_reservation))
                .route(web::delete().to(delete_reservation)),
        )
        // Passengers
        .service(
            web::resource("/api/passengers")
                .route(web::get().to(list_passengers))
                .route(web::post().to(create_passenger)),
        )
        .route("/api/passengers/options", web::get().to(passenger_options))
        .service(
            web::resource("/api/passengers/{id}")
                .route(web::put().to(update_passenger))
                .route(web::delete().to(delete_passenger)),
        )
        // Roles
        .service(
            web::resource("/api/roles")
                .route(web::get().to(list_roles))
                .route(web::post().to(create_role)),
        )
        .service(
            web::resource("/api/roles/{id}")
                .route(web::put().to(update_role))
                .route(web::delete().to(delete_role)),
        )
        // System users
        .service(
            web::resource("/api/users")
                .route(web::get().to(list_users))
                .route(web::post().to(create_user)),
        )
        .route("/api/users/options", web::get().to(user_options))
        .service(
            web::resource("/api/users/{id}")
                .route(web::put().to(update_user))
                .route(web::delete().to(delete_user)),
        )
        // Activity log
        .route("/api/logs", web::get().to(list_logs))
        .route("/api/logs/options", web::get().to(log_options));
}
