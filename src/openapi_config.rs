use std::collections::BTreeMap;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityRequirement, SecurityScheme};
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa::OpenApi;

use crate::handlers;
use crate::models::{
    ApiResponse, Client, ClientForm, ClientOption, ClientPatch, Dashboard, DashboardStats,
    ErrorResponse, Flight, FlightDetails, FlightForm, FlightOption, FlightOptions, FlightPatch,
    LogEntry, LogEntryDetails, LogOptions, LoginForm, LoginResponse, Passenger, PassengerDetails,
    PassengerForm, PassengerOptions, PassengerPatch, Plane, PlaneForm, PlanePatch, Reservation,
    ReservationDetails, ReservationForm, ReservationOptions, ReservationPatch, ReservationSummary,
    Role, RoleForm, Route, RouteForm, RoutePatch, SessionUser, SystemUser,
    SystemUserDetails, SystemUserForm, SystemUserOptions, SystemUserPatch, UpcomingFlight,
    UserOption,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GreenAirways Admin API",
        description = "Administration backend for the GreenAirways fleet, schedule and bookings"
    ),
    paths(
        handlers::auth::login_api,
        handlers::auth::logout_api,
        handlers::auth::session_api,
        handlers::dashboard::dashboard_api,
        handlers::planes::list_planes,
        handlers::planes::create_plane,
        handlers::planes::update_plane,
        handlers::planes::delete_plane,
        handlers::clients::list_clients,
        handlers::clients::create_client,
        handlers::clients::update_client,
        handlers::clients::delete_client,
        handlers::routes::list_routes,
        handlers::routes::create_route,
        handlers::routes::update_route,
        handlers::routes::delete_route,
        handlers::flights::list_flights,
        handlers::flights::flight_options,
        handlers::flights::create_flight,
        handlers::flights::update_flight,
        handlers::flights::delete_flight,
        handlers::reservations::list_reservations,
        handlers::reservations::reservation_options,
        handlers::reservations::create_reservation,
        handlers::reservations::update_reservation,
        handlers::reservations::delete_reservation,
        handlers::passengers::list_passengers,
        handlers::passengers::passenger_options,
        handlers::passengers::create_passenger,
        handlers::passengers::update_passenger,
        handlers::passengers::delete_passenger,
        handlers::roles::list_roles,
        handlers::roles::create_role,
        handlers::roles::update_role,
        handlers::roles::delete_role,
        handlers::users::list_users,
        handlers::users::user_options,
        handlers::users::create_user,
        handlers::users::update_user,
        handlers::users::delete_user,
        handlers::logs::list_logs,
        handlers::logs::log_options,
    ),
    components(schemas(
        ApiResponse, ErrorResponse, LoginForm, LoginResponse, SessionUser,
        Dashboard, DashboardStats, UpcomingFlight,
        Plane, PlaneForm, PlanePatch,
        Client, ClientForm, ClientPatch,
        Route, RouteForm, RoutePatch,
        Flight, FlightDetails, FlightForm, FlightPatch, FlightOptions,
        Reservation, ReservationDetails, ReservationForm, ReservationPatch, ReservationOptions,
        ReservationSummary, ClientOption, FlightOption,
        Passenger, PassengerDetails, PassengerForm, PassengerPatch, PassengerOptions,
        Role, RoleForm,
        SystemUser, SystemUserDetails, SystemUserForm, SystemUserPatch, SystemUserOptions, UserOption,
        LogEntry, LogEntryDetails, LogOptions,
    )),
    tags(
        (name = "auth", description = "Administrator sign-in"),
        (name = "dashboard", description = "Counts and upcoming flights"),
        (name = "planes", description = "Fleet"),
        (name = "clients", description = "Customers"),
        (name = "routes", description = "Origin / destination pairs"),
        (name = "flights", description = "Scheduled flights"),
        (name = "reservations", description = "Bookings"),
        (name = "passengers", description = "Travellers on a reservation"),
        (name = "roles", description = "System user roles"),
        (name = "users", description = "System users"),
        (name = "logs", description = "Activity log"),
    )
)]
pub struct ApiDoc;

pub fn configure_openapi(mut openapi: OpenApiSpec) -> OpenApiSpec {
    // HTTP Bearer, not ApiKey
    let mut security_schemes = BTreeMap::new();
    security_schemes.insert(
        "bearer_auth".to_string(),
        SecurityScheme::Http(
            HttpBuilder::new()
                .scheme(HttpAuthScheme::Bearer)
                .bearer_format("JWT")
                .description(Some("JWT issued by /api/login"))
                .build(),
        ),
    );

    if let Some(components) = openapi.components.as_mut() {
        components.security_schemes = security_schemes;
    }

    // Applies to every path except those declaring `security()`
    openapi.security = Some(vec![SecurityRequirement::new(
        "bearer_auth",
        Vec::<String>::new(),
    )]);

    openapi
}

/// The served document, with the bearer scheme attached.
pub fn api_doc() -> OpenApiSpec {
    configure_openapi(ApiDoc::openapi())
}
