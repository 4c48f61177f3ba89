pub mod activity_log_service;
pub mod auth_service;
pub mod client_service;
pub mod dashboard_service;
pub mod flight_service;
pub mod passenger_service;
pub mod plane_service;
pub mod reservation_service;
pub mod role_service;
pub mod route_service;
pub mod system_user_service;

pub use activity_log_service::ActivityLogService;
pub use auth_service::AuthService;
pub use client_service::ClientService;
pub use dashboard_service::DashboardService;
pub use flight_service::FlightService;
pub use passenger_service::PassengerService;
pub use plane_service::PlaneService;
pub use reservation_service::ReservationService;
pub use role_service::RoleService;
pub use route_service::RouteService;
pub use system_user_service::SystemUserService;
