pub mod activity_log_repository;
pub mod client_repository;
pub mod dashboard_repository;
pub mod flight_repository;
pub mod passenger_repository;
pub mod plane_repository;
pub mod reservation_repository;
pub mod role_repository;
pub mod route_repository;
pub mod system_user_repository;

pub use activity_log_repository::*;
pub use client_repository::*;
pub use dashboard_repository::*;
pub use flight_repository::*;
pub use passenger_repository::*;
pub use plane_repository::*;
pub use reservation_repository::*;
pub use role_repository::*;
pub use route_repository::*;
pub use system_user_repository::*;
