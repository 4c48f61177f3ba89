// Re-export all models organized by domain
pub mod activity;
pub mod api;
pub mod client;
pub mod errors;
pub mod flight;
pub mod passenger;
pub mod plane;
pub mod reservation;
pub mod role;
pub mod route;
pub mod system_user;
pub mod validation;

pub use activity::*;
pub use api::*;
pub use client::*;
pub use errors::*;
pub use flight::*;
pub use passenger::*;
pub use plane::*;
pub use reservation::*;
pub use role::*;
pub use route::*;
pub use system_user::*;
