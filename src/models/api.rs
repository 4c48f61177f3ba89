use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::UpcomingFlight;

// =============================================================================
// REQUEST TYPES
// =============================================================================

#[derive(Deserialize, ToSchema)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive match on origin or destination
    pub search: Option<String>,
}

// =============================================================================
// RESPONSE TYPES
// =============================================================================

#[derive(Serialize, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

/// The signed-in administrator, as carried in the token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub role_id: i64,
    pub email: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub expires_in: u64, // seconds
    pub user: SessionUser,
}

#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct DashboardStats {
    pub flights: i64,
    pub reservations: i64,
    pub clients: i64,
    pub planes: i64,
}

/// Payload of `GET /api/dashboard`.
#[derive(Serialize, ToSchema)]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub upcoming_flights: Vec<UpcomingFlight>,
}
