use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            ServiceError::DatabaseError(_) | ServiceError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ServiceError::ValidationError(msg)
            | ServiceError::NotFound(msg)
            | ServiceError::AuthenticationError(msg) => msg.clone(),
            ServiceError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                "Database error occurred".to_string()
            }
            ServiceError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
        };

        HttpResponse::build(self.status_code()).json(json!({
            "success": false,
            "message": message
        }))
    }
}

// Constraint violations surface as the same message the read-before-write checks produce
impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return ServiceError::ValidationError(
                    "A record with that value already exists".to_string(),
                );
            }
            if db_err.is_foreign_key_violation() {
                return ServiceError::ValidationError(
                    "The record references a missing row or is still referenced by other records"
                        .to_string(),
                );
            }
            if db_err.is_check_violation() {
                return ServiceError::ValidationError(format!(
                    "Value rejected by database constraint: {}",
                    db_err.message()
                ));
            }
        }
        ServiceError::DatabaseError(err.to_string())
    }
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i64) -> Self {
        ServiceError::NotFound(format!("{} {} not found", entity, id))
    }
}
