use crate::auth::{verify_jwt, JwtManager};
use crate::models::{ServiceError, SessionUser};
use crate::services::AuthService;

/// Verifies the bearer token, then reloads its subject so that deleted or
/// demoted administrators lose access before the token expires. The returned
/// user identifies the actor for audit records.
pub async fn authenticate_request(
    req: &actix_web::HttpRequest,
    jwt_manager: &JwtManager,
    auth_service: &AuthService,
) -> Result<SessionUser, ServiceError> {
    let claims = verify_jwt(req, jwt_manager)
        .map_err(|_| ServiceError::AuthenticationError("Not authenticated".to_string()))?;
    auth_service.active_admin(claims.user_id()?).await
}

/// Id of the authenticated administrator.
pub async fn authenticated_user_id(
    req: &actix_web::HttpRequest,
    jwt_manager: &JwtManager,
    auth_service: &AuthService,
) -> Result<i64, ServiceError> {
    Ok(authenticate_request(req, jwt_manager, auth_service).await?.id)
}
