use actix_web::{web, HttpRequest, HttpResponse, Result};
use utoipa;

use crate::auth::{JwtManager, TOKEN_TTL_HOURS};
use crate::middleware::auth::authenticate_request;
use crate::handlers::data_response;
use crate::models::{ApiResponse, ErrorResponse, LoginForm, LoginResponse, ServiceError, SessionUser};
use crate::services::AuthService;

#[utoipa::path(
    post,
    path = "/api/login",
    tag = "auth",
    request_body = LoginForm,
    responses(
        (status = 200, description = "Login successful - JWT token returned in response body", body = LoginResponse),
        (status = 400, description = "Email or password missing", body = ErrorResponse),
        (status = 401, description = "Invalid credentials or not an administrator", body = ErrorResponse)
    ),
    security()
)]
pub async fn login_api(
    auth_service: web::Data<AuthService>,
    form: web::Json<LoginForm>,
    jwt_manager: web::Data<JwtManager>,
) -> Result<HttpResponse, ServiceError> {
    let user = auth_service.login(&form.email, &form.password).await?;

    let token = jwt_manager.generate_token(&user).map_err(|e| {
        ServiceError::InternalError(format!("Failed to generate token: {}", e))
    })?;

    tracing::info!(system_user_id = user.id, "Administrator signed in");
    Ok(HttpResponse::Ok().json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
        expires_in: (TOKEN_TTL_HOURS * 3600) as u64,
        user,
    }))
}

#[utoipa::path(
    post,
    path = "/api/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Logout successful", body = ApiResponse)
    ),
    security()
)]
pub async fn logout_api() -> Result<HttpResponse, ServiceError> {
    // Tokens are stateless; the client drops its copy.
    Ok(HttpResponse::Ok().json(ApiResponse {
        success: true,
        message: "Logout successful - discard your token".to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/session",
    tag = "auth",
    responses(
        (status = 200, description = "The signed-in administrator", body = SessionUser),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn session_api(
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let user = authenticate_request(&req, &jwt_manager, &auth_service).await?;
    Ok(data_response(user))
}
