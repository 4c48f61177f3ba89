use crate::auth::verify_password;
use crate::models::{ServiceError, SessionUser, SystemUser, ADMIN_ROLE_ID};
use crate::repositories::SystemUserRepository;
use std::sync::Arc;

const LOGIN_DENIED: &str = "Invalid credentials or access denied. Only administrators can sign in.";

pub struct AuthService {
    user_repository: Arc<dyn SystemUserRepository>,
}

impl AuthService {
    pub fn new(user_repository: Arc<dyn SystemUserRepository>) -> Self {
        Self { user_repository }
    }

    /// Checks email and password against the system users. Only the
    /// administrator role may sign in.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser, ServiceError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ServiceError::ValidationError(
                "Email and password are required".to_string(),
            ));
        }

        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::AuthenticationError(LOGIN_DENIED.to_string()))?;

        if !verify_password(password, &user.password_hash) {
            tracing::warn!(email, "Rejected login: wrong password");
            return Err(ServiceError::AuthenticationError(LOGIN_DENIED.to_string()));
        }

        session_user(user).ok_or_else(|| {
            tracing::warn!(email, "Rejected login: not an administrator");
            ServiceError::AuthenticationError(LOGIN_DENIED.to_string())
        })
    }

    /// Reloads the user behind a token. Fails when the account was deleted
    /// or no longer holds the administrator role.
    pub async fn active_admin(&self, user_id: i64) -> Result<SessionUser, ServiceError> {
        let user = self.user_repository.find_by_id(user_id).await?;
        user.and_then(session_user).ok_or_else(|| {
            tracing::warn!(
                system_user_id = user_id,
                "Rejected token: account gone or not an administrator"
            );
            ServiceError::AuthenticationError("Not authenticated".to_string())
        })
    }
}

fn session_user(user: SystemUser) -> Option<SessionUser> {
    match user.role_id {
        Some(role_id) if role_id == ADMIN_ROLE_ID => Some(SessionUser {
            id: user.id,
            username: user.username,
            role_id,
            email: user.email,
        }),
        _ => None,
    }
}
