use actix_web::HttpRequest;
use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};

use crate::models::{ServiceError, SessionUser};

/// Token lifetime in hours.
pub const TOKEN_TTL_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (system user id)
    pub username: String,
    pub email: String,
    pub role: i64,
    pub exp: usize, // Expiration time
    pub iat: usize, // Issued at
}

impl Claims {
    pub fn user_id(&self) -> Result<i64, ServiceError> {
        self.sub
            .parse()
            .map_err(|_| ServiceError::AuthenticationError("Invalid token subject".to_string()))
    }
}

#[derive(Clone)]
pub struct JwtManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtManager {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
        }
    }

    pub fn generate_token(&self, user: &SessionUser) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let expires_in = Duration::hours(TOKEN_TTL_HOURS);

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role_id,
            exp: (now + expires_in).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    pub fn verify_token(
        &self,
        token: &str,
    ) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
    }
}

pub fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    let auth_header = req
        .headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?;

    // Swagger UI sometimes sends the scheme twice
    match auth_header.strip_prefix("bearer ") {
        Some(token) => Some(token.to_string()),
        None => Some(auth_header.to_string()),
    }
}

pub fn verify_jwt(req: &HttpRequest, jwt_manager: &JwtManager) -> Result<Claims, ServiceError> {
    let token = extract_token_from_header(req).ok_or_else(|| {
        ServiceError::AuthenticationError("Missing Authorization header".to_string())
    })?;

    jwt_manager
        .verify_token(&token)
        .map(|token_data| token_data.claims)
        .map_err(|_| ServiceError::AuthenticationError("Invalid token".to_string()))
}

pub fn hash_password(password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ServiceError::InternalError(format!("Failed to hash password: {}", e)))
}

/// False for a wrong password and for a stored hash that does not parse.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            tracing::warn!("Stored password hash is not a valid PHC string: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> SessionUser {
        SessionUser {
            id: 7,
            username: "admin".to_string(),
            role_id: 1,
            email: "admin@greenairways.com".to_string(),
        }
    }

    #[test]
    fn token_round_trips_claims() {
        let manager = JwtManager::new("test_secret_key");
        let token = manager.generate_token(&admin()).unwrap();
        let claims = manager.verify_token(&token).unwrap().claims;
        assert_eq!(claims.user_id().unwrap(), 7);
        assert_eq!(claims.role, 1);
        assert_eq!(claims.email, "admin@greenairways.com");
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = JwtManager::new("one").generate_token(&admin()).unwrap();
        assert!(JwtManager::new("two").verify_token(&token).is_err());
    }

    #[test]
    fn password_hash_verifies() {
        let hash = hash_password("s3cret").unwrap();
        assert!(verify_password("s3cret", &hash));
        assert!(!verify_password("wrong", &hash));
        assert!(!verify_password("s3cret", "plaintext"));
    }
}
