use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{validation, Role, ServiceError};

/// Staff account allowed to use the admin API. Only the argon2 hash of the
/// password is stored, and it never leaves the server.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, ToSchema)]
pub struct SystemUser {
    pub id: i64,
    pub username: String,
    pub role_id: Option<i64>,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, ToSchema)]
pub struct SystemUserDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub user: SystemUser,
    pub role_name: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, ToSchema)]
pub struct UserOption {
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SystemUserOptions {
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SystemUserForm {
    pub username: String,
    pub role_id: Option<i64>,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SystemUserPatch {
    pub username: Option<String>,
    pub role_id: Option<i64>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Validated user fields with the password still in clear text; the service
/// hashes it before anything is written.
#[derive(Debug, Clone)]
pub struct ValidatedUser {
    pub username: String,
    pub role_id: i64,
    pub email: String,
    pub password: String,
}

const ALL_FIELDS_REQUIRED: &str = "All fields are required";

impl SystemUserForm {
    pub fn validate(&self) -> Result<ValidatedUser, ServiceError> {
        let username = validation::required(&self.username, ALL_FIELDS_REQUIRED)?;
        let role_id = self
            .role_id
            .ok_or_else(|| ServiceError::ValidationError(ALL_FIELDS_REQUIRED.to_string()))?;
        validation::required(&self.email, ALL_FIELDS_REQUIRED)?;
        // Passwords are kept exactly as typed
        validation::required(&self.password, ALL_FIELDS_REQUIRED)?;
        let email = validation::email(&self.email)?;

        Ok(ValidatedUser {
            username,
            role_id,
            email,
            password: self.password.clone(),
        })
    }
}

impl SystemUserPatch {
    pub fn email_to_check(&self) -> Option<String> {
        validation::optional(self.email.as_deref())
    }

    /// Patch contents safe to write to the activity log.
    pub fn audit_view(&self) -> serde_json::Value {
        let mut fields = serde_json::Map::new();
        if let Some(username) = &self.username {
            fields.insert("username".to_string(), username.trim().into());
        }
        if let Some(role_id) = self.role_id {
            fields.insert("role_id".to_string(), role_id.into());
        }
        if let Some(email) = &self.email {
            fields.insert("email".to_string(), email.trim().into());
        }
        if self.password.is_some() {
            fields.insert("password_changed".to_string(), true.into());
        }
        serde_json::Value::Object(fields)
    }
}

impl SystemUser {
    /// Merges the patch. A new password must already be hashed by the caller.
    pub fn apply(
        self,
        patch: &SystemUserPatch,
        new_password_hash: Option<String>,
    ) -> Result<SystemUser, ServiceError> {
        Ok(SystemUser {
            id: self.id,
            username: match &patch.username {
                Some(username) => validation::required(username, ALL_FIELDS_REQUIRED)?,
                None => self.username,
            },
            role_id: patch.role_id.or(self.role_id),
            email: match &patch.email {
                Some(email) => validation::email(email)?,
                None => self.email,
            },
            password_hash: new_password_hash.unwrap_or(self.password_hash),
        })
    }
}
