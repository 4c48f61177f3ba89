use crate::auth::hash_password;
use crate::models::{
    tables, AuditAction, ServiceError, SystemUser, SystemUserDetails, SystemUserForm,
    SystemUserOptions, SystemUserPatch, ADMIN_ROLE_ID,
};
use crate::repositories::{NewSystemUser, RoleRepository, SystemUserRepository};
use crate::services::activity_log_service::{delete_record, patch_record, row_record};
use crate::services::ActivityLogService;
use std::sync::Arc;

const DUPLICATE_EMAIL: &str = "A user with that email already exists";

pub struct SystemUserService {
    repository: Arc<dyn SystemUserRepository>,
    role_repository: Arc<dyn RoleRepository>,
    activity_log: Arc<ActivityLogService>,
}

impl SystemUserService {
    pub fn new(
        repository: Arc<dyn SystemUserRepository>,
        role_repository: Arc<dyn RoleRepository>,
        activity_log: Arc<ActivityLogService>,
    ) -> Self {
        Self {
            repository,
            role_repository,
            activity_log,
        }
    }

    pub async fn list(&self) -> Result<Vec<SystemUserDetails>, ServiceError> {
        self.repository.find_all_details().await
    }

    pub async fn create(&self, form: &SystemUserForm, actor: i64) -> Result<SystemUser, ServiceError> {
        let validated = form.validate()?;
        if self.repository.find_id_by_email(&validated.email, None).await?.is_some() {
            return Err(ServiceError::ValidationError(DUPLICATE_EMAIL.to_string()));
        }

        let password_hash = hash_password(&validated.password)?;
        let user = self
            .repository
            .insert(NewSystemUser {
                username: &validated.username,
                role_id: validated.role_id,
                email: &validated.email,
                password_hash: &password_hash,
            })
            .await?;

        tracing::info!(system_user_id = user.id, "Created system user {}", user.username);
        self.activity_log
            .record(actor, tables::SYSTEM_USERS, AuditAction::Insert, row_record(&user))
            .await;
        Ok(user)
    }

    pub async fn update(
        &self,
        id: i64,
        patch: &SystemUserPatch,
        actor: i64,
    ) -> Result<SystemUser, ServiceError> {
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("System user", id))?;

        if let Some(email) = patch.email_to_check() {
            if self.repository.find_id_by_email(&email, Some(id)).await?.is_some() {
                return Err(ServiceError::ValidationError(DUPLICATE_EMAIL.to_string()));
            }
        }

        let new_password_hash = match patch.password.as_deref() {
            Some(password) if password.trim().is_empty() => {
                return Err(ServiceError::ValidationError(
                    "Password cannot be blank".to_string(),
                ))
            }
            Some(password) => Some(hash_password(password)?),
            None => None,
        };
        let user = existing.apply(patch, new_password_hash)?;

        self.repository.update(&user).await?;

        tracing::info!(system_user_id = id, "Updated system user");
        self.activity_log
            .record(
                actor,
                tables::SYSTEM_USERS,
                AuditAction::Update,
                patch_record(id, &patch.audit_view()),
            )
            .await;
        Ok(user)
    }

    pub async fn remove(&self, id: i64, actor: i64) -> Result<(), ServiceError> {
        if id == actor {
            return Err(ServiceError::ValidationError(
                "You cannot delete your own account".to_string(),
            ));
        }
        if !self.repository.delete(id).await? {
            return Err(ServiceError::not_found("System user", id));
        }

        tracing::info!(system_user_id = id, "Deleted system user");
        self.activity_log
            .record(actor, tables::SYSTEM_USERS, AuditAction::Delete, delete_record(id))
            .await;
        Ok(())
    }

    pub async fn options(&self) -> Result<SystemUserOptions, ServiceError> {
        Ok(SystemUserOptions {
            roles: self.role_repository.find_all().await?,
        })
    }

    /// Creates the first administrator when the user table is empty.
    /// Returns true when an account was created.
    pub async fn bootstrap_admin(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<bool, ServiceError> {
        if self.repository.count().await? > 0 {
            return Ok(false);
        }

        let form = SystemUserForm {
            username: username.to_string(),
            role_id: Some(ADMIN_ROLE_ID),
            email: email.to_string(),
            password: password.to_string(),
        };
        let validated = form.validate()?;
        let password_hash = hash_password(&validated.password)?;

        let user = self
            .repository
            .insert(NewSystemUser {
                username: &validated.username,
                role_id: validated.role_id,
                email: &validated.email,
                password_hash: &password_hash,
            })
            .await?;

        tracing::info!(system_user_id = user.id, "Bootstrapped administrator {}", user.email);
        Ok(true)
    }
}
