use crate::models::{tables, AuditAction, Role, RoleForm, ServiceError};
use crate::repositories::RoleRepository;
use crate::services::activity_log_service::{delete_record, patch_record, row_record};
use crate::services::ActivityLogService;
use std::sync::Arc;

const DUPLICATE_NAME: &str = "A role with that name already exists";

pub struct RoleService {
    repository: Arc<dyn RoleRepository>,
    activity_log: Arc<ActivityLogService>,
}

impl RoleService {
    pub fn new(repository: Arc<dyn RoleRepository>, activity_log: Arc<ActivityLogService>) -> Self {
        Self {
            repository,
            activity_log,
        }
    }

    pub async fn list(&self) -> Result<Vec<Role>, ServiceError> {
        self.repository.find_all().await
    }

    pub async fn create(&self, form: &RoleForm, actor: i64) -> Result<Role, ServiceError> {
        let form = form.validate()?;
        if self.repository.find_id_by_name(&form.name, None).await?.is_some() {
            return Err(ServiceError::ValidationError(DUPLICATE_NAME.to_string()));
        }

        let role = self.repository.insert(&form.name).await?;

        tracing::info!(role_id = role.id, "Created role {}", role.name);
        self.activity_log
            .record(actor, tables::ROLES, AuditAction::Insert, row_record(&role))
            .await;
        Ok(role)
    }

    pub async fn update(&self, id: i64, form: &RoleForm, actor: i64) -> Result<Role, ServiceError> {
        let form = form.validate()?;
        let mut role = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Role", id))?;

        if self.repository.find_id_by_name(&form.name, Some(id)).await?.is_some() {
            return Err(ServiceError::ValidationError(DUPLICATE_NAME.to_string()));
        }

        role.name = form.name.clone();
        self.repository.update(&role).await?;

        tracing::info!(role_id = id, "Updated role");
        self.activity_log
            .record(actor, tables::ROLES, AuditAction::Update, patch_record(id, &form))
            .await;
        Ok(role)
    }

    pub async fn remove(&self, id: i64, actor: i64) -> Result<(), ServiceError> {
        if !self.repository.delete(id).await? {
            return Err(ServiceError::not_found("Role", id));
        }

        tracing::info!(role_id = id, "Deleted role");
        self.activity_log
            .record(actor, tables::ROLES, AuditAction::Delete, delete_record(id))
            .await;
        Ok(())
    }
}
