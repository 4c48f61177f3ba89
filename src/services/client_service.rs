use crate::models::{tables, AuditAction, Client, ClientForm, ClientPatch, ServiceError};
use crate::repositories::ClientRepository;
use crate::services::activity_log_service::{delete_record, patch_record, row_record};
use crate::services::ActivityLogService;
use std::sync::Arc;

const DUPLICATE_EMAIL: &str = "A client with that email already exists";
const DUPLICATE_PHONE: &str = "A client with that phone number already exists";

pub struct ClientService {
    repository: Arc<dyn ClientRepository>,
    activity_log: Arc<ActivityLogService>,
}

impl ClientService {
    pub fn new(repository: Arc<dyn ClientRepository>, activity_log: Arc<ActivityLogService>) -> Self {
        Self {
            repository,
            activity_log,
        }
    }

    pub async fn list(&self) -> Result<Vec<Client>, ServiceError> {
        self.repository.find_all().await
    }

    pub async fn create(&self, form: &ClientForm, actor: i64) -> Result<Client, ServiceError> {
        let new_client = form.validate()?;
        self.ensure_unique(new_client.email.as_deref(), new_client.phone.as_deref(), None)
            .await?;

        let client = self.repository.insert(&new_client).await?;

        tracing::info!(client_id = client.id, "Created client {}", client.name);
        self.activity_log
            .record(actor, tables::CLIENTS, AuditAction::Insert, row_record(&client))
            .await;
        Ok(client)
    }

    pub async fn update(&self, id: i64, patch: &ClientPatch, actor: i64) -> Result<Client, ServiceError> {
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Client", id))?;
        let client = existing.apply(patch)?;

        // Only fields present in the patch are checked against other clients
        self.ensure_unique(
            patch.email_to_check().as_deref(),
            patch.phone_to_check().as_deref(),
            Some(id),
        )
        .await?;

        self.repository.update(&client).await?;

        tracing::info!(client_id = id, "Updated client");
        self.activity_log
            .record(actor, tables::CLIENTS, AuditAction::Update, patch_record(id, patch))
            .await;
        Ok(client)
    }

    pub async fn remove(&self, id: i64, actor: i64) -> Result<(), ServiceError> {
        if !self.repository.delete(id).await? {
            return Err(ServiceError::not_found("Client", id));
        }

        tracing::info!(client_id = id, "Deleted client");
        self.activity_log
            .record(actor, tables::CLIENTS, AuditAction::Delete, delete_record(id))
            .await;
        Ok(())
    }

    async fn ensure_unique(
        &self,
        email: Option<&str>,
        phone: Option<&str>,
        exclude_id: Option<i64>,
    ) -> Result<(), ServiceError> {
        if let Some(email) = email {
            if self.repository.find_id_by_email(email, exclude_id).await?.is_some() {
                return Err(ServiceError::ValidationError(DUPLICATE_EMAIL.to_string()));
            }
        }
        if let Some(phone) = phone {
            if self.repository.find_id_by_phone(phone, exclude_id).await?.is_some() {
                return Err(ServiceError::ValidationError(DUPLICATE_PHONE.to_string()));
            }
        }
        Ok(())
    }
}
