use crate::models::{tables, AuditAction, Plane, PlaneForm, PlanePatch, ServiceError};
use crate::repositories::PlaneRepository;
use crate::services::activity_log_service::{delete_record, patch_record, row_record};
use crate::services::ActivityLogService;
use std::sync::Arc;

pub struct PlaneService {
    repository: Arc<dyn PlaneRepository>,
    activity_log: Arc<ActivityLogService>,
}

impl PlaneService {
    pub fn new(repository: Arc<dyn PlaneRepository>, activity_log: Arc<ActivityLogService>) -> Self {
        Self {
            repository,
            activity_log,
        }
    }

    pub async fn list(&self) -> Result<Vec<Plane>, ServiceError> {
        self.repository.find_all().await
    }

    pub async fn create(&self, form: &PlaneForm, actor: i64) -> Result<Plane, ServiceError> {
        let form = form.validate()?;
        let plane = self.repository.insert(&form).await?;

        tracing::info!(plane_id = plane.id, "Created plane {}", plane.model);
        self.activity_log
            .record(actor, tables::PLANES, AuditAction::Insert, row_record(&plane))
            .await;
        Ok(plane)
    }

    pub async fn update(&self, id: i64, patch: &PlanePatch, actor: i64) -> Result<Plane, ServiceError> {
        let plane = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Plane", id))?
            .apply(patch)?;

        self.repository.update(&plane).await?;

        tracing::info!(plane_id = id, "Updated plane");
        self.activity_log
            .record(actor, tables::PLANES, AuditAction::Update, patch_record(id, patch))
            .await;
        Ok(plane)
    }

    pub async fn remove(&self, id: i64, actor: i64) -> Result<(), ServiceError> {
        if !self.repository.delete(id).await? {
            return Err(ServiceError::not_found("Plane", id));
        }

        tracing::info!(plane_id = id, "Deleted plane");
        self.activity_log
            .record(actor, tables::PLANES, AuditAction::Delete, delete_record(id))
            .await;
        Ok(())
    }
}
