use crate::models::{tables, AuditAction, Route, RouteForm, RoutePatch, ServiceError};
use crate::repositories::RouteRepository;
use crate::services::activity_log_service::{delete_record, patch_record, row_record};
use crate::services::ActivityLogService;
use std::sync::Arc;

pub struct RouteService {
    repository: Arc<dyn RouteRepository>,
    activity_log: Arc<ActivityLogService>,
}

impl RouteService {
    pub fn new(repository: Arc<dyn RouteRepository>, activity_log: Arc<ActivityLogService>) -> Self {
        Self {
            repository,
            activity_log,
        }
    }

    pub async fn list(&self) -> Result<Vec<Route>, ServiceError> {
        self.repository.find_all().await
    }

    pub async fn create(&self, form: &RouteForm, actor: i64) -> Result<Route, ServiceError> {
        let form = form.validate()?;
        let route = self.repository.insert(&form).await?;

        tracing::info!(route_id = route.id, "Created route {} -> {}", route.origin, route.destination);
        self.activity_log
            .record(actor, tables::ROUTES, AuditAction::Insert, row_record(&route))
            .await;
        Ok(route)
    }

    pub async fn update(&self, id: i64, patch: &RoutePatch, actor: i64) -> Result<Route, ServiceError> {
        let route = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Route", id))?
            .apply(patch)?;

        self.repository.update(&route).await?;

        tracing::info!(route_id = id, "Updated route");
        self.activity_log
            .record(actor, tables::ROUTES, AuditAction::Update, patch_record(id, patch))
            .await;
        Ok(route)
    }

    pub async fn remove(&self, id: i64, actor: i64) -> Result<(), ServiceError> {
        if !self.repository.delete(id).await? {
            return Err(ServiceError::not_found("Route", id));
        }

        tracing::info!(route_id = id, "Deleted route");
        self.activity_log
            .record(actor, tables::ROUTES, AuditAction::Delete, delete_record(id))
            .await;
        Ok(())
    }
}
