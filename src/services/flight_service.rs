use crate::models::{
    tables, AuditAction, Flight, FlightDetails, FlightForm, FlightOptions, FlightPatch, ServiceError,
};
use crate::repositories::{FlightRepository, PlaneRepository, RouteRepository};
use crate::services::activity_log_service::{delete_record, patch_record, row_record};
use crate::services::ActivityLogService;
use std::sync::Arc;

pub struct FlightService {
    repository: Arc<dyn FlightRepository>,
    route_repository: Arc<dyn RouteRepository>,
    plane_repository: Arc<dyn PlaneRepository>,
    activity_log: Arc<ActivityLogService>,
}

impl FlightService {
    pub fn new(
        repository: Arc<dyn FlightRepository>,
        route_repository: Arc<dyn RouteRepository>,
        plane_repository: Arc<dyn PlaneRepository>,
        activity_log: Arc<ActivityLogService>,
    ) -> Self {
        Self {
            repository,
            route_repository,
            plane_repository,
            activity_log,
        }
    }

    pub async fn list(&self) -> Result<Vec<FlightDetails>, ServiceError> {
        self.repository.find_all_details().await
    }

    pub async fn create(&self, form: &FlightForm, actor: i64) -> Result<Flight, ServiceError> {
        form.validate()?;
        let flight = self.repository.insert(form).await?;

        tracing::info!(
            flight_id = flight.id,
            "Created flight on {} at {}",
            flight.departure_date,
            flight.departure_time
        );
        self.activity_log
            .record(actor, tables::FLIGHTS, AuditAction::Insert, row_record(&flight))
            .await;
        Ok(flight)
    }

    pub async fn update(&self, id: i64, patch: &FlightPatch, actor: i64) -> Result<Flight, ServiceError> {
        let flight = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Flight", id))?
            .apply(patch)?;

        self.repository.update(&flight).await?;

        tracing::info!(flight_id = id, "Updated flight");
        self.activity_log
            .record(actor, tables::FLIGHTS, AuditAction::Update, patch_record(id, patch))
            .await;
        Ok(flight)
    }

    pub async fn remove(&self, id: i64, actor: i64) -> Result<(), ServiceError> {
        if !self.repository.delete(id).await? {
            return Err(ServiceError::not_found("Flight", id));
        }

        tracing::info!(flight_id = id, "Deleted flight");
        self.activity_log
            .record(actor, tables::FLIGHTS, AuditAction::Delete, delete_record(id))
            .await;
        Ok(())
    }

    pub async fn options(&self) -> Result<FlightOptions, ServiceError> {
        Ok(FlightOptions {
            routes: self.route_repository.find_all().await?,
            planes: self.plane_repository.find_all().await?,
        })
    }
}
