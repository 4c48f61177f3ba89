use crate::models::{
    tables, AuditAction, Passenger, PassengerDetails, PassengerForm, PassengerOptions,
    PassengerPatch, ServiceError,
};
use crate::repositories::{PassengerRepository, ReservationRepository};
use crate::services::activity_log_service::{delete_record, patch_record, row_record};
use crate::services::ActivityLogService;
use std::sync::Arc;

pub struct PassengerService {
    repository: Arc<dyn PassengerRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
    activity_log: Arc<ActivityLogService>,
}

impl PassengerService {
    pub fn new(
        repository: Arc<dyn PassengerRepository>,
        reservation_repository: Arc<dyn ReservationRepository>,
        activity_log: Arc<ActivityLogService>,
    ) -> Self {
        Self {
            repository,
            reservation_repository,
            activity_log,
        }
    }

    pub async fn list(&self) -> Result<Vec<PassengerDetails>, ServiceError> {
        self.repository.find_all_details().await
    }

    pub async fn create(&self, form: &PassengerForm, actor: i64) -> Result<Passenger, ServiceError> {
        let new_passenger = form.validate()?;
        let passenger = self.repository.insert(&new_passenger).await?;

        tracing::info!(passenger_id = passenger.id, "Created passenger {}", passenger.name);
        self.activity_log
            .record(actor, tables::PASSENGERS, AuditAction::Insert, row_record(&passenger))
            .await;
        Ok(passenger)
    }

    pub async fn update(
        &self,
        id: i64,
        patch: &PassengerPatch,
        actor: i64,
    ) -> Result<Passenger, ServiceError> {
        let passenger = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Passenger", id))?
            .apply(patch)?;

        self.repository.update(&passenger).await?;

        tracing::info!(passenger_id = id, "Updated passenger");
        self.activity_log
            .record(actor, tables::PASSENGERS, AuditAction::Update, patch_record(id, patch))
            .await;
        Ok(passenger)
    }

    pub async fn remove(&self, id: i64, actor: i64) -> Result<(), ServiceError> {
        if !self.repository.delete(id).await? {
            return Err(ServiceError::not_found("Passenger", id));
        }

        tracing::info!(passenger_id = id, "Deleted passenger");
        self.activity_log
            .record(actor, tables::PASSENGERS, AuditAction::Delete, delete_record(id))
            .await;
        Ok(())
    }

    pub async fn options(&self) -> Result<PassengerOptions, ServiceError> {
        Ok(PassengerOptions {
            reservations: self.reservation_repository.find_summaries().await?,
        })
    }
}
