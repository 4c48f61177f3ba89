use crate::models::{
    tables, AuditAction, Reservation, ReservationDetails, ReservationForm, ReservationOptions,
    ReservationPatch, ServiceError,
};
use crate::repositories::{ClientRepository, FlightRepository, ReservationRepository};
use crate::services::activity_log_service::{delete_record, patch_record, row_record};
use crate::services::ActivityLogService;
use chrono::Utc;
use std::sync::Arc;

pub struct ReservationService {
    repository: Arc<dyn ReservationRepository>,
    client_repository: Arc<dyn ClientRepository>,
    flight_repository: Arc<dyn FlightRepository>,
    activity_log: Arc<ActivityLogService>,
}

impl ReservationService {
    pub fn new(
        repository: Arc<dyn ReservationRepository>,
        client_repository: Arc<dyn ClientRepository>,
        flight_repository: Arc<dyn FlightRepository>,
        activity_log: Arc<ActivityLogService>,
    ) -> Self {
        Self {
            repository,
            client_repository,
            flight_repository,
            activity_log,
        }
    }

    pub async fn list(&self) -> Result<Vec<ReservationDetails>, ServiceError> {
        self.repository.find_all_details().await
    }

    pub async fn create(&self, form: &ReservationForm, actor: i64) -> Result<Reservation, ServiceError> {
        let new_reservation = form.validate()?;
        let reservation = self.repository.insert(&new_reservation).await?;

        tracing::info!(
            reservation_id = reservation.id,
            "Created reservation {}",
            reservation.reservation_code
        );
        self.activity_log
            .record(actor, tables::RESERVATIONS, AuditAction::Insert, row_record(&reservation))
            .await;
        Ok(reservation)
    }

    pub async fn update(
        &self,
        id: i64,
        patch: ReservationPatch,
        actor: i64,
    ) -> Result<Reservation, ServiceError> {
        let patch = patch.with_resolved_code();
        let reservation = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Reservation", id))?
            .apply(&patch);

        self.repository.update(&reservation).await?;

        tracing::info!(reservation_id = id, "Updated reservation");
        self.activity_log
            .record(actor, tables::RESERVATIONS, AuditAction::Update, patch_record(id, &patch))
            .await;
        Ok(reservation)
    }

    pub async fn remove(&self, id: i64, actor: i64) -> Result<(), ServiceError> {
        if !self.repository.delete(id).await? {
            return Err(ServiceError::not_found("Reservation", id));
        }

        tracing::info!(reservation_id = id, "Deleted reservation");
        self.activity_log
            .record(actor, tables::RESERVATIONS, AuditAction::Delete, delete_record(id))
            .await;
        Ok(())
    }

    /// Clients and flights departing today or later, for the reservation form.
    pub async fn options(&self) -> Result<ReservationOptions, ServiceError> {
        let today = Utc::now().date_naive();
        Ok(ReservationOptions {
            clients: self.client_repository.find_options().await?,
            flights: self.flight_repository.find_upcoming_options(today).await?,
        })
    }
}
