use crate::models::{NewReservation, Reservation, ReservationDetails, ReservationSummary, ServiceError};
use async_trait::async_trait;
use sqlx::SqlitePool;

const RESERVATION_COLUMNS: &str =
    "id, client_id, flight_id, reservation_date, reservation_code, notes";

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn find_all_details(&self) -> Result<Vec<ReservationDetails>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Reservation>, ServiceError>;
    async fn find_summaries(&self) -> Result<Vec<ReservationSummary>, ServiceError>;
    async fn insert(&self, reservation: &NewReservation) -> Result<Reservation, ServiceError>;
    async fn update(&self, reservation: &Reservation) -> Result<(), ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

pub struct SqliteReservationRepository {
    pool: SqlitePool,
}

impl SqliteReservationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for SqliteReservationRepository {
    async fn find_all_details(&self) -> Result<Vec<ReservationDetails>, ServiceError> {
        let reservations = sqlx::query_as::<_, ReservationDetails>(
            "SELECT res.id, res.client_id, res.flight_id, res.reservation_date, res.reservation_code, res.notes,
                    c.name AS client_name, c.identification AS client_identification,
                    f.departure_date, f.departure_time,
                    r.origin AS route_origin, r.destination AS route_destination
             FROM reservations res
             LEFT JOIN clients c ON c.id = res.client_id
             LEFT JOIN flights f ON f.id = res.flight_id
             LEFT JOIN routes r ON r.id = f.route_id
             ORDER BY res.reservation_date DESC, res.id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Reservation>, ServiceError> {
        let reservation = sqlx::query_as::<_, Reservation>(&format!(
            "SELECT {} FROM reservations WHERE id = ?",
            RESERVATION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(reservation)
    }

    async fn find_summaries(&self) -> Result<Vec<ReservationSummary>, ServiceError> {
        let summaries = sqlx::query_as::<_, ReservationSummary>(
            "SELECT res.id, res.reservation_code, c.name AS client_name, f.departure_date,
                    r.origin AS route_origin, r.destination AS route_destination
             FROM reservations res
             LEFT JOIN clients c ON c.id = res.client_id
             LEFT JOIN flights f ON f.id = res.flight_id
             LEFT JOIN routes r ON r.id = f.route_id
             ORDER BY res.reservation_date DESC, res.id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(summaries)
    }

    async fn insert(&self, reservation: &NewReservation) -> Result<Reservation, ServiceError> {
        let created = sqlx::query_as::<_, Reservation>(&format!(
            "INSERT INTO reservations (client_id, flight_id, reservation_date, reservation_code, notes)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {}",
            RESERVATION_COLUMNS
        ))
        .bind(reservation.client_id)
        .bind(reservation.flight_id)
        .bind(reservation.reservation_date)
        .bind(&reservation.reservation_code)
        .bind(&reservation.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, reservation: &Reservation) -> Result<(), ServiceError> {
        sqlx::query(
            "UPDATE reservations SET client_id = ?, flight_id = ?, reservation_date = ?,
                    reservation_code = ?, notes = ?
             WHERE id = ?",
        )
        .bind(reservation.client_id)
        .bind(reservation.flight_id)
        .bind(reservation.reservation_date)
        .bind(&reservation.reservation_code)
        .bind(&reservation.notes)
        .bind(reservation.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
