use crate::models::{Flight, FlightDetails, FlightForm, FlightOption, ServiceError};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

const FLIGHT_COLUMNS: &str =
    "id, route_id, plane_id, departure_date, departure_time, arrival_time, price";

#[async_trait]
pub trait FlightRepository: Send + Sync {
    async fn find_all_details(&self) -> Result<Vec<FlightDetails>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Flight>, ServiceError>;
    /// Flights departing on or after `from`, soonest first.
    async fn find_upcoming_options(&self, from: NaiveDate) -> Result<Vec<FlightOption>, ServiceError>;
    async fn insert(&self, flight: &FlightForm) -> Result<Flight, ServiceError>;
    async fn update(&self, flight: &Flight) -> Result<(), ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

pub struct SqliteFlightRepository {
    pool: SqlitePool,
}

impl SqliteFlightRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FlightRepository for SqliteFlightRepository {
    async fn find_all_details(&self) -> Result<Vec<FlightDetails>, ServiceError> {
        let flights = sqlx::query_as::<_, FlightDetails>(
            "SELECT f.id, f.route_id, f.plane_id, f.departure_date, f.departure_time, f.arrival_time, f.price,
                    r.origin AS route_origin, r.destination AS route_destination,
                    p.model AS plane_model, p.capacity AS plane_capacity
             FROM flights f
             LEFT JOIN routes r ON r.id = f.route_id
             LEFT JOIN planes p ON p.id = f.plane_id
             ORDER BY f.departure_date ASC, f.departure_time ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(flights)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Flight>, ServiceError> {
        let flight = sqlx::query_as::<_, Flight>(&format!(
            "SELECT {} FROM flights WHERE id = ?",
            FLIGHT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(flight)
    }

    async fn find_upcoming_options(&self, from: NaiveDate) -> Result<Vec<FlightOption>, ServiceError> {
        let flights = sqlx::query_as::<_, FlightOption>(
            "SELECT f.id, f.departure_date, f.departure_time,
                    r.origin AS route_origin, r.destination AS route_destination
             FROM flights f
             LEFT JOIN routes r ON r.id = f.route_id
             WHERE f.departure_date >= ?
             ORDER BY f.departure_date ASC, f.departure_time ASC",
        )
        .bind(from)
        .fetch_all(&self.pool)
        .await?;

        Ok(flights)
    }

    async fn insert(&self, flight: &FlightForm) -> Result<Flight, ServiceError> {
        let created = sqlx::query_as::<_, Flight>(&format!(
            "INSERT INTO flights (route_id, plane_id, departure_date, departure_time, arrival_time, price)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {}",
            FLIGHT_COLUMNS
        ))
        .bind(flight.route_id)
        .bind(flight.plane_id)
        .bind(flight.departure_date)
        .bind(flight.departure_time)
        .bind(flight.arrival_time)
        .bind(flight.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, flight: &Flight) -> Result<(), ServiceError> {
        sqlx::query(
            "UPDATE flights SET route_id = ?, plane_id = ?, departure_date = ?, departure_time = ?,
                    arrival_time = ?, price = ?
             WHERE id = ?",
        )
        .bind(flight.route_id)
        .bind(flight.plane_id)
        .bind(flight.departure_date)
        .bind(flight.departure_time)
        .bind(flight.arrival_time)
        .bind(flight.price)
        .bind(flight.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let result = sqlx::query("DELETE FROM flights WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
