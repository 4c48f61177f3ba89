use crate::models::{NewPassenger, Passenger, PassengerDetails, ServiceError};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
pub trait PassengerRepository: Send + Sync {
    async fn find_all_details(&self) -> Result<Vec<PassengerDetails>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Passenger>, ServiceError>;
    async fn insert(&self, passenger: &NewPassenger) -> Result<Passenger, ServiceError>;
    async fn update(&self, passenger: &Passenger) -> Result<(), ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

pub struct SqlitePassengerRepository {
    pool: SqlitePool,
}

impl SqlitePassengerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PassengerRepository for SqlitePassengerRepository {
    async fn find_all_details(&self) -> Result<Vec<PassengerDetails>, ServiceError> {
        let passengers = sqlx::query_as::<_, PassengerDetails>(
            "SELECT p.id, p.reservation_id, p.name, p.identification,
                    res.reservation_code, c.name AS client_name, f.departure_date,
                    r.origin AS route_origin, r.destination AS route_destination
             FROM passengers p
             LEFT JOIN reservations res ON res.id = p.reservation_id
             LEFT JOIN clients c ON c.id = res.client_id
             LEFT JOIN flights f ON f.id = res.flight_id
             LEFT JOIN routes r ON r.id = f.route_id
             ORDER BY p.name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(passengers)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Passenger>, ServiceError> {
        let passenger = sqlx::query_as::<_, Passenger>(
            "SELECT id, reservation_id, name, identification FROM passengers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(passenger)
    }

    async fn insert(&self, passenger: &NewPassenger) -> Result<Passenger, ServiceError> {
        let created = sqlx::query_as::<_, Passenger>(
            "INSERT INTO passengers (reservation_id, name, identification) VALUES (?, ?, ?)
             RETURNING id, reservation_id, name, identification",
        )
        .bind(passenger.reservation_id)
        .bind(&passenger.name)
        .bind(&passenger.identification)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, passenger: &Passenger) -> Result<(), ServiceError> {
        sqlx::query(
            "UPDATE passengers SET reservation_id = ?, name = ?, identification = ? WHERE id = ?",
        )
        .bind(passenger.reservation_id)
        .bind(&passenger.name)
        .bind(&passenger.identification)
        .bind(passenger.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let result = sqlx::query("DELETE FROM passengers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
