use crate::models::{DashboardStats, ServiceError, UpcomingFlight};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn stats(&self) -> Result<DashboardStats, ServiceError>;
    /// Flights with both a route and a plane departing on or after `from`,
    /// soonest first. `None` returns every such flight.
    async fn upcoming_flights(
        &self,
        from: NaiveDate,
        limit: Option<i64>,
    ) -> Result<Vec<UpcomingFlight>, ServiceError>;
}

pub struct SqliteDashboardRepository {
    pool: SqlitePool,
}

impl SqliteDashboardRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn count(&self, table: &str) -> Result<i64, ServiceError> {
        let count = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl DashboardRepository for SqliteDashboardRepository {
    async fn stats(&self) -> Result<DashboardStats, ServiceError> {
        let (flights, reservations, clients, planes) = tokio::try_join!(
            self.count("flights"),
            self.count("reservations"),
            self.count("clients"),
            self.count("planes"),
        )?;

        Ok(DashboardStats {
            flights,
            reservations,
            clients,
            planes,
        })
    }

    async fn upcoming_flights(
        &self,
        from: NaiveDate,
        limit: Option<i64>,
    ) -> Result<Vec<UpcomingFlight>, ServiceError> {
        let flights = sqlx::query_as::<_, UpcomingFlight>(
            "SELECT f.id, f.departure_date, f.departure_time, f.price,
                    r.origin, r.destination, p.model AS plane_model
             FROM flights f
             INNER JOIN routes r ON r.id = f.route_id
             INNER JOIN planes p ON p.id = f.plane_id
             WHERE f.departure_date >= ?
             ORDER BY f.departure_date ASC, f.departure_time ASC
             LIMIT ?",
        )
        .bind(from)
        // A negative LIMIT means no limit in SQLite
        .bind(limit.unwrap_or(-1))
        .fetch_all(&self.pool)
        .await?;

        Ok(flights)
    }
}
