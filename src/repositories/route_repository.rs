use crate::models::{Route, RouteForm, ServiceError};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
pub trait RouteRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Route>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Route>, ServiceError>;
    async fn insert(&self, route: &RouteForm) -> Result<Route, ServiceError>;
    async fn update(&self, route: &Route) -> Result<(), ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

pub struct SqliteRouteRepository {
    pool: SqlitePool,
}

impl SqliteRouteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RouteRepository for SqliteRouteRepository {
    async fn find_all(&self) -> Result<Vec<Route>, ServiceError> {
        let routes = sqlx::query_as::<_, Route>(
            "SELECT id, origin, destination FROM routes ORDER BY origin",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(routes)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Route>, ServiceError> {
        let route = sqlx::query_as::<_, Route>(
            "SELECT id, origin, destination FROM routes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(route)
    }

    async fn insert(&self, route: &RouteForm) -> Result<Route, ServiceError> {
        let created = sqlx::query_as::<_, Route>(
            "INSERT INTO routes (origin, destination) VALUES (?, ?) RETURNING id, origin, destination",
        )
        .bind(&route.origin)
        .bind(&route.destination)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, route: &Route) -> Result<(), ServiceError> {
        sqlx::query("UPDATE routes SET origin = ?, destination = ? WHERE id = ?")
            .bind(&route.origin)
            .bind(&route.destination)
            .bind(route.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let result = sqlx::query("DELETE FROM routes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
