use crate::models::{Plane, PlaneForm, ServiceError};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
pub trait PlaneRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Plane>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Plane>, ServiceError>;
    async fn insert(&self, plane: &PlaneForm) -> Result<Plane, ServiceError>;
    async fn update(&self, plane: &Plane) -> Result<(), ServiceError>;
    /// Returns false when no row had that id.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

pub struct SqlitePlaneRepository {
    pool: SqlitePool,
}

impl SqlitePlaneRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlaneRepository for SqlitePlaneRepository {
    async fn find_all(&self) -> Result<Vec<Plane>, ServiceError> {
        let planes = sqlx::query_as::<_, Plane>(
            "SELECT id, model, capacity FROM planes ORDER BY model",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(planes)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Plane>, ServiceError> {
        let plane = sqlx::query_as::<_, Plane>(
            "SELECT id, model, capacity FROM planes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(plane)
    }

    async fn insert(&self, plane: &PlaneForm) -> Result<Plane, ServiceError> {
        let created = sqlx::query_as::<_, Plane>(
            "INSERT INTO planes (model, capacity) VALUES (?, ?) RETURNING id, model, capacity",
        )
        .bind(&plane.model)
        .bind(plane.capacity)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, plane: &Plane) -> Result<(), ServiceError> {
        sqlx::query("UPDATE planes SET model = ?, capacity = ? WHERE id = ?")
            .bind(&plane.model)
            .bind(plane.capacity)
            .bind(plane.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let result = sqlx::query("DELETE FROM planes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
