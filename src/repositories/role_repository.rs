use crate::models::{Role, ServiceError};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Role>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Role>, ServiceError>;
    async fn find_id_by_name(
        &self,
        name: &str,
        exclude_id: Option<i64>,
    ) -> Result<Option<i64>, ServiceError>;
    async fn insert(&self, name: &str) -> Result<Role, ServiceError>;
    async fn update(&self, role: &Role) -> Result<(), ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

pub struct SqliteRoleRepository {
    pool: SqlitePool,
}

impl SqliteRoleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepository for SqliteRoleRepository {
    async fn find_all(&self) -> Result<Vec<Role>, ServiceError> {
        let roles = sqlx::query_as::<_, Role>("SELECT id, name FROM roles ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(roles)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Role>, ServiceError> {
        let role = sqlx::query_as::<_, Role>("SELECT id, name FROM roles WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(role)
    }

    async fn find_id_by_name(
        &self,
        name: &str,
        exclude_id: Option<i64>,
    ) -> Result<Option<i64>, ServiceError> {
        let id = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM roles WHERE name = ? AND (? IS NULL OR id != ?) LIMIT 1",
        )
        .bind(name)
        .bind(exclude_id)
        .bind(exclude_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(id)
    }

    async fn insert(&self, name: &str) -> Result<Role, ServiceError> {
        let role = sqlx::query_as::<_, Role>(
            "INSERT INTO roles (name) VALUES (?) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(role)
    }

    async fn update(&self, role: &Role) -> Result<(), ServiceError> {
        sqlx::query("UPDATE roles SET name = ? WHERE id = ?")
            .bind(&role.name)
            .bind(role.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let result = sqlx::query("DELETE FROM roles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
