use crate::models::{ServiceError, SystemUser, SystemUserDetails, UserOption};
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Fields for a new account; `password_hash` is already hashed.
pub struct NewSystemUser<'a> {
    pub username: &'a str,
    pub role_id: i64,
    pub email: &'a str,
    pub password_hash: &'a str,
}

#[async_trait]
pub trait SystemUserRepository: Send + Sync {
    async fn find_all_details(&self) -> Result<Vec<SystemUserDetails>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<SystemUser>, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<SystemUser>, ServiceError>;
    async fn find_id_by_email(
        &self,
        email: &str,
        exclude_id: Option<i64>,
    ) -> Result<Option<i64>, ServiceError>;
    async fn find_options(&self) -> Result<Vec<UserOption>, ServiceError>;
    async fn count(&self) -> Result<i64, ServiceError>;
    async fn insert(&self, user: NewSystemUser<'_>) -> Result<SystemUser, ServiceError>;
    async fn update(&self, user: &SystemUser) -> Result<(), ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

pub struct SqliteSystemUserRepository {
    pool: SqlitePool,
}

impl SqliteSystemUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SystemUserRepository for SqliteSystemUserRepository {
    async fn find_all_details(&self) -> Result<Vec<SystemUserDetails>, ServiceError> {
        let users = sqlx::query_as::<_, SystemUserDetails>(
            "SELECT u.id, u.username, u.role_id, u.email, u.password_hash, r.name AS role_name
             FROM system_users u
             LEFT JOIN roles r ON r.id = u.role_id
             ORDER BY u.username",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<SystemUser>, ServiceError> {
        let user = sqlx::query_as::<_, SystemUser>(
            "SELECT id, username, role_id, email, password_hash FROM system_users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<SystemUser>, ServiceError> {
        let user = sqlx::query_as::<_, SystemUser>(
            "SELECT id, username, role_id, email, password_hash FROM system_users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_id_by_email(
        &self,
        email: &str,
        exclude_id: Option<i64>,
    ) -> Result<Option<i64>, ServiceError> {
        let id = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM system_users WHERE email = ? AND (? IS NULL OR id != ?) LIMIT 1",
        )
        .bind(email)
        .bind(exclude_id)
        .bind(exclude_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(id)
    }

    async fn find_options(&self) -> Result<Vec<UserOption>, ServiceError> {
        let users = sqlx::query_as::<_, UserOption>(
            "SELECT id, username FROM system_users ORDER BY username",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn count(&self) -> Result<i64, ServiceError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM system_users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn insert(&self, user: NewSystemUser<'_>) -> Result<SystemUser, ServiceError> {
        let created = sqlx::query_as::<_, SystemUser>(
            "INSERT INTO system_users (username, role_id, email, password_hash) VALUES (?, ?, ?, ?)
             RETURNING id, username, role_id, email, password_hash",
        )
        .bind(user.username)
        .bind(user.role_id)
        .bind(user.email)
        .bind(user.password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, user: &SystemUser) -> Result<(), ServiceError> {
        sqlx::query(
            "UPDATE system_users SET username = ?, role_id = ?, email = ?, password_hash = ? WHERE id = ?",
        )
        .bind(&user.username)
        .bind(user.role_id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let result = sqlx::query("DELETE FROM system_users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
