use crate::models::{Client, ClientOption, NewClient, ServiceError};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Client>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, ServiceError>;
    /// Id of a client with this email, ignoring `exclude_id`.
    async fn find_id_by_email(
        &self,
        email: &str,
        exclude_id: Option<i64>,
    ) -> Result<Option<i64>, ServiceError>;
    async fn find_id_by_phone(
        &self,
        phone: &str,
        exclude_id: Option<i64>,
    ) -> Result<Option<i64>, ServiceError>;
    async fn find_options(&self) -> Result<Vec<ClientOption>, ServiceError>;
    async fn insert(&self, client: &NewClient) -> Result<Client, ServiceError>;
    async fn update(&self, client: &Client) -> Result<(), ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

pub struct SqliteClientRepository {
    pool: SqlitePool,
}

impl SqliteClientRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for SqliteClientRepository {
    async fn find_all(&self) -> Result<Vec<Client>, ServiceError> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT id, name, identification, phone, email FROM clients ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, ServiceError> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT id, name, identification, phone, email FROM clients WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(client)
    }

    async fn find_id_by_email(
        &self,
        email: &str,
        exclude_id: Option<i64>,
    ) -> Result<Option<i64>, ServiceError> {
        let id = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM clients WHERE email = ? AND (? IS NULL OR id != ?) LIMIT 1",
        )
        .bind(email)
        .bind(exclude_id)
        .bind(exclude_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(id)
    }

    async fn find_id_by_phone(
        &self,
        phone: &str,
        exclude_id: Option<i64>,
    ) -> Result<Option<i64>, ServiceError> {
        let id = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM clients WHERE phone = ? AND (? IS NULL OR id != ?) LIMIT 1",
        )
        .bind(phone)
        .bind(exclude_id)
        .bind(exclude_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(id)
    }

    async fn find_options(&self) -> Result<Vec<ClientOption>, ServiceError> {
        let options = sqlx::query_as::<_, ClientOption>(
            "SELECT id, name, identification FROM clients ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(options)
    }

    async fn insert(&self, client: &NewClient) -> Result<Client, ServiceError> {
        let created = sqlx::query_as::<_, Client>(
            "INSERT INTO clients (name, identification, phone, email) VALUES (?, ?, ?, ?)
             RETURNING id, name, identification, phone, email",
        )
        .bind(&client.name)
        .bind(&client.identification)
        .bind(&client.phone)
        .bind(&client.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, client: &Client) -> Result<(), ServiceError> {
        sqlx::query(
            "UPDATE clients SET name = ?, identification = ?, phone = ?, email = ? WHERE id = ?",
        )
        .bind(&client.name)
        .bind(&client.identification)
        .bind(&client.phone)
        .bind(&client.email)
        .bind(client.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
