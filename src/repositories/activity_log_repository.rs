use crate::models::{LogEntryDetails, LogFilter, ServiceError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

#[async_trait]
pub trait ActivityLogRepository: Send + Sync {
    async fn insert(
        &self,
        user_id: Option<i64>,
        affected_table: &str,
        action_json: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<(), ServiceError>;
    /// Newest entries first.
    async fn find_filtered(&self, filter: &LogFilter) -> Result<Vec<LogEntryDetails>, ServiceError>;
    async fn find_tables(&self) -> Result<Vec<String>, ServiceError>;
}

pub struct SqliteActivityLogRepository {
    pool: SqlitePool,
}

impl SqliteActivityLogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityLogRepository for SqliteActivityLogRepository {
    async fn insert(
        &self,
        user_id: Option<i64>,
        affected_table: &str,
        action_json: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<(), ServiceError> {
        sqlx::query(
            "INSERT INTO activity_log (user_id, affected_table, action_json, timestamp) VALUES (?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(affected_table)
        .bind(action_json)
        .bind(timestamp)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_filtered(&self, filter: &LogFilter) -> Result<Vec<LogEntryDetails>, ServiceError> {
        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT l.id, l.user_id, l.affected_table, l.action_json, l.timestamp, u.username
             FROM activity_log l
             LEFT JOIN system_users u ON u.id = l.user_id
             WHERE 1 = 1",
        );

        if let Some(table) = filter.table.as_deref().filter(|t| !t.is_empty()) {
            query.push(" AND l.affected_table = ").push_bind(table.to_string());
        }
        if let Some(user_id) = filter.user_id {
            query.push(" AND l.user_id = ").push_bind(user_id);
        }
        if let Some(from) = filter.from_timestamp() {
            query.push(" AND l.timestamp >= ").push_bind(from);
        }
        if let Some(until) = filter.until_timestamp() {
            query.push(" AND l.timestamp < ").push_bind(until);
        }
        query.push(" ORDER BY l.timestamp DESC, l.id DESC");

        let entries = query
            .build_query_as::<LogEntryDetails>()
            .fetch_all(&self.pool)
            .await?;

        Ok(entries)
    }

    async fn find_tables(&self) -> Result<Vec<String>, ServiceError> {
        let tables = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT affected_table FROM activity_log
             WHERE affected_table IS NOT NULL
             ORDER BY affected_table",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tables)
    }
}
