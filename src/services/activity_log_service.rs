use crate::models::{
    format_action, AuditAction, LogEntryDetails, LogFilter, LogOptions, ServiceError,
};
use crate::repositories::{ActivityLogRepository, SystemUserRepository};
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Writes and reads the activity log.
///
/// Audit writes happen after the mutation they describe and outside any
/// transaction with it. A failed write is logged and dropped; it never fails
/// the caller's request.
pub struct ActivityLogService {
    repository: Arc<dyn ActivityLogRepository>,
    user_repository: Arc<dyn SystemUserRepository>,
}

impl ActivityLogService {
    pub fn new(
        repository: Arc<dyn ActivityLogRepository>,
        user_repository: Arc<dyn SystemUserRepository>,
    ) -> Self {
        Self {
            repository,
            user_repository,
        }
    }

    pub async fn record(&self, user_id: i64, table: &str, action: AuditAction, data: Value) {
        let now = Utc::now();
        let action_json = json!({
            "action": action.as_str(),
            "data": data,
            "timestamp": now.to_rfc3339(),
        })
        .to_string();

        if let Err(e) = self
            .repository
            .insert(Some(user_id), table, &action_json, now)
            .await
        {
            tracing::error!(
                user_id,
                table,
                action = action.as_str(),
                "Failed to write activity log entry: {}",
                e
            );
        }
    }

    /// Matching entries, newest first, with `action_json` pretty-printed for display.
    pub async fn list(&self, filter: &LogFilter) -> Result<Vec<LogEntryDetails>, ServiceError> {
        let mut entries = self.repository.find_filtered(filter).await?;
        for details in &mut entries {
            if let Some(action_json) = details.entry.action_json.as_mut() {
                *action_json = format_action(action_json);
            }
        }
        Ok(entries)
    }

    pub async fn options(&self) -> Result<LogOptions, ServiceError> {
        Ok(LogOptions {
            tables: self.repository.find_tables().await?,
            users: self.user_repository.find_options().await?,
        })
    }
}

/// Serializes a stored row for an audit record.
pub fn row_record<T: Serialize>(row: &T) -> Value {
    serde_json::to_value(row).unwrap_or_default()
}

/// Audit payload for an update: the row id plus the fields that were sent.
pub fn patch_record<T: Serialize>(id: i64, patch: &T) -> Value {
    let mut record = json!({ "id": id });
    if let (Some(target), Value::Object(fields)) = (record.as_object_mut(), row_record(patch)) {
        target.extend(fields);
    }
    record
}

pub fn delete_record(id: i64) -> Value {
    json!({ "id": id })
}
