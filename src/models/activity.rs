use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};

use crate::models::UserOption;

/// One row of the activity log.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct LogEntry {
    pub id: i64,
    pub user_id: Option<i64>,
    pub affected_table: Option<String>,
    pub action_json: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, ToSchema)]
pub struct LogEntryDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub entry: LogEntry,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditAction {
    Insert,
    Update,
    Delete,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Insert => "INSERT",
            AuditAction::Update => "UPDATE",
            AuditAction::Delete => "DELETE",
        }
    }
}

/// Tables that write activity log entries.
pub mod tables {
    pub const PLANES: &str = "planes";
    pub const CLIENTS: &str = "clients";
    pub const ROUTES: &str = "routes";
    pub const FLIGHTS: &str = "flights";
    pub const RESERVATIONS: &str = "reservations";
    pub const PASSENGERS: &str = "passengers";
    pub const ROLES: &str = "roles";
    pub const SYSTEM_USERS: &str = "system_users";
}

/// Filters for listing the activity log. Dates are inclusive whole days (UTC).
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct LogFilter {
    /// Exact table name
    pub table: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub to: Option<NaiveDate>,
}

// Filter forms submit untouched fields as `key=`
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl LogFilter {
    pub fn from_timestamp(&self) -> Option<DateTime<Utc>> {
        self.from
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }

    /// Exclusive upper bound: midnight after `to`.
    pub fn until_timestamp(&self) -> Option<DateTime<Utc>> {
        self.to
            .and_then(|date| date.succ_opt())
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LogOptions {
    pub tables: Vec<String>,
    pub users: Vec<UserOption>,
}

/// Pretty-prints a stored action document; text that is not JSON comes back unchanged.
pub fn format_action(action_json: &str) -> String {
    serde_json::from_str::<serde_json::Value>(action_json)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| action_json.to_string())
}
