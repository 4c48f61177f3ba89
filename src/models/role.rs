use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{validation, ServiceError};

/// Role id granted access to the admin API.
pub const ADMIN_ROLE_ID: i64 = 1;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoleForm {
    pub name: String,
}

impl RoleForm {
    pub fn validate(&self) -> Result<RoleForm, ServiceError> {
        Ok(RoleForm {
            name: validation::required(&self.name, "Role name is required")?,
        })
    }
}
