use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{validation, ServiceError};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct Route {
    pub id: i64,
    pub origin: String,
    pub destination: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RouteForm {
    pub origin: String,
    pub destination: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RoutePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

impl RouteForm {
    pub fn validate(&self) -> Result<RouteForm, ServiceError> {
        let origin = validation::required(&self.origin, "Origin is required")?;
        let destination = validation::required(&self.destination, "Destination is required")?;
        ensure_distinct(&origin, &destination)?;
        Ok(RouteForm {
            origin,
            destination,
        })
    }
}

impl Route {
    pub fn apply(self, patch: &RoutePatch) -> Result<Route, ServiceError> {
        let origin = match &patch.origin {
            Some(origin) => validation::required(origin, "Origin is required")?,
            None => self.origin,
        };
        let destination = match &patch.destination {
            Some(destination) => validation::required(destination, "Destination is required")?,
            None => self.destination,
        };
        ensure_distinct(&origin, &destination)?;

        Ok(Route {
            id: self.id,
            origin,
            destination,
        })
    }
}

fn ensure_distinct(origin: &str, destination: &str) -> Result<(), ServiceError> {
    if origin.trim().to_lowercase() == destination.trim().to_lowercase() {
        return Err(ServiceError::ValidationError(
            "Origin and destination cannot be the same".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_endpoints_rejected_ignoring_case() {
        let form = RouteForm {
            origin: "Quito".to_string(),
            destination: " QUITO ".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn patch_checks_merged_route() {
        let route = Route {
            id: 1,
            origin: "Quito".to_string(),
            destination: "Lima".to_string(),
        };
        let patch = RoutePatch {
            destination: Some("quito".to_string()),
            ..Default::default()
        };
        assert!(route.apply(&patch).is_err());
    }
}
