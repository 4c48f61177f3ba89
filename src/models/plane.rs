use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{validation, ServiceError};

/// A plane in the fleet.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct Plane {
    pub id: i64,
    pub model: String,
    pub capacity: i64,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PlaneForm {
    pub model: String,
    pub capacity: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PlanePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
}

impl PlaneForm {
    pub fn validate(&self) -> Result<PlaneForm, ServiceError> {
        let model = validation::required(&self.model, "Model is required")?;
        validate_capacity(self.capacity)?;
        Ok(PlaneForm {
            model,
            capacity: self.capacity,
        })
    }
}

impl Plane {
    pub fn apply(self, patch: &PlanePatch) -> Result<Plane, ServiceError> {
        let model = match &patch.model {
            Some(model) => validation::required(model, "Model is required")?,
            None => self.model,
        };
        let capacity = patch.capacity.unwrap_or(self.capacity);
        validate_capacity(capacity)?;

        Ok(Plane {
            id: self.id,
            model,
            capacity,
        })
    }
}

fn validate_capacity(capacity: i64) -> Result<(), ServiceError> {
    if capacity <= 0 {
        return Err(ServiceError::ValidationError(
            "Capacity must be a number greater than 0".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_rejects_non_positive_capacity() {
        let form = PlaneForm {
            model: "A320".to_string(),
            capacity: 0,
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn patch_keeps_untouched_fields() {
        let plane = Plane {
            id: 3,
            model: "A320".to_string(),
            capacity: 180,
        };
        let patch = PlanePatch {
            capacity: Some(186),
            ..Default::default()
        };
        let updated = plane.apply(&patch).unwrap();
        assert_eq!(updated.model, "A320");
        assert_eq!(updated.capacity, 186);
    }
}
