use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{validation, ReservationSummary, ServiceError};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct Passenger {
    pub id: i64,
    pub reservation_id: Option<i64>,
    pub name: String,
    pub identification: String,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, ToSchema)]
pub struct PassengerDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub passenger: Passenger,
    pub reservation_code: Option<String>,
    pub client_name: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub route_origin: Option<String>,
    pub route_destination: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PassengerOptions {
    pub reservations: Vec<ReservationSummary>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PassengerForm {
    pub reservation_id: Option<i64>,
    pub name: String,
    pub identification: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPassenger {
    pub reservation_id: i64,
    pub name: String,
    pub identification: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PassengerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification: Option<String>,
}

const ALL_FIELDS_REQUIRED: &str = "All fields are required";

impl PassengerForm {
    pub fn validate(&self) -> Result<NewPassenger, ServiceError> {
        let reservation_id = self
            .reservation_id
            .ok_or_else(|| ServiceError::ValidationError(ALL_FIELDS_REQUIRED.to_string()))?;

        Ok(NewPassenger {
            reservation_id,
            name: validation::required(&self.name, ALL_FIELDS_REQUIRED)?,
            identification: validation::required(&self.identification, ALL_FIELDS_REQUIRED)?,
        })
    }
}

impl Passenger {
    pub fn apply(self, patch: &PassengerPatch) -> Result<Passenger, ServiceError> {
        Ok(Passenger {
            id: self.id,
            reservation_id: patch.reservation_id.or(self.reservation_id),
            name: match &patch.name {
                Some(name) => validation::required(name, ALL_FIELDS_REQUIRED)?,
                None => self.name,
            },
            identification: match &patch.identification {
                Some(identification) => validation::required(identification, ALL_FIELDS_REQUIRED)?,
                None => self.identification,
            },
        })
    }
}
