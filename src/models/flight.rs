use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Plane, Route, ServiceError};

/// A scheduled flight. Times are local wall-clock times on `departure_date`.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct Flight {
    pub id: i64,
    pub route_id: Option<i64>,
    pub plane_id: Option<i64>,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub arrival_time: NaiveTime,
    pub price: f64,
}

/// Flight joined with its route and plane for listing.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, ToSchema)]
pub struct FlightDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub flight: Flight,
    pub route_origin: Option<String>,
    pub route_destination: Option<String>,
    pub plane_model: Option<String>,
    pub plane_capacity: Option<i64>,
}

/// Upcoming flight summary shown on the dashboard.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, ToSchema)]
pub struct UpcomingFlight {
    pub id: i64,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub price: f64,
    pub origin: String,
    pub destination: String,
    pub plane_model: String,
}

impl UpcomingFlight {
    /// True when origin or destination contains `needle`, which must
    /// already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.origin.to_lowercase().contains(needle)
            || self.destination.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct FlightForm {
    pub route_id: i64,
    pub plane_id: i64,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub arrival_time: NaiveTime,
    pub price: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct FlightPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plane_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Selection lists for the flight form.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FlightOptions {
    pub routes: Vec<Route>,
    pub planes: Vec<Plane>,
}

impl FlightForm {
    pub fn validate(&self) -> Result<(), ServiceError> {
        validate_schedule(self.departure_time, self.arrival_time)?;
        validate_price(self.price)
    }
}

impl Flight {
    pub fn apply(self, patch: &FlightPatch) -> Result<Flight, ServiceError> {
        let flight = Flight {
            id: self.id,
            route_id: patch.route_id.or(self.route_id),
            plane_id: patch.plane_id.or(self.plane_id),
            departure_date: patch.departure_date.unwrap_or(self.departure_date),
            departure_time: patch.departure_time.unwrap_or(self.departure_time),
            arrival_time: patch.arrival_time.unwrap_or(self.arrival_time),
            price: patch.price.unwrap_or(self.price),
        };
        validate_schedule(flight.departure_time, flight.arrival_time)?;
        validate_price(flight.price)?;
        Ok(flight)
    }
}

fn validate_schedule(departure: NaiveTime, arrival: NaiveTime) -> Result<(), ServiceError> {
    if arrival <= departure {
        return Err(ServiceError::ValidationError(
            "Arrival time must be later than departure time".to_string(),
        ));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), ServiceError> {
    if !(price > 0.0) {
        return Err(ServiceError::ValidationError(
            "Price must be greater than 0".to_string(),
        ));
    }
    Ok(())
}
