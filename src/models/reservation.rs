use chrono::{NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{validation, ServiceError};

pub const RESERVATION_CODE_PREFIX: &str = "GRN-";

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct Reservation {
    pub id: i64,
    pub client_id: Option<i64>,
    pub flight_id: Option<i64>,
    pub reservation_date: Option<NaiveDate>,
    pub reservation_code: String,
    pub notes: Option<String>,
}

/// Reservation joined with its client, flight and the flight's route.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, ToSchema)]
pub struct ReservationDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub reservation: Reservation,
    pub client_name: Option<String>,
    pub client_identification: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub departure_time: Option<NaiveTime>,
    pub route_origin: Option<String>,
    pub route_destination: Option<String>,
}

/// Short reservation description used by the passenger screens.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, ToSchema)]
pub struct ReservationSummary {
    pub id: i64,
    pub reservation_code: String,
    pub client_name: Option<String>,
    pub departure_date: Option<NaiveDate>,
    pub route_origin: Option<String>,
    pub route_destination: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, ToSchema)]
pub struct ClientOption {
    pub id: i64,
    pub name: String,
    pub identification: String,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, ToSchema)]
pub struct FlightOption {
    pub id: i64,
    pub departure_date: NaiveDate,
    pub departure_time: NaiveTime,
    pub route_origin: Option<String>,
    pub route_destination: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReservationOptions {
    pub clients: Vec<ClientOption>,
    pub flights: Vec<FlightOption>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ReservationForm {
    pub client_id: Option<i64>,
    pub flight_id: Option<i64>,
    pub reservation_date: Option<NaiveDate>,
    #[serde(default)]
    pub reservation_code: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewReservation {
    pub client_id: i64,
    pub flight_id: i64,
    pub reservation_date: NaiveDate,
    pub reservation_code: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ReservationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_date: Option<NaiveDate>,
    /// A blank code asks for a freshly generated one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Builds a code from the last six digits of a millisecond timestamp.
/// Codes are not checked for collisions.
pub fn reservation_code_from_millis(millis: i64) -> String {
    let digits = millis.unsigned_abs().to_string();
    let suffix = &digits[digits.len().saturating_sub(6)..];
    format!("{}{:0>6}", RESERVATION_CODE_PREFIX, suffix)
}

pub fn generate_reservation_code() -> String {
    reservation_code_from_millis(Utc::now().timestamp_millis())
}

fn code_or_generated(code: Option<&str>) -> String {
    validation::optional(code).unwrap_or_else(generate_reservation_code)
}

impl ReservationForm {
    pub fn validate(&self) -> Result<NewReservation, ServiceError> {
        let (Some(client_id), Some(flight_id), Some(reservation_date)) =
            (self.client_id, self.flight_id, self.reservation_date)
        else {
            return Err(ServiceError::ValidationError(
                "Client, flight and reservation date are required".to_string(),
            ));
        };

        Ok(NewReservation {
            client_id,
            flight_id,
            reservation_date,
            reservation_code: code_or_generated(self.reservation_code.as_deref()),
            notes: validation::optional(self.notes.as_deref()),
        })
    }
}

impl ReservationPatch {
    /// Replaces an explicitly blank code with a generated one so the audit
    /// record shows the code that was stored.
    pub fn with_resolved_code(mut self) -> Self {
        if let Some(code) = self.reservation_code.take() {
            self.reservation_code = Some(code_or_generated(Some(&code)));
        }
        self
    }
}

impl Reservation {
    pub fn apply(self, patch: &ReservationPatch) -> Reservation {
        Reservation {
            id: self.id,
            client_id: patch.client_id.or(self.client_id),
            flight_id: patch.flight_id.or(self.flight_id),
            reservation_date: patch.reservation_date.or(self.reservation_date),
            reservation_code: match &patch.reservation_code {
                Some(code) => code_or_generated(Some(code)),
                None => self.reservation_code,
            },
            notes: match &patch.notes {
                Some(notes) => validation::optional(Some(notes)),
                None => self.notes,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_uses_last_six_digits() {
        assert_eq!(reservation_code_from_millis(1_718_000_123_456), "GRN-123456");
        assert_eq!(reservation_code_from_millis(42), "GRN-000042");
    }

    #[test]
    fn generated_code_has_expected_shape() {
        let code = generate_reservation_code();
        assert!(code.starts_with(RESERVATION_CODE_PREFIX));
        let suffix = &code[RESERVATION_CODE_PREFIX.len()..];
        assert_eq!(suffix.len(), 6);
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn form_requires_client_flight_and_date() {
        let form = ReservationForm {
            client_id: Some(1),
            flight_id: None,
            reservation_date: NaiveDate::from_ymd_opt(2030, 1, 1),
            reservation_code: None,
            notes: None,
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn blank_code_is_generated_and_given_code_is_kept() {
        let mut form = ReservationForm {
            client_id: Some(1),
            flight_id: Some(2),
            reservation_date: NaiveDate::from_ymd_opt(2030, 1, 1),
            reservation_code: Some("   ".to_string()),
            notes: None,
        };
        assert!(form.validate().unwrap().reservation_code.starts_with("GRN-"));

        form.reservation_code = Some(" ABC-1 ".to_string());
        assert_eq!(form.validate().unwrap().reservation_code, "ABC-1");
    }

    #[test]
    fn patch_without_code_keeps_existing_code() {
        let reservation = Reservation {
            id: 1,
            client_id: Some(1),
            flight_id: Some(1),
            reservation_date: NaiveDate::from_ymd_opt(2030, 1, 1),
            reservation_code: "GRN-000001".to_string(),
            notes: None,
        };
        let patch = ReservationPatch {
            notes: Some("window seat".to_string()),
            ..Default::default()
        };
        let updated = reservation.apply(&patch);
        assert_eq!(updated.reservation_code, "GRN-000001");
        assert_eq!(updated.notes.as_deref(), Some("window seat"));
    }
}
