use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{validation, ServiceError};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, ToSchema)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub identification: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ClientForm {
    pub name: String,
    pub identification: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub email: String,
}

/// Validated insert payload. Blank phone numbers are stored as NULL.
#[derive(Debug, Clone, Serialize)]
pub struct NewClient {
    pub name: String,
    pub identification: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ClientPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ClientForm {
    pub fn validate(&self) -> Result<NewClient, ServiceError> {
        Ok(NewClient {
            name: validation::required(&self.name, "Name is required")?,
            identification: validation::required(
                &self.identification,
                "Identification is required",
            )?,
            phone: validation::optional(self.phone.as_deref()),
            email: Some(validation::email(&self.email)?),
        })
    }
}

impl ClientPatch {
    /// Phone to check for uniqueness, if the patch sets a non-blank one.
    pub fn phone_to_check(&self) -> Option<String> {
        validation::optional(self.phone.as_deref())
    }

    pub fn email_to_check(&self) -> Option<String> {
        validation::optional(self.email.as_deref())
    }
}

impl Client {
    pub fn apply(self, patch: &ClientPatch) -> Result<Client, ServiceError> {
        let name = match &patch.name {
            Some(name) => validation::required(name, "Name is required")?,
            None => self.name,
        };
        let identification = match &patch.identification {
            Some(identification) => {
                validation::required(identification, "Identification is required")?
            }
            None => self.identification,
        };
        let phone = match &patch.phone {
            Some(phone) => validation::optional(Some(phone)),
            None => self.phone,
        };
        let email = match &patch.email {
            Some(email) => Some(validation::email(email)?),
            None => self.email,
        };

        Ok(Client {
            id: self.id,
            name,
            identification,
            phone,
            email,
        })
    }
}
