//! Modelo de Client
//!
//! Struct Client, requests de alta/actualización y response para la API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::validate_not_blank;

/// Client principal - mapea exactamente a la tabla clients
#[derive(Debug, Clone, FromRow)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Request para crear un nuevo cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(length(min = 2, max = 100), custom = "validate_not_blank")]
    pub name: String,

    #[validate(length(min = 6, max = 30))]
    pub phone: String,

    #[validate(email, length(max = 255))]
    pub email: String,
}

impl CreateClientRequest {
    pub fn into_client(self) -> Client {
        Client {
            id: Uuid::new_v4(),
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            created_at: Utc::now(),
            deleted_at: None,
        }
    }
}

/// Request para actualizar un cliente existente
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateClientRequest {
    #[validate(length(min = 2, max = 100), custom = "validate_not_blank")]
    pub name: Option<String>,

    #[validate(length(min = 6, max = 30))]
    pub phone: Option<String>,

    #[validate(email, length(max = 255))]
    pub email: Option<String>,
}

impl UpdateClientRequest {
    pub fn apply_to(self, client: &mut Client) {
        if let Some(name) = self.name {
            client.name = name.trim().to_string();
        }
        if let Some(phone) = self.phone {
            client.phone = phone.trim().to_string();
        }
        if let Some(email) = self.email {
            client.email = email.trim().to_string();
        }
    }
}

/// Response de cliente para la API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientResponse {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            phone: client.phone,
            email: client.email,
            created_at: client.created_at,
        }
    }
}
