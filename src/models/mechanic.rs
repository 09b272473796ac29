//! Modelo de Mechanic
//!
//! Este módulo contiene el struct Mechanic y sus variantes para CRUD operations.
//! Mapea exactamente a la tabla `mechanics`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::validate_not_blank;

/// Mechanic principal - mapea exactamente a la tabla mechanics
#[derive(Debug, Clone, FromRow)]
pub struct Mechanic {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Mechanic {
    pub fn new(name: String, email: String, password_hash: String, phone: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            phone,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }
}

/// Request para actualizar un mecánico existente (solo los campos presentes)
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateMechanicRequest {
    #[validate(length(min = 2, max = 100), custom = "validate_not_blank")]
    pub name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 6, max = 30))]
    pub phone: Option<String>,
}

impl UpdateMechanicRequest {
    /// Aplica los campos presentes sobre el mecánico
    pub fn apply_to(self, mechanic: &mut Mechanic) {
        if let Some(name) = self.name {
            mechanic.name = name.trim().to_string();
        }
        if let Some(email) = self.email {
            mechanic.email = email.trim().to_lowercase();
        }
        if let Some(phone) = self.phone {
            mechanic.phone = phone.trim().to_string();
        }
    }
}

/// Response de mecánico para la API (sin password)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MechanicResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl From<Mechanic> for MechanicResponse {
    fn from(mechanic: Mechanic) -> Self {
        Self {
            id: mechanic.id,
            name: mechanic.name,
            email: mechanic.email,
            phone: mechanic.phone,
            created_at: mechanic.created_at,
        }
    }
}
