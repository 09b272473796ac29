//! Modelo de Capsule
//!
//! Una cápsula guarda un mensaje de texto que solo se revela a partir
//! de su fecha de desbloqueo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::{validate_future_date, validate_not_blank};

#[derive(Debug, Clone, FromRow)]
pub struct Capsule {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub email: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub unlock_date: DateTime<Utc>,
}

impl Capsule {
    pub fn is_unlocked_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.unlock_date
    }
}

/// Request para crear una cápsula
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCapsuleRequest {
    #[validate(email, length(max = 255))]
    pub email: String,

    #[validate(length(min = 1, max = 10000), custom = "validate_not_blank")]
    pub content: String,

    #[validate(custom = "validate_future_date")]
    pub unlock_date: DateTime<Utc>,
}

impl CreateCapsuleRequest {
    pub fn into_capsule(self, sender_id: Uuid) -> Capsule {
        Capsule {
            id: Uuid::new_v4(),
            sender_id,
            email: self.email.trim().to_string(),
            content: self.content,
            created_at: Utc::now(),
            unlock_date: self.unlock_date,
        }
    }
}

/// Response de cápsula: el contenido solo aparece una vez desbloqueada
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapsuleResponse {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub unlock_date: DateTime<Utc>,
    pub locked: bool,
    pub content: Option<String>,
}

impl CapsuleResponse {
    pub fn at(capsule: Capsule, now: DateTime<Utc>) -> Self {
        let locked = !capsule.is_unlocked_at(now);
        Self {
            id: capsule.id,
            sender_id: capsule.sender_id,
            email: capsule.email,
            created_at: capsule.created_at,
            unlock_date: capsule.unlock_date,
            locked,
            content: if locked { None } else { Some(capsule.content) },
        }
    }
}
