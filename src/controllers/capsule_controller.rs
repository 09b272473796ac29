use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::models::capsule::{CapsuleResponse, CreateCapsuleRequest};
use crate::repositories::capsule_repository::CapsuleRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct CapsuleController {
    repository: CapsuleRepository,
}

impl CapsuleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: CapsuleRepository::new(pool),
        }
    }

    pub async fn create(&self, sender_id: Uuid, request: CreateCapsuleRequest) -> Result<CapsuleResponse, AppError> {
        request.validate()?;

        let capsule = self.repository.create(&request.into_capsule(sender_id)).await?;
        info!("Cápsula {} creada, se abre el {}", capsule.id, capsule.unlock_date);

        Ok(CapsuleResponse::at(capsule, Utc::now()))
    }

    /// El contenido solo se revela a partir de `unlock_date`
    pub async fn get_by_id(&self, id: Uuid) -> Result<CapsuleResponse, AppError> {
        let capsule = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Capsule", &id.to_string()))?;

        Ok(CapsuleResponse::at(capsule, Utc::now()))
    }
}
