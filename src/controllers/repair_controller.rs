use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::search_dto::RepairSearchQuery;
use crate::models::repair::{RepairResponse, UpdateRepairRequest};
use crate::repositories::repair_repository::RepairRepository;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::effective_limit;

pub struct RepairController {
    repository: RepairRepository,
}

impl RepairController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: RepairRepository::new(pool),
        }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<RepairResponse, AppError> {
        let repair = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Repair", &id.to_string()))?;

        Ok(repair.into())
    }

    /// Sin filtros no se devuelve nada
    pub async fn search(&self, query: RepairSearchQuery) -> Result<Vec<RepairResponse>, AppError> {
        query.validate()?;

        if !query.has_filters() {
            return Ok(Vec::new());
        }

        let repairs = self
            .repository
            .search(
                query.license_plate.as_deref(),
                query.client_name.as_deref(),
                query.status,
                effective_limit(query.limit),
            )
            .await?;

        Ok(repairs.into_iter().map(RepairResponse::from).collect())
    }

    pub async fn update(&self, id: Uuid, request: UpdateRepairRequest) -> Result<RepairResponse, AppError> {
        request.validate()?;

        let mut repair = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Repair", &id.to_string()))?;

        request.apply_to(&mut repair);
        repair.check_dates()?;

        let updated = self
            .repository
            .update(&repair)
            .await?
            .ok_or_else(|| not_found_error("Repair", &id.to_string()))?;

        info!("Reparación {} actualizada, estado: {}", updated.id, updated.status);
        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.soft_delete(id).await? {
            return Err(not_found_error("Repair", &id.to_string()));
        }

        info!("Reparación eliminada: {}", id);
        Ok(())
    }
}
